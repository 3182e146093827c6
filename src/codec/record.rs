//! Integer codec and CSV record format
//!
//! Input integers are either `0x`-prefixed hexadecimal or plain decimal.
//! Output integers are always `0x`-prefixed, lowercase and zero-padded to a
//! fixed width per field kind.

use crate::config::HashFamily;
use crate::error::{Result, UnihashError};
use crate::hash::HashParams;
use std::fmt;

/// Hex digits of a hash parameter (`p < 2^89` needs 23)
pub const PARAM_HEX_DIGITS: usize = 23;

/// Hex digits of a hash input (64 bits)
pub const INPUT_HEX_DIGITS: usize = 16;

/// Hex digits of a hash output (20 bits)
pub const OUTPUT_HEX_DIGITS: usize = 5;

/// Parse an integer field: `0x`-prefixed hex or decimal, surrounding
/// whitespace ignored.
pub fn parse_int(s: &str) -> std::result::Result<u128, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x") {
        Some(digits) => u128::from_str_radix(digits, 16),
        None => s.parse::<u128>(),
    };
    parsed.map_err(|e| format!("invalid integer '{}': {}", s, e))
}

/// A claimed hash output.
///
/// Claims are compared, never computed with, so any non-negative integer is
/// accepted and kept exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Claim {
    /// Fits in 128 bits
    Value(u128),
    /// Wider than 128 bits: little-endian 32-bit limbs, no trailing zero limbs
    Wide(Vec<u32>),
}

impl Claim {
    /// Parse a claim with the same syntax as [`parse_int`], without the
    /// 128-bit limit
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match parse_int(s) {
            Ok(value) => Ok(Self::Value(value)),
            Err(e) => parse_limbs(s.trim()).map(Self::Wide).ok_or(e),
        }
    }

    /// The claim as a machine integer, `None` when wider than 128 bits
    pub fn value(&self) -> Option<u128> {
        match self {
            Self::Value(value) => Some(*value),
            Self::Wide(_) => None,
        }
    }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{}", Hex::output(*value)),
            Self::Wide(limbs) => {
                let mut limbs = limbs.iter().rev();
                write!(f, "0x{:x}", limbs.next().copied().unwrap_or(0))?;
                for limb in limbs {
                    write!(f, "{:08x}", limb)?;
                }
                Ok(())
            }
        }
    }
}

fn parse_limbs(s: &str) -> Option<Vec<u32>> {
    let (digits, radix) = match s.strip_prefix("0x") {
        Some(digits) => (digits, 16),
        None => (s, 10),
    };
    if digits.is_empty() {
        return None;
    }

    let mut limbs: Vec<u32> = Vec::new();
    for c in digits.chars() {
        let mut carry = u64::from(c.to_digit(radix)?);
        for limb in limbs.iter_mut() {
            let acc = u64::from(*limb) * u64::from(radix) + carry;
            *limb = acc as u32;
            carry = acc >> 32;
        }
        if carry > 0 {
            limbs.push(carry as u32);
        }
    }
    Some(limbs)
}

/// Fixed-width `0x`-prefixed lowercase hex rendering of an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hex {
    value: u128,
    width: usize,
}

impl Hex {
    /// Render a hash parameter (23 digits)
    pub fn param(value: u128) -> Self {
        Self { value, width: PARAM_HEX_DIGITS }
    }

    /// Render a hash input (16 digits)
    pub fn input(value: u64) -> Self {
        Self { value: value as u128, width: INPUT_HEX_DIGITS }
    }

    /// Render a hash output (5 digits)
    pub fn output(value: impl Into<u128>) -> Self {
        Self { value: value.into(), width: OUTPUT_HEX_DIGITS }
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:0width$x}", self.value, width = self.width)
    }
}

/// Parameters and input rendered as `param,...,x`
pub struct KeyFields<'a> {
    params: &'a HashParams,
    x: u64,
}

impl fmt::Display for KeyFields<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.params.values() {
            write!(f, "{},", Hex::param(value))?;
        }
        write!(f, "{}", Hex::input(self.x))
    }
}

/// A generated hash instance whose output is derived from its inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Hash function parameters
    pub params: HashParams,
    /// Hash input
    pub x: u64,
    /// Hash output, always `params.hash(x)`
    pub y: u32,
}

impl Sample {
    /// Evaluate `params` on `x` and capture the result
    pub fn new(params: HashParams, x: u64) -> Self {
        Self { params, x, y: params.hash(x) }
    }

    /// The `param,...,x` prefix of this sample
    pub fn key(&self) -> KeyFields<'_> {
        KeyFields { params: &self.params, x: self.x }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.key(), Hex::output(self.y))
    }
}

/// One decoded input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Hash function parameters
    pub params: HashParams,
    /// Hash input
    pub x: u64,
    /// Claimed hash output (verify input only)
    pub y: Option<Claim>,
}

impl Record {
    /// Decode a comma-separated record.
    ///
    /// The line must hold exactly the family's parameters, then `x`, then
    /// `y` when `with_output` is set. `line_no` is 1-based and only used
    /// for error reporting.
    pub fn parse(line: &str, line_no: usize, family: HashFamily, with_output: bool) -> Result<Self> {
        let fields: Vec<&str> = line.split(',').collect();
        let num_params = family.num_params();
        let expected = num_params + 1 + usize::from(with_output);

        if fields.len() != expected {
            return Err(UnihashError::malformed(
                line_no,
                format!("expected {} fields, found {}", expected, fields.len()),
            ));
        }

        let bad_field = |i: usize, e: String| UnihashError::malformed(line_no, format!("field {}: {}", i + 1, e));

        let values = fields[..=num_params]
            .iter()
            .enumerate()
            .map(|(i, field)| parse_int(field).map_err(|e| bad_field(i, e)))
            .collect::<Result<Vec<u128>>>()?;

        let params = HashParams::from_values(family, &values[..num_params]).ok_or_else(|| {
            UnihashError::malformed(line_no, "parameter count does not match family")
        })?;

        let x = u64::try_from(values[num_params]).map_err(|_| {
            UnihashError::malformed(line_no, format!("x does not fit in 64 bits: {:#x}", values[num_params]))
        })?;

        let y = if with_output {
            let i = num_params + 1;
            Some(Claim::parse(fields[i]).map_err(|e| bad_field(i, e))?)
        } else {
            None
        };

        Ok(Self { params, x, y })
    }

    /// Recompute the hash output for this record
    pub fn expected(&self) -> u32 {
        self.params.hash(self.x)
    }

    /// The `param,...,x` prefix of this record
    pub fn key(&self) -> KeyFields<'_> {
        KeyFields { params: &self.params, x: self.x }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::P;

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("0x1f").unwrap(), 31);
        assert_eq!(parse_int("0x1F").unwrap(), 31);
        assert_eq!(parse_int("31").unwrap(), 31);
        assert_eq!(parse_int("  0x00000000000000000000a\n").unwrap(), 10);
        assert_eq!(parse_int("0x1ffffffffffffffffffffff").unwrap(), P);
        assert!(parse_int("0x").is_err());
        assert!(parse_int("1f").is_err());
        assert!(parse_int("-1").is_err());
        assert!(parse_int("").is_err());
    }

    #[test]
    fn test_hex_widths() {
        assert_eq!(Hex::param(1).to_string(), "0x00000000000000000000001");
        assert_eq!(Hex::param(P).to_string(), "0x1ffffffffffffffffffffff");
        assert_eq!(Hex::input(u64::MAX).to_string(), "0xffffffffffffffff");
        assert_eq!(Hex::input(0xab).to_string(), "0x00000000000000ab");
        assert_eq!(Hex::output(0xd_u32).to_string(), "0x0000d");
    }

    #[test]
    fn test_sample_line() {
        let sample = Sample::new(
            HashParams::ModPrime { a: 0x04d3c1af2a74de452e6b439, b: 0x018b8ffa6a3a4506513270e },
            0x099950d836f675cc,
        );
        assert_eq!(
            sample.to_string(),
            "0x04d3c1af2a74de452e6b439,0x018b8ffa6a3a4506513270e,0x099950d836f675cc,0xe7bc4"
        );

        let sample = Sample::new(HashParams::Shift { a: 0x12474e729c77f2234c3b7c6 }, 0x301850c5a38fd547);
        assert_eq!(sample.to_string(), "0x12474e729c77f2234c3b7c6,0x301850c5a38fd547,0x7d6a1");
    }

    #[test]
    fn test_parse_record_mixed_radix() {
        let record = Record::parse("2,0x3,5", 1, HashFamily::ModPrime, false).unwrap();
        assert_eq!(record.params, HashParams::ModPrime { a: 2, b: 3 });
        assert_eq!(record.x, 5);
        assert_eq!(record.y, None);
        assert_eq!(record.expected(), 0xd);
        assert_eq!(
            record.key().to_string(),
            "0x00000000000000000000002,0x00000000000000000000003,0x0000000000000005"
        );
    }

    #[test]
    fn test_parse_record_with_output() {
        let record = Record::parse("0x1,0x0,0x0,0x00000\n", 3, HashFamily::ModPrime, true).unwrap();
        assert_eq!(record.y, Some(Claim::Value(0)));

        let record = Record::parse("0xa,0x7,0x2", 1, HashFamily::Shift, true).unwrap();
        assert_eq!(record.params, HashParams::Shift { a: 10 });
        assert_eq!(record.x, 7);
        assert_eq!(record.y, Some(Claim::Value(2)));
    }

    #[test]
    fn test_claim_wider_than_128_bits() {
        let two_pow_128 = Claim::Wide(vec![0, 0, 0, 0, 1]);
        assert_eq!(Claim::parse("0x100000000000000000000000000000000").unwrap(), two_pow_128);
        assert_eq!(Claim::parse("340282366920938463463374607431768211456").unwrap(), two_pow_128);
        assert_eq!(Claim::parse(" 0x0100000000000000000000000000000000 ").unwrap(), two_pow_128);
        assert_eq!(two_pow_128.value(), None);
        assert_eq!(two_pow_128.to_string(), "0x100000000000000000000000000000000");

        let claim = Claim::parse("0x1fffffffffffffffffffffffffffffffff").unwrap();
        assert_eq!(claim.to_string(), "0x1fffffffffffffffffffffffffffffffff");
    }

    #[test]
    fn test_claim_within_128_bits() {
        assert_eq!(Claim::parse("0xe7bc4").unwrap().value(), Some(0xe7bc4));
        assert_eq!(Claim::parse(&u128::MAX.to_string()).unwrap(), Claim::Value(u128::MAX));
        assert_eq!(Claim::Value(0xd).to_string(), "0x0000d");

        assert!(Claim::parse("0x").is_err());
        assert!(Claim::parse("-1").is_err());
        assert!(Claim::parse("0x1g000000000000000000000000000000000").is_err());
    }

    #[test]
    fn test_parse_record_with_wide_output() {
        let line = "1,0,5,0x100000000000000000000000000000000";
        let record = Record::parse(line, 1, HashFamily::ModPrime, true).unwrap();
        assert_eq!(record.y, Some(Claim::Wide(vec![0, 0, 0, 0, 1])));

        let err = Record::parse("1,0,5,0xzz", 2, HashFamily::ModPrime, true).unwrap_err();
        assert!(err.to_string().contains("field 4"));
    }

    #[test]
    fn test_parse_record_field_count() {
        let err = Record::parse("1,2", 4, HashFamily::ModPrime, false).unwrap_err();
        assert_eq!(err.line(), Some(4));
        assert!(err.to_string().contains("expected 3 fields, found 2"));

        let err = Record::parse("1,2,3", 1, HashFamily::ModPrime, true).unwrap_err();
        assert!(err.to_string().contains("expected 4 fields, found 3"));

        assert!(Record::parse("", 1, HashFamily::ModPrime, false).is_err());
    }

    #[test]
    fn test_parse_record_bad_content() {
        let err = Record::parse("1,zz,3", 2, HashFamily::ModPrime, false).unwrap_err();
        assert!(err.to_string().contains("field 2"));

        let err = Record::parse("1,0,0x10000000000000000", 1, HashFamily::ModPrime, false).unwrap_err();
        assert!(err.to_string().contains("x does not fit in 64 bits"));
    }
}
