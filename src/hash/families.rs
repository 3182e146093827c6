//! Universal hash families over 64-bit keys
//!
//! Two families are provided, both producing 20-bit values:
//!
//! - multiply-mod-prime (Carter-Wegman): `((a*x + b) mod p) mod 2^20` with the
//!   Mersenne prime `p = 2^89 - 1`
//! - multiply-shift: `(a*x mod 2^64) >> 44`
//!
//! The product `a*x` in the first family can reach 153 bits. It is never
//! materialized; instead `a` is split at bit 64 and each partial product is
//! folded modulo `p` using `2^89 = 1 (mod p)`, so 128-bit words suffice.

use crate::config::HashFamily;
use rand::Rng;

/// Exponent of the Mersenne prime modulus
pub const MERSENNE_EXPONENT: u32 = 89;

/// The prime modulus `p = 2^89 - 1`
pub const P: u128 = (1u128 << MERSENNE_EXPONENT) - 1;

/// Width of every hash value in bits (`l`)
pub const OUTPUT_BITS: u32 = 20;

/// Size of the hash range, `m = 2^20`
pub const M: u128 = 1u128 << OUTPUT_BITS;

/// Machine word width used by the multiply-shift family
pub const WORD_BITS: u32 = 64;

/// Right shift applied to the multiply-shift product
pub const SHIFT: u32 = WORD_BITS - OUTPUT_BITS;

/// Reduce any 128-bit value modulo `p`.
#[inline]
pub const fn reduce(v: u128) -> u128 {
    // v = q * 2^89 + r  =>  v = q + r (mod p), and q + r < 2p
    let folded = (v & P) + (v >> MERSENNE_EXPONENT);
    if folded >= P {
        folded - P
    } else {
        folded
    }
}

/// `a * x mod p` for `a < p`.
#[inline]
const fn mul_mod(a: u128, x: u64) -> u128 {
    let a_lo = a as u64 as u128;
    let a_hi = a >> 64; // < 2^25

    let low = reduce(a_lo * x as u128);

    // a_hi * x < 2^89; multiplying by 2^64 moves its top 64 bits past 2^89
    let t = a_hi * x as u128;
    let t_lo = t & ((1u128 << (MERSENNE_EXPONENT - 64)) - 1);
    let t_hi = t >> (MERSENNE_EXPONENT - 64);
    let high = reduce((t_lo << 64) + t_hi);

    reduce(low + high)
}

/// Multiply-mod-prime hash: `((a*x + b) mod p) mod 2^20`.
///
/// `a` and `b` are not range checked. Values at or above `p` are reduced
/// first, which gives the same result as evaluating the formula with
/// unbounded integers.
#[inline]
pub const fn mod_prime(a: u128, b: u128, x: u64) -> u32 {
    let ax = mul_mod(reduce(a), x);
    let sum = reduce(ax + reduce(b));
    (sum % M) as u32
}

/// Multiply-shift hash: `(a*x mod 2^64) >> (64 - 20)`.
///
/// Only the low 64 bits of `a` take part in the wrapping multiply.
#[inline]
pub const fn shift(a: u128, x: u64) -> u32 {
    ((a as u64).wrapping_mul(x) >> SHIFT) as u32
}

/// Parameters selecting one member of a hash family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashParams {
    /// Multiply-mod-prime with multiplier `a` and offset `b`
    ModPrime {
        /// Multiplier, drawn from `[1, p)`
        a: u128,
        /// Offset, drawn from `[0, p)`
        b: u128,
    },
    /// Multiply-shift with an even multiplier `a`
    Shift {
        /// Multiplier, drawn as `2k` for `k` in `[1, p/2)`
        a: u128,
    },
}

impl HashParams {
    /// Draw fresh parameters for the given family
    pub fn generate<R: Rng>(family: HashFamily, rng: &mut R) -> Self {
        match family {
            HashFamily::ModPrime => Self::ModPrime {
                a: rng.gen_range(1..P),
                b: rng.gen_range(0..P),
            },
            HashFamily::Shift => Self::Shift {
                a: 2 * rng.gen_range(1..P / 2),
            },
        }
    }

    /// Build parameters from raw values in field order.
    ///
    /// Returns `None` if the number of values does not match the family arity.
    pub fn from_values(family: HashFamily, values: &[u128]) -> Option<Self> {
        match (family, values) {
            (HashFamily::ModPrime, &[a, b]) => Some(Self::ModPrime { a, b }),
            (HashFamily::Shift, &[a]) => Some(Self::Shift { a }),
            _ => None,
        }
    }

    /// The family these parameters belong to
    pub fn family(&self) -> HashFamily {
        match self {
            Self::ModPrime { .. } => HashFamily::ModPrime,
            Self::Shift { .. } => HashFamily::Shift,
        }
    }

    /// Parameter values in field order
    pub fn values(&self) -> Vec<u128> {
        match *self {
            Self::ModPrime { a, b } => vec![a, b],
            Self::Shift { a } => vec![a],
        }
    }

    /// Evaluate the selected hash function on `x`
    #[inline]
    pub fn hash(&self, x: u64) -> u32 {
        match *self {
            Self::ModPrime { a, b } => mod_prime(a, b, x),
            Self::Shift { a } => shift(a, x),
        }
    }
}
