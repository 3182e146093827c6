//! Streaming verification of claimed hash outputs
//!
//! Matches print a `.` each, grouped on one line while they run
//! consecutively. A mismatch always starts on a fresh line with a detail
//! report. The run ends with a summary.

use crate::codec::{Claim, Hex, Record};
use crate::config::{HashFamily, OutputFormat};
use crate::error::{Result, UnihashError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{BufRead, Write};

/// Line state of the progress output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineState {
    /// Nothing printed yet
    #[default]
    NoOutputYet,
    /// Progress markers pending on an unterminated line
    InMatchRun,
    /// Last line printed was a mismatch report
    AfterMismatch,
}

/// Running match/mismatch counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    /// Records whose claimed output was correct
    pub ok: u64,
    /// Records whose claimed output was wrong
    pub mismatches: u64,
}

impl Tally {
    /// Records classified so far
    pub fn total(&self) -> u64 {
        self.ok + self.mismatches
    }

    /// Fraction of mismatching records, `None` when nothing was processed
    pub fn error_rate(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(self.mismatches as f64 / total as f64),
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error_rate() {
            None => write!(f, "done (no input processed)"),
            Some(rate) => write!(
                f,
                "done (correct: {}, incorrect: {}, error rate: {:.2}%)",
                self.ok,
                self.mismatches,
                rate * 100.0
            ),
        }
    }
}

/// Machine-readable summary emitted with `--format json`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerifySummary {
    /// Matching records
    pub correct: u64,
    /// Mismatching records
    pub incorrect: u64,
    /// All records
    pub total: u64,
    /// `incorrect / total`, absent for empty input
    pub error_rate: Option<f64>,
}

impl From<Tally> for VerifySummary {
    fn from(tally: Tally) -> Self {
        Self {
            correct: tally.ok,
            incorrect: tally.mismatches,
            total: tally.total(),
            error_rate: tally.error_rate(),
        }
    }
}

/// Classification of one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Claimed output equals the recomputed one
    Match,
    /// Claimed output differs
    Mismatch {
        /// Recomputed output
        expected: u32,
        /// Claimed output
        actual: Claim,
    },
}

/// Streaming verifier writing progress and reports to `W`
pub struct Verifier<W: Write> {
    out: W,
    state: LineState,
    tally: Tally,
    format: OutputFormat,
}

impl<W: Write> Verifier<W> {
    /// Create a verifier with a text summary
    pub fn new(out: W) -> Self {
        Self::with_format(out, OutputFormat::Text)
    }

    /// Create a verifier with the given summary format
    pub fn with_format(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            state: LineState::NoOutputYet,
            tally: Tally::default(),
            format,
        }
    }

    /// Current line state
    pub fn state(&self) -> LineState {
        self.state
    }

    /// Counts so far
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Classify `record` against its claimed output `actual`.
    pub fn check(&mut self, record: &Record, actual: &Claim) -> Result<Outcome> {
        let expected = record.expected();

        if actual.value() == Some(u128::from(expected)) {
            self.on_match()?;
            return Ok(Outcome::Match);
        }

        self.on_mismatch(record, expected, actual)?;
        Ok(Outcome::Mismatch {
            expected,
            actual: actual.clone(),
        })
    }

    fn on_match(&mut self) -> Result<()> {
        self.tally.ok += 1;
        write!(self.out, ".")?;
        self.out.flush()?;
        self.state = LineState::InMatchRun;
        Ok(())
    }

    fn on_mismatch(&mut self, record: &Record, expected: u32, actual: &Claim) -> Result<()> {
        self.tally.mismatches += 1;
        if self.state == LineState::InMatchRun {
            writeln!(self.out)?;
        }
        writeln!(
            self.out,
            "mismatch: {} expected: {}, actual: {}",
            record.key(),
            Hex::output(expected),
            actual
        )?;
        self.out.flush()?;
        self.state = LineState::AfterMismatch;

        tracing::debug!(expected, actual = %actual, "Mismatch");
        Ok(())
    }

    /// Terminate any pending marker line and write the summary.
    ///
    /// Call once, after the last record.
    pub fn finish(&mut self) -> Result<Tally> {
        if self.state == LineState::InMatchRun {
            writeln!(self.out)?;
        }

        match self.format {
            OutputFormat::Text => {
                if self.tally.total() > 0 {
                    writeln!(self.out)?;
                }
                writeln!(self.out, "{}", self.tally)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, &VerifySummary::from(self.tally))?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;

        Ok(self.tally)
    }
}

/// Verify every `param,...,x,y` record from `input`, then write the summary.
pub fn verify<R, W>(input: R, output: W, family: HashFamily, format: OutputFormat) -> Result<Tally>
where
    R: BufRead,
    W: Write,
{
    let mut verifier = Verifier::with_format(output, format);

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let record = Record::parse(&line, line_no, family, true)?;
        let actual = record
            .y
            .as_ref()
            .ok_or_else(|| UnihashError::malformed(line_no, "missing output field"))?;
        verifier.check(&record, actual)?;
    }

    let tally = verifier.finish()?;
    tracing::info!(ok = tally.ok, mismatches = tally.mismatches, "Verification finished");
    Ok(tally)
}
