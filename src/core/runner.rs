//! Mode dispatch
//!
//! Drives exactly one of generate, evaluate or verify over the given
//! input and output streams.

use crate::config::{Mode, RunConfig};
use crate::core::{evaluate, verify, write_samples, SampleGenerator, Tally};
use crate::error::Result;
use crate::progress::ProgressReporter;
use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

/// Outcome of a completed run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Mode that ran
    pub mode: Mode,
    /// Records written (generate) or read (evaluate, verify)
    pub records: u64,
    /// Verification counts (verify only)
    pub tally: Option<Tally>,
    /// Wall time
    pub duration: Duration,
}

/// Runs one configured mode
pub struct Runner {
    /// Configuration
    config: RunConfig,
}

impl Runner {
    /// Create a new runner
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Execute the configured mode.
    ///
    /// `input` is only read by evaluate and verify.
    pub fn execute<R, W>(&self, input: R, mut output: W) -> Result<RunSummary>
    where
        R: BufRead,
        W: Write,
    {
        let start = Instant::now();
        let family = self.config.family;
        tracing::info!(mode = self.config.mode.name(), family = family.name(), "Starting run");

        let (records, tally) = match self.config.mode {
            Mode::Generate { count } => {
                let generator = SampleGenerator::new(family, count)?;
                let mut progress = self.progress(Some(count));
                let result = write_samples(generator, &mut output, &mut progress);
                self.close_progress(&progress, result.is_ok());
                (result?, None)
            }
            Mode::Evaluate => {
                let mut progress = self.progress(None);
                let result = evaluate(input, &mut output, family, &mut progress);
                self.close_progress(&progress, result.is_ok());
                (result?, None)
            }
            Mode::Verify => {
                let tally = verify(input, &mut output, family, self.config.format)?;
                (tally.total(), Some(tally))
            }
        };

        let duration = start.elapsed();
        tracing::info!(records, ?duration, "Run complete");

        Ok(RunSummary {
            mode: self.config.mode,
            records,
            tally,
            duration,
        })
    }

    fn progress(&self, total: Option<u64>) -> ProgressReporter {
        match (self.config.progress, total) {
            (false, _) => ProgressReporter::disabled(),
            (true, Some(total)) => ProgressReporter::new(total),
            (true, None) => ProgressReporter::streaming(),
        }
    }

    fn close_progress(&self, progress: &ProgressReporter, success: bool) {
        if success {
            progress.finish();
        } else {
            progress.abandon();
        }
        tracing::debug!(
            records = progress.records(),
            rate = progress.rate(),
            "Progress closed"
        );
    }
}
