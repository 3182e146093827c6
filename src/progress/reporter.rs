//! Progress reporter implementation
//!
//! Uses indicatif for a record-count bar (known total) or spinner (streamed
//! input). The bar always draws to stderr so stdout stays a clean record
//! stream.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Instant;

/// Progress reporter for generate and evaluate runs
pub struct ProgressReporter {
    /// Bar or spinner
    bar: ProgressBar,
    /// Start time
    start_time: Instant,
    /// Records handled so far
    records: u64,
}

impl ProgressReporter {
    /// Create a reporter with a known record total
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stderr());
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{prefix:.bold.dim} [{bar:40.cyan/blue}] {pos}/{len} ({per_sec}, ETA {eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        bar.set_prefix("Samples");
        Self::with_bar(bar)
    }

    /// Create a spinner for input of unknown length
    pub fn streaming() -> Self {
        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {pos} records ({per_sec})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        Self::with_bar(bar)
    }

    /// Create a disabled progress reporter
    pub fn disabled() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        Self {
            bar,
            start_time: Instant::now(),
            records: 0,
        }
    }

    /// Count handled records
    pub fn inc(&mut self, count: u64) {
        self.records += count;
        self.bar.inc(count);
    }

    /// Records handled so far
    pub fn records(&self) -> u64 {
        self.records
    }

    /// Records per second since start
    pub fn rate(&self) -> f64 {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.records as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Stop drawing after a failure, leaving the bar where it stopped
    pub fn abandon(&self) {
        self.bar.abandon();
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::disabled()
    }
}
