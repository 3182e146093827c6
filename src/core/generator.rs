//! Random sample generation
//!
//! Every sample gets freshly drawn parameters and a uniform 64-bit input;
//! the output is always computed, never drawn.

use crate::codec::Sample;
use crate::config::HashFamily;
use crate::error::{Result, UnihashError};
use crate::hash::HashParams;
use crate::progress::ProgressReporter;
use rand::rngs::ThreadRng;
use rand::Rng;
use std::io::Write;

/// Finite iterator of independent random samples
pub struct SampleGenerator<R: Rng> {
    rng: R,
    family: HashFamily,
    remaining: u64,
}

impl<R: Rng> SampleGenerator<R> {
    /// Create a generator yielding `count` samples from `rng`
    pub fn with_rng(rng: R, family: HashFamily, count: u64) -> Self {
        Self { rng, family, remaining: count }
    }
}

impl SampleGenerator<ThreadRng> {
    /// Create a generator over the thread-local RNG.
    ///
    /// `count` must be positive; zero is rejected before anything is drawn.
    pub fn new(family: HashFamily, count: u64) -> Result<Self> {
        if count == 0 {
            return Err(UnihashError::usage("count argument should be positive"));
        }
        Ok(Self::with_rng(rand::thread_rng(), family, count))
    }
}

impl<R: Rng> Iterator for SampleGenerator<R> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let params = HashParams::generate(self.family, &mut self.rng);
        let x: u64 = self.rng.gen();
        Some(Sample::new(params, x))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, usize::try_from(self.remaining).ok())
    }
}

/// Write one sample per line, returning the number written
pub fn write_samples<I, W>(samples: I, output: &mut W, progress: &mut ProgressReporter) -> Result<u64>
where
    I: IntoIterator<Item = Sample>,
    W: Write,
{
    let mut written = 0u64;
    for sample in samples {
        writeln!(output, "{}", sample)?;
        written += 1;
        progress.inc(1);
    }
    output.flush()?;

    tracing::debug!("Wrote {} samples", written);
    Ok(written)
}
