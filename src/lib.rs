//! # UniHash - Universal Hash Sample Tooling
//!
//! UniHash generates, evaluates and verifies instances of two universal hash
//! families used for randomized data-structure testing:
//!
//! - **Multiply-mod-prime** (Carter-Wegman): `((a*x + b) mod p) mod 2^20`
//!   with the Mersenne prime `p = 2^89 - 1`, computed exactly with 128-bit
//!   words
//! - **Multiply-shift**: `(a*x mod 2^64) >> 44`
//!
//! These hashes are for statistical testing only and carry no
//! cryptographic guarantees.
//!
//! ## Quick Start
//!
//! ```
//! use unihash::hash::{mod_prime, HashParams};
//!
//! assert_eq!(mod_prime(2, 3, 5), 13);
//!
//! let params = HashParams::ModPrime { a: 1, b: 0 };
//! assert_eq!(params.hash(0x12345), 0x12345);
//! ```
//!
//! ## Verifying Samples
//!
//! ```
//! use unihash::config::{HashFamily, OutputFormat};
//! use unihash::core::verify;
//!
//! let input = "0x1,0x0,0x5,0x00005\n0x1,0x0,0x6,0x00000\n";
//! let mut out = Vec::new();
//!
//! let tally = verify(input.as_bytes(), &mut out, HashFamily::ModPrime, OutputFormat::Text).unwrap();
//! assert_eq!((tally.ok, tally.mismatches), (1, 1));
//! ```
//!
//! ## Running a Mode
//!
//! ```no_run
//! use unihash::config::{Mode, RunConfig};
//! use unihash::core::Runner;
//!
//! let runner = Runner::new(RunConfig::new(Mode::Generate { count: 10 }));
//! let summary = runner.execute(std::io::empty(), std::io::stdout().lock()).unwrap();
//! println!("wrote {} samples in {:?}", summary.records, summary.duration);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod config;
pub mod core;
pub mod error;
pub mod hash;
pub mod progress;

// Re-export commonly used types
pub use crate::config::{HashFamily, Mode, OutputFormat, RunConfig};
pub use crate::core::{RunSummary, Runner, Tally};
pub use crate::error::{Result, UnihashError};
pub use crate::hash::HashParams;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    //! Convenient re-exports for common usage
    //!
    //! ```
    //! use unihash::prelude::*;
    //! ```

    pub use crate::codec::{parse_int, Claim, Hex, Record, Sample};
    pub use crate::config::{CliArgs, HashFamily, Mode, OutputFormat, RunConfig};
    pub use crate::core::{evaluate, verify, Runner, RunSummary, SampleGenerator, Tally, Verifier};
    pub use crate::error::{Result, UnihashError};
    pub use crate::hash::{mod_prime, shift, HashParams};
    pub use crate::progress::ProgressReporter;
}
