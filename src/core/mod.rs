//! Core engine module
//!
//! Provides the sample generator, the batch evaluator, the streaming
//! verifier and the runner that dispatches between them.

mod evaluator;
mod generator;
mod runner;
mod verifier;

pub use evaluator::*;
pub use generator::*;
pub use runner::*;
pub use verifier::*;
