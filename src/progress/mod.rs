//! Progress reporting module
//!
//! Provides an optional stderr progress bar for long generate and
//! evaluate runs.

mod reporter;

pub use reporter::*;
