//! Configuration module for UniHash
//!
//! Provides CLI argument parsing and the validated runtime settings
//! derived from it.

mod settings;

pub use settings::*;
