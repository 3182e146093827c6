//! Text codec module
//!
//! Parses and renders the fixed-width hexadecimal integers and the
//! comma-separated records exchanged on stdin and stdout.

mod record;

pub use record::*;
