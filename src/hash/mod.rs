//! Hash family module
//!
//! Provides the multiply-mod-prime and multiply-shift universal hash
//! families together with their parameter generators.

mod families;

pub use families::*;
