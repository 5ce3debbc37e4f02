//! Command implementations
//!
//! Commands are methods on [`crate::areas::comparison::Comparison`] that write
//! their report to the comparison's writer.
//!
//! - `diff`: Print every added, changed and removed path

pub mod diff;
