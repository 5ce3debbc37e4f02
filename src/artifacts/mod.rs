//! Data structures and algorithms
//!
//! - `core`: Output and logging plumbing (pager wrapper, log level)
//! - `diff`: Reconciliation of two snapshots into a change set
//! - `snapshot`: Filtered, path-keyed listings of one root

pub mod core;
pub mod diff;
pub mod snapshot;
