//! Filesystem-backed components
//!
//! - `comparison`: The pair of roots being compared, with options and output
//! - `workspace`: One scan root and its snapshot walk

pub mod comparison;
pub mod workspace;
