//! Compare two directory trees
//!
//! Every relative path below the two roots is classified as added, removed or
//! changed. Regular files are compared by size first and by SHA-1 digest when
//! the sizes match; directories only by presence.
//!
//! ```no_run
//! use dirdiff::artifacts::diff::reconciler::{DiffOptions, Reconciler};
//! use std::path::Path;
//!
//! let options = DiffOptions::try_new("*.log,target", false)?;
//! let change_set = Reconciler::new(options).diff(Path::new("new"), Path::new("old"))?;
//!
//! for change in &change_set {
//!     println!("{change}");
//! }
//! # Ok::<(), dirdiff::errors::DirDiffError>(())
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
