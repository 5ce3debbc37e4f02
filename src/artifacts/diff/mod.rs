//! Tree comparison
//!
//! This module reconciles two snapshots into a set of classified changes:
//!
//! - `change`: Change kinds and their one-line rendering
//! - `change_set`: Ordered result of a comparison
//! - `content_digest`: Whole-file SHA-1 used when sizes match
//! - `reconciler`: Classification of every relative path
//!
//! A path present in both trees as files is `Changed` when the sizes differ,
//! or when the sizes match and the digests differ. A path that is a file on one
//! side and a directory on the other is reported as an addition plus a removal.

pub mod change;
pub mod change_set;
pub mod content_digest;
pub mod reconciler;
