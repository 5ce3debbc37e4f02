//! Error taxonomy for directory comparison
//!
//! Every variant except [`DirDiffError::HashRead`] aborts a whole comparison.
//! Hash read failures are absorbed by the reconciler and only surface through
//! [`crate::artifacts::diff::change_set::ChangeSet::unreadable`].

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirDiffError {
    #[error("cannot resolve root path {path:?}: {source}")]
    PathResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid ignore pattern {pattern:?}: {source}")]
    InvalidIgnorePattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to walk {root:?}: {source}")]
    Traversal {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read metadata of {path:?}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to hash {path:?}: {source}")]
    HashRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, DirDiffError>;
