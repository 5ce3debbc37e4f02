//! Snapshot entry representation
//!
//! Each entry describes one filesystem object strictly beneath a scan root:
//! - Absolute path on disk
//! - Path relative to the root (the matching key between two snapshots)
//! - Kind and size, captured once while walking
//!
//! Metadata is resolved eagerly so an entry never holds an open handle and
//! stays a plain value for the whole comparison.

use derive_new::new;
use std::fs::Metadata;
use std::path::{Path, PathBuf};

/// Kind of a filesystem object as seen by the comparison
///
/// Anything that is not a directory (symlinks included) counts as a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum EntryKind {
    #[default]
    File,
    Directory,
}

impl EntryKind {
    pub fn is_dir(&self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

/// Metadata needed to classify an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, new)]
pub struct EntryMetadata {
    /// File or directory
    pub kind: EntryKind,
    /// Size in bytes as reported by the filesystem
    pub size: u64,
}

impl From<&Metadata> for EntryMetadata {
    fn from(metadata: &Metadata) -> Self {
        let kind = if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        Self {
            kind,
            size: metadata.len(),
        }
    }
}

/// A filesystem object captured in a snapshot
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Entry {
    /// Fully resolved path on disk
    pub absolute_path: PathBuf,
    /// Path relative to the scan root
    pub relative_path: PathBuf,
    pub metadata: EntryMetadata,
}

impl Entry {
    pub fn absolute_path(&self) -> &Path {
        &self.absolute_path
    }

    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    pub fn kind(&self) -> EntryKind {
        self.metadata.kind
    }

    pub fn size(&self) -> u64 {
        self.metadata.size
    }

    pub fn is_dir(&self) -> bool {
        self.metadata.kind.is_dir()
    }
}
