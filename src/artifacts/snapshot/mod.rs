//! Filtered listings of a directory tree
//!
//! A snapshot maps every relative path beneath one root to its [`Entry`].
//! It is built once by [`crate::areas::workspace::Workspace::snapshot`] and
//! never modified afterwards.
//!
//! ## Components
//!
//! - `entry`: Entry and metadata types
//! - `ignore_patterns`: Comma-separated glob list parsing and matching

pub mod entry;
pub mod ignore_patterns;

use entry::Entry;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Snapshot {
    root: PathBuf,
    entries: BTreeMap<PathBuf, Entry>,
}

impl Snapshot {
    pub fn new(root: PathBuf, entries: BTreeMap<PathBuf, Entry>) -> Self {
        Snapshot { root, entries }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn get(&self, relative_path: &Path) -> Option<&Entry> {
        self.entries.get(relative_path)
    }

    pub fn contains(&self, relative_path: &Path) -> bool {
        self.entries.contains_key(relative_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, PathBuf, Entry> {
        self.entries.iter()
    }

    pub fn relative_paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.keys().map(PathBuf::as_path)
    }
}

impl<'s> IntoIterator for &'s Snapshot {
    type Item = (&'s PathBuf, &'s Entry);
    type IntoIter = btree_map::Iter<'s, PathBuf, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
