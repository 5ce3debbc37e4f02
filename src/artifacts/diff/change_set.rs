use crate::artifacts::diff::change::{Change, ChangeType};
use std::path::{Path, PathBuf};

/// Result of comparing two roots
///
/// Changes are grouped as additions, then changes, then removals, each group
/// sorted by relative path. Files whose content could not be read while
/// hashing are listed in `unreadable` by absolute path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    added: Vec<Change>,
    changed: Vec<Change>,
    removed: Vec<Change>,
    unreadable: Vec<PathBuf>,
}

impl ChangeSet {
    pub fn new(
        mut added: Vec<Change>,
        mut changed: Vec<Change>,
        mut removed: Vec<Change>,
        mut unreadable: Vec<PathBuf>,
    ) -> Self {
        added.sort_by(|a, b| a.relative_path().cmp(b.relative_path()));
        changed.sort_by(|a, b| a.relative_path().cmp(b.relative_path()));
        removed.sort_by(|a, b| a.relative_path().cmp(b.relative_path()));
        unreadable.sort();
        unreadable.dedup();

        ChangeSet {
            added,
            changed,
            removed,
            unreadable,
        }
    }

    pub fn added(&self) -> &[Change] {
        &self.added
    }

    pub fn changed(&self) -> &[Change] {
        &self.changed
    }

    pub fn removed(&self) -> &[Change] {
        &self.removed
    }

    pub fn unreadable(&self) -> &[PathBuf] {
        &self.unreadable
    }

    pub fn iter(&self) -> impl Iterator<Item = &Change> {
        self.added
            .iter()
            .chain(self.changed.iter())
            .chain(self.removed.iter())
    }

    pub fn len(&self) -> usize {
        self.added.len() + self.changed.len() + self.removed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Classification of every reported path, in output order
    pub fn summary(&self) -> Vec<(ChangeType, &Path)> {
        self.iter()
            .map(|change| (change.change_type, change.relative_path()))
            .collect()
    }
}

impl<'c> IntoIterator for &'c ChangeSet {
    type Item = &'c Change;
    type IntoIter = Box<dyn Iterator<Item = &'c Change> + 'c>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
