use crate::artifacts::snapshot::Snapshot;
use crate::artifacts::snapshot::entry::{Entry, EntryMetadata};
use crate::artifacts::snapshot::ignore_patterns::IgnorePatterns;
use crate::errors::{DirDiffError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// One root directory taking part in a comparison
#[derive(Debug, Clone)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: &Path) -> Result<Self> {
        let path = std::fs::canonicalize(path).map_err(|source| DirDiffError::PathResolution {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Workspace {
            path: path.into_boxed_path(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Ignored entries are left out of the snapshot, but the walk still descends
    // into ignored directories and tests their children on their own.
    pub fn snapshot(&self, ignore: &IgnorePatterns, files_only: bool) -> Result<Snapshot> {
        let mut entries = BTreeMap::<PathBuf, Entry>::new();

        for entry in WalkDir::new(&self.path).min_depth(1) {
            let entry = entry.map_err(|source| DirDiffError::Traversal {
                root: self.path.to_path_buf(),
                source,
            })?;

            let metadata = entry.metadata().map_err(|source| DirDiffError::Stat {
                path: entry.path().to_path_buf(),
                source: source.into(),
            })?;
            let metadata = EntryMetadata::from(&metadata);

            if files_only && metadata.kind.is_dir() {
                continue;
            }

            let Some(relative_path) = self.relative_path(entry.path()) else {
                continue;
            };

            if ignore.is_ignored(&relative_path) {
                debug!("ignoring {}", relative_path.display());
                continue;
            }

            entries.insert(
                relative_path.clone(),
                Entry::new(entry.into_path(), relative_path, metadata),
            );
        }

        debug!(
            "snapshot of {} holds {} entries",
            self.path.display(),
            entries.len()
        );

        Ok(Snapshot::new(self.path.to_path_buf(), entries))
    }

    fn relative_path(&self, path: &Path) -> Option<PathBuf> {
        path.strip_prefix(self.path.as_ref())
            .ok()
            .map(Path::to_path_buf)
    }
}
