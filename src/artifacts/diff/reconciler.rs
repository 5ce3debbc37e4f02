use crate::areas::workspace::Workspace;
use crate::artifacts::diff::change::{Change, ChangeType};
use crate::artifacts::diff::change_set::ChangeSet;
use crate::artifacts::diff::content_digest::ContentDigest;
use crate::artifacts::snapshot::Snapshot;
use crate::artifacts::snapshot::entry::{Entry, EntryKind};
use crate::artifacts::snapshot::ignore_patterns::IgnorePatterns;
use crate::errors::Result;
use derive_new::new;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default, new)]
pub struct DiffOptions {
    pub ignore: IgnorePatterns,
    pub files_only: bool,
}

impl DiffOptions {
    pub fn try_new(ignore: &str, files_only: bool) -> Result<Self> {
        Ok(Self {
            ignore: IgnorePatterns::parse(ignore)?,
            files_only,
        })
    }
}

/// Turns two snapshots into a [`ChangeSet`]
#[derive(Debug, Clone, Default, new)]
pub struct Reconciler {
    options: DiffOptions,
}

impl Reconciler {
    pub fn diff(&self, new_root: &Path, old_root: &Path) -> Result<ChangeSet> {
        let new_workspace = Workspace::new(new_root)?;
        let old_workspace = Workspace::new(old_root)?;

        self.diff_workspaces(&new_workspace, &old_workspace)
    }

    pub fn diff_workspaces(&self, new: &Workspace, old: &Workspace) -> Result<ChangeSet> {
        let new_snapshot = new.snapshot(&self.options.ignore, self.options.files_only)?;
        let old_snapshot = old.snapshot(&self.options.ignore, self.options.files_only)?;

        Ok(self.reconcile(&new_snapshot, &old_snapshot))
    }

    /// Same as [`Reconciler::diff_workspaces`], with both trees walked in parallel
    pub async fn diff_concurrent(&self, new: &Workspace, old: &Workspace) -> Result<ChangeSet> {
        let new_task = Self::spawn_snapshot(new.clone(), self.options.clone());
        let old_task = Self::spawn_snapshot(old.clone(), self.options.clone());

        let (new_snapshot, old_snapshot) = tokio::try_join!(new_task, old_task)?;

        Ok(self.reconcile(&new_snapshot?, &old_snapshot?))
    }

    fn spawn_snapshot(
        workspace: Workspace,
        options: DiffOptions,
    ) -> tokio::task::JoinHandle<Result<Snapshot>> {
        tokio::task::spawn_blocking(move || workspace.snapshot(&options.ignore, options.files_only))
    }

    // Additions, changes and removals are collected separately so the final
    // concatenation fixes the group order.
    pub fn reconcile(&self, new: &Snapshot, old: &Snapshot) -> ChangeSet {
        let mut added = Vec::<Change>::new();
        let mut changed = Vec::<Change>::new();
        let mut removed = Vec::<Change>::new();
        let mut unreadable = Vec::<PathBuf>::new();

        for (relative_path, new_entry) in new {
            let Some(old_entry) = old.get(relative_path) else {
                added.push(Change::new(new_entry.clone(), ChangeType::Added));
                continue;
            };

            match (new_entry.kind(), old_entry.kind()) {
                (EntryKind::File, EntryKind::File) => {
                    if Self::is_content_changed(new_entry, old_entry, &mut unreadable) {
                        changed.push(Change::new(new_entry.clone(), ChangeType::Changed));
                    }
                }
                (EntryKind::Directory, EntryKind::Directory) => {}
                _ => {
                    debug!("{} changed kind", relative_path.display());
                    added.push(Change::new(new_entry.clone(), ChangeType::Added));
                    removed.push(Change::new(old_entry.clone(), ChangeType::Removed));
                }
            }
        }

        removed.extend(
            old.iter()
                .filter(|(relative_path, _)| !new.contains(relative_path))
                .map(|(_, old_entry)| Change::new(old_entry.clone(), ChangeType::Removed)),
        );

        info!(
            "{} added, {} changed, {} removed",
            added.len(),
            changed.len(),
            removed.len()
        );

        ChangeSet::new(added, changed, removed, unreadable)
    }

    // Sizes are compared first; content is only hashed when they match.
    fn is_content_changed(new: &Entry, old: &Entry, unreadable: &mut Vec<PathBuf>) -> bool {
        if new.size() != old.size() {
            debug!(
                "{} size differs ({} != {})",
                new.relative_path().display(),
                new.size(),
                old.size()
            );
            return true;
        }

        let new_digest = Self::digest_or_sentinel(new, unreadable);
        let old_digest = Self::digest_or_sentinel(old, unreadable);

        new_digest != old_digest
    }

    // An unreadable file hashes to `None`; two unreadable files compare equal.
    fn digest_or_sentinel(entry: &Entry, unreadable: &mut Vec<PathBuf>) -> Option<ContentDigest> {
        match ContentDigest::of_file(entry.absolute_path()) {
            Ok(digest) => Some(digest),
            Err(err) => {
                warn!("{err}");
                unreadable.push(entry.absolute_path().to_path_buf());
                None
            }
        }
    }
}
