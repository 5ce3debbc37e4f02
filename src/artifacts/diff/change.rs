use crate::artifacts::snapshot::entry::Entry;
use colored::Colorize;
use derive_new::new;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChangeType {
    Added,
    Changed,
    Removed,
}

impl From<&ChangeType> for &str {
    fn from(change: &ChangeType) -> Self {
        match change {
            ChangeType::Added => "+",
            ChangeType::Changed => "*",
            ChangeType::Removed => "-",
        }
    }
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol: &str = self.into();
        write!(f, "{}", symbol)
    }
}

/// One classified difference between the two roots
///
/// The entry comes from the new root for additions and changes, and from the
/// old root for removals.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Change {
    pub entry: Entry,
    pub change_type: ChangeType,
}

impl Change {
    pub fn relative_path(&self) -> &Path {
        self.entry.relative_path()
    }
}

impl std::fmt::Display for Change {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line = format!("{} {}", self.change_type, self.relative_path().display());
        let colored_line = match self.change_type {
            ChangeType::Added => line.green(),
            ChangeType::Changed => line.yellow(),
            ChangeType::Removed => line.red(),
        };
        write!(f, "{}", colored_line)
    }
}
