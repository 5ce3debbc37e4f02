//! Ignore pattern parsing
//!
//! Ignore patterns arrive as one comma-separated string. Empty segments are
//! dropped, so an empty string yields no patterns at all. Each remaining
//! segment is a shell glob (`*`, `?`, `[...]`) matched case-sensitively
//! against the whole relative path; `*` also crosses path separators.

use crate::errors::{DirDiffError, Result};
use glob::Pattern;
use std::path::{MAIN_SEPARATOR, Path};

const PATTERN_SEPARATOR: char = ',';

#[derive(Debug, Clone, Default)]
pub struct IgnorePatterns {
    patterns: Vec<Pattern>,
}

impl IgnorePatterns {
    pub fn parse(raw: &str) -> Result<Self> {
        // forward slashes are accepted on every platform
        let raw = raw.replace('/', &MAIN_SEPARATOR.to_string());

        let patterns = raw
            .split(PATTERN_SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                Pattern::new(segment).map_err(|source| DirDiffError::InvalidIgnorePattern {
                    pattern: segment.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn is_ignored(&self, relative_path: &Path) -> bool {
        self.patterns
            .iter()
            .any(|pattern| pattern.matches_path(relative_path))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }
}
