//! Whole-file content digest
//!
//! Files of equal size are compared by the SHA-1 of their full content. The
//! digest is streamed, so large files are never held in memory.

use crate::errors::{DirDiffError, Result};
use sha1::{Digest, Sha1};
use std::fs::File;
use std::path::Path;

/// Lowercase hexadecimal SHA-1 of a file's content
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentDigest(String);

impl ContentDigest {
    pub fn of_file(path: &Path) -> Result<Self> {
        let hash_error = |source: std::io::Error| DirDiffError::HashRead {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(hash_error)?;
        if file.metadata().map_err(hash_error)?.is_dir() {
            return Err(hash_error(std::io::Error::other("cannot hash a directory")));
        }

        let mut hasher = Sha1::new();
        std::io::copy(&mut file, &mut hasher).map_err(hash_error)?;

        Ok(Self(format!("{:x}", hasher.finalize())))
    }
}

impl AsRef<str> for ContentDigest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
