//! On-disk layout of the cache root

use crate::CacheKey;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Resolved cache directories
///
/// ```text
/// <root>/raw/<sha256(url)>.json
/// <root>/derived/<legislature>_<dataset>_<limit|all>.sqlite
/// ```
#[derive(Debug, Clone)]
pub struct CachePaths {
    root: PathBuf,
}

impl CachePaths {
    /// Create both tier directories. Failing here is the one fatal cache condition.
    pub fn create(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let paths = Self { root: root.into() };
        std::fs::create_dir_all(paths.raw_dir())?;
        std::fs::create_dir_all(paths.derived_dir())?;
        Ok(paths)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn raw_dir(&self) -> PathBuf {
        self.root.join("raw")
    }

    pub fn derived_dir(&self) -> PathBuf {
        self.root.join("derived")
    }

    pub fn raw_entry(&self, url: &str) -> PathBuf {
        self.raw_dir().join(format!("{}.json", url_hash(url)))
    }

    pub fn derived_entry(&self, key: &CacheKey) -> PathBuf {
        self.derived_dir()
            .join(format!("{}.sqlite", key.file_stem()))
    }
}

/// Stable hex SHA-256 of a URL
pub fn url_hash(url: &str) -> String {
    format!("{:x}", Sha256::digest(url.as_bytes()))
}
