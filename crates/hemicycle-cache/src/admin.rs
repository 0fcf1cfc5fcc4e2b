//! Operational view over both tiers

use crate::CachePaths;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use std::time::SystemTime;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheInfo {
    pub count: usize,
    pub total_size: u64,
    pub oldest: Option<DateTime<Utc>>,
    pub newest: Option<DateTime<Utc>>,
}

impl CacheInfo {
    fn add(&mut self, size: u64, modified: SystemTime) {
        let modified = DateTime::<Utc>::from(modified);
        self.count += 1;
        self.total_size += size;
        self.oldest = Some(self.oldest.map_or(modified, |t| t.min(modified)));
        self.newest = Some(self.newest.map_or(modified, |t| t.max(modified)));
    }
}

fn is_temp(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "tmp")
}

impl CachePaths {
    /// Entry count, size and mtime range over raw and derived entries.
    /// In-flight temp files are not entries.
    pub fn info(&self) -> CacheInfo {
        let mut info = CacheInfo::default();
        for dir in [self.raw_dir(), self.derived_dir()] {
            let Ok(entries) = std::fs::read_dir(&dir) else {
                continue;
            };
            for entry in entries.flatten() {
                let path = entry.path();
                if is_temp(&path) {
                    continue;
                }
                let Ok(meta) = entry.metadata() else {
                    continue;
                };
                if !meta.is_file() {
                    continue;
                }
                if let Ok(modified) = meta.modified() {
                    info.add(meta.len(), modified);
                }
            }
        }
        info
    }

    /// Remove every entry of both tiers and recreate the empty directories
    pub fn clear(&self) -> std::io::Result<()> {
        for dir in [self.raw_dir(), self.derived_dir()] {
            if dir.exists() {
                std::fs::remove_dir_all(&dir)?;
            }
            std::fs::create_dir_all(&dir)?;
        }
        tracing::info!(root = %self.root().display(), "cache cleared");
        Ok(())
    }
}
