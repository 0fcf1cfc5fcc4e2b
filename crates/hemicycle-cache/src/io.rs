//! Atomic writes and mtime-based freshness

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Sibling temp path: `entry.json` -> `entry.json.tmp`
pub(crate) fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write data atomically using temp file + rename; the entry's mtime is set to `modified`
pub fn atomic_write(path: &Path, data: &[u8], modified: SystemTime) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp = temp_path(path);
    std::fs::write(&temp, data)?;
    stamp(&temp, modified)?;
    std::fs::rename(temp, path)?;
    Ok(())
}

/// Set a file's mtime, which is what freshness is judged on
pub(crate) fn stamp(path: &Path, modified: SystemTime) -> std::io::Result<()> {
    std::fs::File::options()
        .write(true)
        .open(path)?
        .set_modified(modified)
}

/// Age of a file by mtime; `None` when it does not exist. A future mtime counts as age zero.
pub fn file_age(path: &Path, now: SystemTime) -> Option<Duration> {
    let modified = std::fs::metadata(path).ok()?.modified().ok()?;
    Some(now.duration_since(modified).unwrap_or(Duration::ZERO))
}

/// Exists and younger than `ttl`
pub fn is_fresh(path: &Path, ttl: Duration, now: SystemTime) -> bool {
    file_age(path, now).is_some_and(|age| age < ttl)
}
