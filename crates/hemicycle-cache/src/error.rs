//! Cache errors; callers treat all of them as a miss

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache table error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("cache payload error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("corrupt cache entry: {0}")]
    Corrupt(String),
}
