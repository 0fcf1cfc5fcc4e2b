//! Fetch and extraction errors

use thiserror::Error;

/// Failure to obtain an archive at all
#[derive(Error, Debug)]
pub enum FetchError {
    /// Timeouts or connection failures on every attempt
    #[error("network failure for {url} after {attempts} attempt(s): {message}")]
    Network {
        url: String,
        attempts: u32,
        message: String,
    },

    /// 5xx on every attempt
    #[error("server error {status} for {url} after {attempts} attempt(s)")]
    Server { url: String, status: u16, attempts: u32 },

    /// 4xx or any other non-success status; never retried
    #[error("client error {status} for {url}")]
    Client { url: String, status: u16 },

    /// Body is not a readable ZIP archive
    #[error("unreadable archive from {url}: {message}")]
    Archive { url: String, message: String },
}

impl FetchError {
    pub fn is_transient(&self) -> bool {
        matches!(self, FetchError::Network { .. } | FetchError::Server { .. })
    }
}

/// Failure to parse one archive member; the rest of the archive is kept
#[derive(Error, Debug)]
pub enum MemberError {
    #[error("cannot read member: {0}")]
    Read(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
