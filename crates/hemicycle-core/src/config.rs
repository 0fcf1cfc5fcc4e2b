//! Pipeline configuration

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the cache root
pub const CACHE_DIR_ENV: &str = "HEMICYCLE_CACHE_DIR";

const DEFAULT_BASE_URL: &str = "https://data.assemblee-nationale.fr/static/openData/repository";
const DEFAULT_LEGISLATURE: u32 = 17;

/// Cache tiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// Root directory; resolved by [`Config::resolve_cache_root`] when unset
    pub root: Option<PathBuf>,

    /// Max age of raw and derived entries
    pub ttl_secs: u64,

    /// Max age of the raw transcript archive
    pub transcript_ttl_secs: u64,
}

impl CacheSettings {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    pub fn transcript_ttl(&self) -> Duration {
        Duration::from_secs(self.transcript_ttl_secs)
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            root: None,
            ttl_secs: 24 * 60 * 60,
            transcript_ttl_secs: 7 * 24 * 60 * 60,
        }
    }
}

/// Download and retry behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchSettings {
    /// Attempts per archive, first one included
    pub max_attempts: u32,

    /// Base request timeout; attempt n uses n times this
    pub request_timeout_secs: u64,

    /// Base request timeout for the transcript archive
    pub transcript_timeout_secs: u64,

    /// Wait after a network failure on attempt n is n times this
    pub network_backoff_secs: u64,

    /// Fixed wait after a 5xx response
    pub server_error_delay_secs: u64,

    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            request_timeout_secs: 60,
            transcript_timeout_secs: 300,
            network_backoff_secs: 5,
            server_error_delay_secs: 10,
            user_agent: concat!("hemicycle/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Transcript extraction limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptSettings {
    /// Max agenda items kept per sitting
    pub agenda_cap: usize,

    /// Characters of text kept as preview
    pub preview_chars: usize,
}

impl Default for TranscriptSettings {
    fn default() -> Self {
        Self {
            agenda_cap: 20,
            preview_chars: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Legislature used when a caller does not name one
    pub legislature: u32,

    /// Root of the open-data repository
    pub base_url: String,

    pub cache: CacheSettings,
    pub fetch: FetchSettings,
    pub transcript: TranscriptSettings,
}

impl Config {
    pub fn new() -> Self {
        Self {
            legislature: DEFAULT_LEGISLATURE,
            base_url: DEFAULT_BASE_URL.to_string(),
            cache: CacheSettings::default(),
            fetch: FetchSettings::default(),
            transcript: TranscriptSettings::default(),
        }
    }

    /// Load a TOML config file; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `<config_dir>/hemicycle/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("hemicycle").join("config.toml"))
    }

    /// Cache root, by priority: CLI argument, environment, config file, platform default
    pub fn resolve_cache_root(&self, cli_arg: Option<&Path>) -> PathBuf {
        if let Some(path) = cli_arg {
            return path.to_path_buf();
        }
        if let Ok(path) = std::env::var(CACHE_DIR_ENV) {
            if !path.trim().is_empty() {
                return PathBuf::from(path);
            }
        }
        if let Some(root) = &self.cache.root {
            return root.clone();
        }
        dirs::cache_dir()
            .map(|d| d.join("hemicycle"))
            .unwrap_or_else(|| PathBuf::from(".cache").join("hemicycle"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
