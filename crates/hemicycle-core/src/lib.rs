//! Core types, configuration and value/tree utilities for National Assembly open data

mod clock;
mod config;
mod dataset;
mod document;
mod error;
pub mod tree;
mod types;
pub mod value;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{CacheSettings, Config, FetchSettings, TranscriptSettings, CACHE_DIR_ENV};
pub use dataset::Dataset;
pub use document::{Document, DocumentBody};
pub use error::ConfigError;
pub use tree::Node;
pub use types::{ActivityStat, Amendment, Bill, DebateSummary, Deputy, Paragraph, Vote};
