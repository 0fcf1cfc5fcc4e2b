//! Two cache tiers: raw archive payloads keyed by URL, and materialized
//! tables keyed by (legislature, dataset, limit)

mod admin;
mod derived;
mod error;
mod io;
mod paths;
mod raw;
mod table;

pub use admin::CacheInfo;
pub use derived::{CacheKey, DerivedCache};
pub use error::CacheError;
pub use io::{atomic_write, file_age, is_fresh};
pub use paths::{url_hash, CachePaths};
pub use raw::{ArchiveRequest, RawCache};
pub use table::{Column, ColumnType, TableRecord};
