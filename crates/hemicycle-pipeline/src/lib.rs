//! Ties fetcher, both cache tiers, normalizers and the transcript extractor
//! together behind fail-soft accessors

mod activity;
mod error;
mod pipeline;
mod stats;

pub use activity::compute_activity;
pub use error::PipelineError;
pub use pipeline::{Pipeline, Statistics, WarmReport};
pub use stats::{deputy_statistics, vote_statistics, DeputyStatistics, VoteStatistics};
