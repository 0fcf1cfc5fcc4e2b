use hemicycle_cache::CacheError;
use hemicycle_fetch::FetchError;
use thiserror::Error;

/// Failure inside a materialization; accessors log it and return no rows
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Cache(#[from] CacheError),
}
