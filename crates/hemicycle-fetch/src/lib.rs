//! Archive download with retry/backoff and in-memory ZIP extraction

mod archive;
mod error;
mod fetcher;
mod retry;
mod transport;

pub use archive::{extract, Extraction, SkippedMember};
pub use error::{FetchError, MemberError};
pub use fetcher::ArchiveFetcher;
pub use retry::{Failure, RetryPolicy, Sleeper, ThreadSleeper};
pub use transport::{HttpResponse, ReqwestTransport, Transport, TransportError};
