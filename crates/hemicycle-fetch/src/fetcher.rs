//! Download-then-extract with the retry policy applied

use crate::archive::{extract, Extraction};
use crate::retry::{Failure, RetryPolicy, Sleeper, ThreadSleeper};
use crate::transport::Transport;
use crate::FetchError;

pub struct ArchiveFetcher {
    transport: Box<dyn Transport>,
    sleeper: Box<dyn Sleeper>,
}

impl ArchiveFetcher {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self::with_sleeper(transport, Box::new(ThreadSleeper))
    }

    pub fn with_sleeper(transport: Box<dyn Transport>, sleeper: Box<dyn Sleeper>) -> Self {
        Self { transport, sleeper }
    }

    /// Download `url` and parse its members
    pub fn fetch(&self, url: &str, policy: &RetryPolicy) -> Result<Extraction, FetchError> {
        let body = self.download(url, policy)?;
        let extraction = extract(&body).map_err(|e| FetchError::Archive {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        tracing::info!(
            url,
            documents = extraction.documents.len(),
            skipped = extraction.skipped.len(),
            bytes = body.len(),
            "archive extracted"
        );
        Ok(extraction)
    }

    /// GET with retries: network failures and 5xx are retried, anything else is final
    pub fn download(&self, url: &str, policy: &RetryPolicy) -> Result<Vec<u8>, FetchError> {
        let max_attempts = policy.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            let timeout = policy.timeout_for(attempt);
            tracing::info!(url, attempt, timeout_secs = timeout.as_secs(), "downloading archive");

            let (failure, error) = match self.transport.get(url, timeout) {
                Ok(response) if (200..300).contains(&response.status) => {
                    return Ok(response.body);
                }
                Ok(response) if response.status >= 500 => (
                    Failure::Server,
                    FetchError::Server {
                        url: url.to_string(),
                        status: response.status,
                        attempts: attempt,
                    },
                ),
                Ok(response) => {
                    tracing::warn!(url, status = response.status, "client error, not retrying");
                    return Err(FetchError::Client {
                        url: url.to_string(),
                        status: response.status,
                    });
                }
                Err(e) => (
                    Failure::Network,
                    FetchError::Network {
                        url: url.to_string(),
                        attempts: attempt,
                        message: e.to_string(),
                    },
                ),
            };

            if attempt >= max_attempts {
                tracing::warn!(url, attempts = attempt, error = %error, "giving up on archive");
                return Err(error);
            }

            let delay = policy.delay_after(attempt, failure);
            tracing::warn!(
                url,
                attempt,
                delay_secs = delay.as_secs(),
                error = %error,
                "transient failure, will retry"
            );
            self.sleeper.sleep(delay);
            attempt += 1;
        }
    }
}
