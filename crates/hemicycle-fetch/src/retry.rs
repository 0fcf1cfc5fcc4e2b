//! Retry policy and the sleep seam it waits through

use hemicycle_core::FetchSettings;
use std::time::Duration;

/// Blocking wait between attempts
pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration);
}

/// Sleeps the current thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Kind of transient failure, which decides the wait before the next attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// Timeout or connection error
    Network,
    /// 5xx response
    Server,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts including the first
    pub max_attempts: u32,
    /// Timeout of the first attempt
    pub request_timeout: Duration,
    /// Base wait after a network failure
    pub network_backoff: Duration,
    /// Wait after a 5xx, whatever the attempt
    pub server_error_delay: Duration,
}

impl RetryPolicy {
    pub fn from_settings(settings: &FetchSettings, transcript: bool) -> Self {
        let timeout_secs = if transcript {
            settings.transcript_timeout_secs
        } else {
            settings.request_timeout_secs
        };
        Self {
            max_attempts: settings.max_attempts.max(1),
            request_timeout: Duration::from_secs(timeout_secs),
            network_backoff: Duration::from_secs(settings.network_backoff_secs),
            server_error_delay: Duration::from_secs(settings.server_error_delay_secs),
        }
    }

    /// No waiting; for offline use and tests
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            request_timeout: Duration::from_secs(30),
            network_backoff: Duration::ZERO,
            server_error_delay: Duration::ZERO,
        }
    }

    /// Timeout of attempt `attempt` (1-based); grows linearly
    pub fn timeout_for(&self, attempt: u32) -> Duration {
        self.request_timeout * attempt.max(1)
    }

    /// Wait after attempt `attempt` failed
    pub fn delay_after(&self, attempt: u32, failure: Failure) -> Duration {
        match failure {
            Failure::Network => self.network_backoff * attempt.max(1),
            Failure::Server => self.server_error_delay,
        }
    }

    pub fn has_attempts_left(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_settings(&FetchSettings::default(), false)
    }
}
