//! Client configuration types.

use std::time::Duration;

/// How the client reacts when the API reports an exhausted request quota.
///
/// The API reports the remaining quota in the `x-dnsme-requestsRemaining`
/// response header. When it reaches zero the client pauses for `backoff` and
/// sends the request again, up to `max_attempts` requests in total.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of requests sent for one operation
    pub max_attempts: u32,

    /// Pause between attempts while rate limited
    pub backoff: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryConfig {
    /// Create the default retry configuration (10 attempts, 30 second pauses)
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: 10,
            backoff: Duration::from_secs(30),
        }
    }

    /// Set the maximum number of attempts (at least one is always made)
    #[must_use]
    pub const fn max_attempts(mut self, max: u32) -> Self {
        self.max_attempts = max;
        self
    }

    /// Set the pause between rate-limited attempts
    #[must_use]
    pub const fn backoff(mut self, duration: Duration) -> Self {
        self.backoff = duration;
        self
    }

    /// Effective number of attempts
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        if self.max_attempts == 0 {
            1
        } else {
            self.max_attempts
        }
    }
}
