//! Retry policy for upstream calls.
//!
//! # Responsibilities
//! - Classify upstream responses as retryable or terminal
//! - Carry the per-operation attempt budget and backoff parameters
//!
//! # Design Decisions
//! - The upstream rate-limits at random with arbitrary 4xx/5xx codes, so
//!   every error status is treated as transient for reads
//! - Writes default to a single attempt: the upstream has no idempotency
//!   token, so a retried create/delete can duplicate or lose side effects
//! - Jittered backoff prevents thundering herd

use reqwest::StatusCode;

use crate::config::RetryConfig;
use crate::resilience::backoff::calculate_backoff;

/// Attempt budget and backoff parameters for one class of operation.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, first try included.
    pub max_attempts: u32,
    /// Base delay for exponential backoff in milliseconds.
    pub base_delay_ms: u64,
    /// Cap on the backoff delay in milliseconds.
    pub max_delay_ms: u64,
}

impl RetryPolicy {
    /// Policy for reads: the full configured attempt budget.
    pub fn reads(config: &RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            base_delay_ms: config.base_delay_ms,
            max_delay_ms: config.max_delay_ms,
        }
    }

    /// Policy for writes: a single attempt unless retries on writes are
    /// explicitly enabled.
    pub fn writes(config: &RetryConfig) -> Self {
        if config.retry_writes {
            Self::reads(config)
        } else {
            Self {
                max_attempts: 1,
                base_delay_ms: config.base_delay_ms,
                max_delay_ms: config.max_delay_ms,
            }
        }
    }

    /// Delay to sleep after the given failed attempt (1-based).
    pub fn delay_after(&self, attempt: u32) -> std::time::Duration {
        calculate_backoff(attempt, self.base_delay_ms, self.max_delay_ms)
    }
}

/// Whether a response status warrants another attempt.
///
/// The upstream signals rate limiting with arbitrary client- and
/// server-error codes unrelated to the request's validity.
pub fn is_retryable(status: StatusCode) -> bool {
    status.is_client_error() || status.is_server_error()
}
