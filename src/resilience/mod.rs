//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Upstream call:
//!     → retries.rs (policy: attempt budget, retryable classification)
//!     → On 4xx/5xx or transport error: backoff.rs (delay before next try)
//!     → After exhaustion: error surfaces to the caller
//! ```
//!
//! # Design Decisions
//! - Retry behavior is per operation class (reads vs writes), not per route
//! - Backoff is exponential with a cap and additive jitter
//! - No retry budget across requests; each request carries its own cap

pub mod backoff;
pub mod retries;

pub use backoff::calculate_backoff;
pub use retries::{is_retryable, RetryPolicy};
