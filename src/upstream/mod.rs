//! Upstream client subsystem.
//!
//! # Data Flow
//! ```text
//! Service call
//!     → client.rs (build request, shared reqwest pool)
//!     → resilience (retry loop: backoff on 4xx/5xx and transport errors)
//!     → Envelope<T> decode → payload or error.rs (UpstreamError)
//! ```
//!
//! # Design Decisions
//! - The client holds no mutable state; every call takes a fresh snapshot
//! - Envelope unwrapping lives here, not in handlers; callers only see
//!   typed payloads or UpstreamError

pub mod client;
pub mod error;

pub use client::EmployeeClient;
pub use error::UpstreamError;
