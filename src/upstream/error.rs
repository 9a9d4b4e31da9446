//! Upstream failure classification.

use reqwest::StatusCode;

/// Errors surfaced by the upstream employee-record client.
///
/// Transient 4xx/5xx responses are retried before any of these is returned;
/// an `Exhausted` error means the attempt budget ran out.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The upstream kept answering with an error status until the retry
    /// budget was spent.
    #[error("upstream returned {status} after {attempts} attempt(s)")]
    Exhausted { status: StatusCode, attempts: u32 },

    /// The request never produced a usable response (connect failure,
    /// timeout, or an undecodable body).
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The envelope decoded but carried no payload.
    #[error("upstream response carried no data ({})", .0.as_deref().unwrap_or("no error message"))]
    MissingData(Option<String>),
}
