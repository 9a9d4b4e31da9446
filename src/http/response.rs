//! Error-to-response mapping for the inbound API.
//!
//! # Responsibilities
//! - Map service/upstream errors to appropriate HTTP status codes
//!
//! # Design Decisions
//! - Genuine not-found is 404 with an empty body
//! - An upstream rejection of a create is the caller's fault: 400
//! - Post-retry upstream failures are 502, never 404: an outage must not
//!   masquerade as an empty store

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::upstream::UpstreamError;

/// Failure responses produced by the inbound API handlers.
#[derive(Debug)]
pub enum ApiError {
    /// The requested employee does not exist (or the id was malformed).
    NotFound,
    /// The upstream rejected the submitted input.
    InvalidInput(String),
    /// The upstream stayed unavailable through the whole retry budget.
    Upstream(UpstreamError),
}

impl From<UpstreamError> for ApiError {
    fn from(e: UpstreamError) -> Self {
        ApiError::Upstream(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::InvalidInput(message) => {
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            ApiError::Upstream(e) => {
                tracing::error!(error = %e, "Upstream request failed");
                (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
            }
        }
    }
}
