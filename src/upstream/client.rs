//! HTTP client for the upstream employee-record service.
//!
//! # Responsibilities
//! - Issue GET/POST/DELETE calls against the fixed base URL
//! - Unwrap the `{data, status, errorMessage}` envelope
//! - Apply the retry policy around every call
//!
//! # Design Decisions
//! - One pooled `reqwest::Client` shared across all requests; no response
//!   data is ever stored across calls
//! - Reads retry on any 4xx/5xx (the upstream rate-limits with arbitrary
//!   error codes); writes follow their own, stricter policy
//! - A 404 on a by-id read is terminal, not a rate-limit signal

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use uuid::Uuid;

use crate::config::{RetryConfig, UpstreamConfig};
use crate::model::{DeleteEmployeeInput, Employee, EmployeeInput, Envelope};
use crate::resilience::{is_retryable, RetryPolicy};
use crate::upstream::error::UpstreamError;

/// Client for the upstream employee-record service.
#[derive(Debug, Clone)]
pub struct EmployeeClient {
    http: reqwest::Client,
    base_url: String,
    read_policy: RetryPolicy,
    write_policy: RetryPolicy,
}

impl EmployeeClient {
    /// Build a client with a pooled connection to the configured upstream.
    pub fn new(upstream: &UpstreamConfig, retries: &RetryConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(upstream.connect_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: upstream.base_url.trim_end_matches('/').to_string(),
            read_policy: RetryPolicy::reads(retries),
            write_policy: RetryPolicy::writes(retries),
        })
    }

    /// Fetch every employee, in the order the upstream returns them.
    pub async fn list_all(&self) -> Result<Vec<Employee>, UpstreamError> {
        let response = self
            .send_with_retry(&self.read_policy, || self.http.get(&self.base_url), |_| false)
            .await?;
        unwrap_envelope(response).await
    }

    /// Fetch a single employee by identifier.
    ///
    /// Malformed identifiers are indistinguishable from missing ones to
    /// callers, so a non-UUID id short-circuits to `None` without touching
    /// the network. An upstream 404 maps to `None` as well.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Employee>, UpstreamError> {
        let Ok(uuid) = Uuid::parse_str(id) else {
            tracing::debug!(id, "Identifier is not a UUID, treating as not found");
            return Ok(None);
        };

        let url = format!("{}/{uuid}", self.base_url);
        let response = self
            .send_with_retry(
                &self.read_policy,
                || self.http.get(&url),
                |status| status == StatusCode::NOT_FOUND,
            )
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        match unwrap_envelope(response).await {
            Ok(employee) => Ok(Some(employee)),
            Err(UpstreamError::MissingData(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Create an employee and return it with its upstream-assigned id.
    pub async fn create(&self, input: &EmployeeInput) -> Result<Employee, UpstreamError> {
        let response = self
            .send_with_retry(
                &self.write_policy,
                || self.http.post(&self.base_url).json(input),
                |_| false,
            )
            .await?;
        unwrap_envelope(response).await
    }

    /// Delete an employee by name (the upstream's only delete key).
    ///
    /// The returned boolean reports whether exactly one record was removed.
    pub async fn delete_by_name(&self, name: &str) -> Result<bool, UpstreamError> {
        let body = DeleteEmployeeInput {
            name: name.to_string(),
        };
        let response = self
            .send_with_retry(
                &self.write_policy,
                || self.http.delete(&self.base_url).json(&body),
                |_| false,
            )
            .await?;
        unwrap_envelope(response).await
    }

    /// Send a request, retrying error statuses and transport failures with
    /// exponential backoff until the policy's attempt budget runs out.
    ///
    /// `halt` marks statuses the caller wants returned untouched instead of
    /// retried (e.g. 404 on a by-id read).
    async fn send_with_retry<B, H>(
        &self,
        policy: &RetryPolicy,
        mut build: B,
        halt: H,
    ) -> Result<reqwest::Response, UpstreamError>
    where
        B: FnMut() -> reqwest::RequestBuilder,
        H: Fn(StatusCode) -> bool,
    {
        let mut attempt = 0;
        loop {
            attempt += 1;

            match build().send().await {
                Ok(response) => {
                    let status = response.status();
                    if !is_retryable(status) || halt(status) {
                        return Ok(response);
                    }

                    if attempt < policy.max_attempts {
                        let delay = policy.delay_after(attempt);
                        tracing::info!(
                            attempt,
                            status = %status,
                            delay = ?delay,
                            "Upstream rejected request, retrying"
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }

                    tracing::error!(attempt, status = %status, "Upstream attempts exhausted");
                    return Err(UpstreamError::Exhausted {
                        status,
                        attempts: attempt,
                    });
                }
                Err(e) => {
                    if attempt < policy.max_attempts {
                        let delay = policy.delay_after(attempt);
                        tracing::info!(
                            attempt,
                            error = %e,
                            delay = ?delay,
                            "Upstream request failed, retrying"
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }

                    tracing::error!(attempt, error = %e, "Upstream attempts exhausted");
                    return Err(UpstreamError::Transport(e));
                }
            }
        }
    }
}

/// Decode the response body as an envelope and unwrap its payload.
async fn unwrap_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, UpstreamError> {
    let envelope: Envelope<T> = response.json().await?;
    envelope.into_data().map_err(UpstreamError::MissingData)
}
