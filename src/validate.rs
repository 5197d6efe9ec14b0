//! Token validation client for the backend user service.
//!
//! DESIGN
//! ======
//! One POST to `/user/validate` carrying the session token as a bearer
//! credential and the admin requirement in the body. Classification is by
//! HTTP status alone; the response body is ignored. No retries, no timeout,
//! no deduplication of concurrent calls.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;

use crate::config::BackendConfig;

/// JSON body for `POST /user/validate`.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ValidateRequest {
    /// Whether the caller requires administrator privilege.
    #[serde(rename = "needAdmin")]
    pub need_admin: bool,
}

/// Error returned by [`TokenValidator::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ValidateError {
    /// The request never produced a response (DNS, connect, I/O).
    #[error("validation request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The backend answered with a non-success status.
    #[error("validation rejected: HTTP {0}")]
    Status(StatusCode),
}

/// Backend seam for session token validation.
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// Ask the backend whether `token` is valid (and an admin token, when
    /// `need_admin` is set).
    async fn validate(&self, token: &str, need_admin: bool) -> Result<(), ValidateError>;
}

/// Real validator talking to the user service over HTTP.
#[derive(Clone, Debug)]
pub struct HttpValidator {
    url: String,
    client: reqwest::Client,
}

impl HttpValidator {
    /// Build a validator for the configured backend with a default client.
    #[must_use]
    pub fn new(config: &BackendConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Build a validator with a caller-provided client (custom TLS, proxy).
    #[must_use]
    pub fn with_client(config: &BackendConfig, client: reqwest::Client) -> Self {
        Self { url: config.validate_url(), client }
    }

    /// Resolved validation endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl TokenValidator for HttpValidator {
    async fn validate(&self, token: &str, need_admin: bool) -> Result<(), ValidateError> {
        let resp = self
            .client
            .post(&self.url)
            .header("Authorization", format!("Bearer {token}"))
            .json(&ValidateRequest { need_admin })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ValidateError::Status(status));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
