//! Transport trait for reaching the shortening API.

use async_trait::async_trait;
use url::Url;

/// Errors raised before a complete response body is available.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Failed to build HTTP client: {0}")]
    Build(String),

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// A response as received from the wire, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    /// Value of the `Content-Type` header, if one was sent.
    pub content_type: Option<String>,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, content_type: Option<&str>, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: content_type.map(str::to_owned),
            body: body.into(),
        }
    }

    /// Shorthand for a `200 OK` JSON response.
    pub fn json(body: impl Into<String>) -> Self {
        Self::new(200, Some("application/json"), body)
    }
}

/// Issues a single GET request and returns the raw response.
///
/// Implementations must release the underlying connection before returning,
/// on success and on every error path.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::ReqwestTransport`] - `reqwest`-backed transport
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs `GET url`, query string included.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on connection, TLS, timeout, or body read
    /// failures. Non-2xx statuses are not errors at this level.
    async fn get(&self, url: Url) -> Result<RawResponse, TransportError>;
}
