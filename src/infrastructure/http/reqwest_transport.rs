//! `reqwest`-backed transport.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::domain::entities::ClientConfig;
use crate::domain::transport::{RawResponse, Transport, TransportError};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Transport over a `reqwest::Client`.
///
/// The client keeps no idle connections, so every request opens its own
/// connection and closes it once the body has been read or the request has
/// failed. No request timeout is set; transport defaults apply.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a transport honouring the TLS settings of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Build`] if the TLS backend cannot be
    /// initialised.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        if config.accepts_invalid_certs() {
            tracing::warn!(
                host = config.host(),
                "TLS certificate verification is disabled"
            );
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(config.accepts_invalid_certs())
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| TransportError::Build(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: Url) -> Result<RawResponse, TransportError> {
        let response = self.client.get(url).send().await.map_err(classify)?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        tracing::debug!(status, content_type = ?content_type, bytes = body.len(), "Response received");

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }
}

fn classify(e: reqwest::Error) -> TransportError {
    // Strip the query string: it carries the API key.
    let e = e.without_url();

    if e.is_timeout() {
        TransportError::Timeout(e.to_string())
    } else if e.is_connect() {
        TransportError::Connect(e.to_string())
    } else {
        TransportError::Request(e.to_string())
    }
}
