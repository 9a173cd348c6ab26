//! URL shortening client.

use std::sync::Arc;

use url::Url;

use crate::domain::entities::{ClientConfig, ConvertOptions, ServiceResponse};
use crate::domain::transport::Transport;
use crate::error::ShortenerError;
use crate::infrastructure::http::ReqwestTransport;
use crate::utils::api_url::build_api_url;
use crate::utils::short_link::is_short_link;

/// Client for the shortening API.
///
/// Holds immutable configuration only. Calls are independent and the client
/// can be shared across tasks behind an [`Arc`].
///
/// # Examples
///
/// ```no_run
/// use seturl::prelude::*;
///
/// # async fn run() -> Result<(), ShortenerError> {
/// let client = ShortenerClient::new(ClientConfig::new("my-api-key"))?;
///
/// let short = client
///     .convert("https://example.com/a/very/long/path", &ConvertOptions::new())
///     .await?;
/// println!("{short}");
/// # Ok(())
/// # }
/// ```
pub struct ShortenerClient<T: Transport = ReqwestTransport> {
    config: ClientConfig,
    endpoint: Url,
    transport: Arc<T>,
}

impl ShortenerClient<ReqwestTransport> {
    /// Creates a client backed by [`ReqwestTransport`].
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::Config`] if the configuration is invalid
    /// (see [`ClientConfig::validate`]), and [`ShortenerError::Transport`]
    /// if the HTTP client cannot be built. No request is sent.
    pub fn new(config: ClientConfig) -> Result<Self, ShortenerError> {
        config.validate()?;
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(config, Arc::new(transport))
    }
}

impl<T: Transport> ShortenerClient<T> {
    /// Creates a client over a custom transport.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::Config`] if the configuration is invalid.
    pub fn with_transport(config: ClientConfig, transport: Arc<T>) -> Result<Self, ShortenerError> {
        config.validate()?;
        let endpoint = config.endpoint()?;

        Ok(Self {
            config,
            endpoint,
            transport,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns `true` if `url` already points at the configured service.
    pub fn is_short_link(&self, url: &str) -> bool {
        is_short_link(&self.endpoint, url)
    }

    /// Shortens `long_url`.
    ///
    /// # Flow
    ///
    /// 1. Links already on the service are returned unchanged, without a request
    /// 2. `quick_link` delegates to [`Self::get_quick_link`]
    /// 3. Otherwise one GET is sent and the reply interpreted
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::Service`] when the reply has no shortened
    /// URL (carrying the service's message, or the raw body if it was not
    /// JSON), and [`ShortenerError::Transport`] when the request fails.
    /// With `silently_fail` set, both are replaced by `Ok(long_url)`.
    pub async fn convert(
        &self,
        long_url: &str,
        options: &ConvertOptions,
    ) -> Result<String, ShortenerError> {
        if self.is_short_link(long_url) {
            tracing::debug!(url = long_url, "Already a short link, skipping request");
            return Ok(long_url.to_string());
        }

        if options.quick_link {
            return Ok(self
                .get_quick_link(long_url, options.requested_alias())
                .await);
        }

        match self.shorten(long_url, options.requested_alias()).await {
            Ok(short_url) => Ok(short_url),
            Err(e) if options.silently_fail && e.is_recoverable() => {
                tracing::warn!(url = long_url, error = %e, "Shortening failed, returning original URL");
                Ok(long_url.to_string())
            }
            Err(e) => Err(e),
        }
    }

    /// Shortens `long_url`, falling back to it on any failure.
    ///
    /// Never returns an error: transport failures, undecodable bodies, and
    /// replies without a non-empty `shortenedUrl` all yield `long_url`.
    pub async fn get_quick_link(&self, long_url: &str, alias: Option<&str>) -> String {
        let url = build_api_url(&self.endpoint, self.config.api_key(), long_url, alias);

        let raw = match self.transport.get(url).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(url = long_url, error = %e, "Quick link request failed");
                return long_url.to_string();
            }
        };

        match ServiceResponse::interpret(&raw).into_shortened_url() {
            Some(short_url) => short_url,
            None => {
                tracing::debug!(url = long_url, "Quick link unavailable, returning original URL");
                long_url.to_string()
            }
        }
    }

    async fn shorten(&self, long_url: &str, alias: Option<&str>) -> Result<String, ShortenerError> {
        let url = build_api_url(&self.endpoint, self.config.api_key(), long_url, alias);
        tracing::debug!(host = self.config.host(), alias = ?alias, "Requesting short link");

        let raw = self.transport.get(url).await?;

        match ServiceResponse::interpret(&raw) {
            ServiceResponse::Success { shortened_url } => Ok(shortened_url),
            ServiceResponse::ServiceError { message } => Err(ShortenerError::service(message)),
            ServiceResponse::DecodeError { raw_body } => Err(ShortenerError::service(raw_body)),
        }
    }
}
