//! Client configuration entity.

use std::fmt;

use url::Url;

use crate::error::ShortenerError;

/// Host used when none is configured.
pub const DEFAULT_BASE_HOST: &str = "seturl.in";

/// Path of the shortening endpoint on the base host.
const API_PATH: &str = "/api";

/// URL scheme used to reach the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    /// Plain HTTP. Only useful against a local endpoint.
    Http,
    #[default]
    Https,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

/// Immutable settings of a [`crate::application::services::ShortenerClient`].
///
/// Built with [`ClientConfig::new`] and the chained setters; checked by
/// [`ClientConfig::validate`] when the client is constructed.
///
/// # Examples
///
/// ```
/// use seturl::domain::entities::ClientConfig;
///
/// let config = ClientConfig::new("my-api-key").base_host("seturl.in");
/// assert!(config.validate().is_ok());
/// assert_eq!(config.endpoint().unwrap().as_str(), "https://seturl.in/api");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_key: String,
    base_host: String,
    scheme: Scheme,
    accept_invalid_certs: bool,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_host: DEFAULT_BASE_HOST.to_string(),
            scheme: Scheme::default(),
            accept_invalid_certs: false,
        }
    }

    /// Sets the service host, optionally with a port (`host:port`).
    pub fn base_host(mut self, base_host: impl Into<String>) -> Self {
        self.base_host = base_host.into();
        self
    }

    pub fn scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Disables TLS certificate verification.
    ///
    /// Off by default. Only enable it for a service whose certificate chain
    /// cannot be verified.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn host(&self) -> &str {
        &self.base_host
    }

    pub fn url_scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn accepts_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::Config`] if:
    /// - the API key is empty or blank
    /// - the base host is empty or contains URL delimiters
    /// - the endpoint URL cannot be formed from the base host
    pub fn validate(&self) -> Result<(), ShortenerError> {
        if self.api_key.trim().is_empty() {
            return Err(ShortenerError::config("API key not provided"));
        }

        let host = self.base_host.trim();
        if host.is_empty() {
            return Err(ShortenerError::config("Base host must not be empty"));
        }

        if host
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '@'))
        {
            return Err(ShortenerError::config(format!(
                "Base host must be a bare host name, got '{}'",
                self.base_host
            )));
        }

        self.endpoint().map(|_| ())
    }

    /// Returns the API endpoint, e.g. `https://seturl.in/api`.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::Config`] if the base host does not form a
    /// valid URL.
    pub fn endpoint(&self) -> Result<Url, ShortenerError> {
        let raw = format!(
            "{}://{}{}",
            self.scheme.as_str(),
            self.base_host.trim(),
            API_PATH
        );

        let url = Url::parse(&raw).map_err(|e| {
            ShortenerError::config(format!("Invalid base host '{}': {}", self.base_host, e))
        })?;

        if url.host_str().is_none() {
            return Err(ShortenerError::config(format!(
                "Invalid base host '{}': no host",
                self.base_host
            )));
        }

        Ok(url)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"***")
            .field("base_host", &self.base_host)
            .field("scheme", &self.scheme)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}
