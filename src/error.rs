//! Error types returned by the shortener client.

use crate::domain::transport::TransportError;

/// Message used when the service rejects a request without explaining why.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Failure to shorten a URL.
///
/// Only [`ShortenerError::Config`] is raised unconditionally. The other
/// variants are degraded to "return the original URL" when the caller asks
/// for silent failure.
#[derive(Debug, thiserror::Error)]
pub enum ShortenerError {
    /// The client was configured with unusable settings.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The request never produced a response body.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The service answered without a shortened URL.
    #[error("{message}")]
    Service { message: String },
}

impl ShortenerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn service(message: impl Into<String>) -> Self {
        Self::Service {
            message: message.into(),
        }
    }

    /// Returns `true` for errors that `silently_fail` may swallow.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Config { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_displays_message_verbatim() {
        let err = ShortenerError::service("invalid url");
        assert_eq!(err.to_string(), "invalid url");
    }

    #[test]
    fn test_config_error_is_not_recoverable() {
        assert!(!ShortenerError::config("API key not provided").is_recoverable());
        assert!(ShortenerError::service("quota exceeded").is_recoverable());
        assert!(
            ShortenerError::from(TransportError::Connect("refused".to_string())).is_recoverable()
        );
    }
}
