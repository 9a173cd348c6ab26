//! Command-line configuration loaded from environment variables.
//!
//! The library itself takes all settings explicitly through
//! [`ClientConfig`]. This module only serves the `seturl` binary.
//!
//! ```bash
//! export SETURL_API_KEY="your-api-key"
//! export SETURL_BASE_HOST="seturl.in"
//! ```
//!
//! ## Optional Variables
//!
//! - `SETURL_API_KEY` - API key (prompted for interactively if missing)
//! - `SETURL_BASE_HOST` - Service host (default: `seturl.in`)
//! - `SETURL_ACCEPT_INVALID_CERTS` - Disable TLS verification (`true`/`1`, default: off)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

use crate::domain::entities::{ClientConfig, DEFAULT_BASE_HOST};

/// Tool configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// `None` when neither the environment nor the command line provides one.
    pub api_key: Option<String>,
    pub base_host: String,
    pub accept_invalid_certs: bool,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Empty values are treated as unset.
    pub fn from_env() -> Result<Self> {
        let api_key = non_empty_var("SETURL_API_KEY");
        let base_host =
            non_empty_var("SETURL_BASE_HOST").unwrap_or_else(|| DEFAULT_BASE_HOST.to_string());

        let accept_invalid_certs = env::var("SETURL_ACCEPT_INVALID_CERTS")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            api_key,
            base_host,
            accept_invalid_certs,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `base_host` is empty or looks like a URL rather than a host
    /// - `api_key` is present but blank
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.base_host.trim().is_empty() {
            anyhow::bail!("SETURL_BASE_HOST must not be empty");
        }

        if self.base_host.contains("://") {
            anyhow::bail!(
                "SETURL_BASE_HOST must be a host name without scheme, got '{}'",
                self.base_host
            );
        }

        if let Some(ref key) = self.api_key
            && key.trim().is_empty()
        {
            anyhow::bail!("API key must not be blank");
        }

        Ok(())
    }

    /// Builds the client configuration for the given API key.
    pub fn client_config(&self, api_key: impl Into<String>) -> ClientConfig {
        ClientConfig::new(api_key)
            .base_host(self.base_host.clone())
            .accept_invalid_certs(self.accept_invalid_certs)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Base host: {}", self.base_host);

        match self.api_key {
            Some(ref key) => tracing::info!("  API key: {}", mask_secret(key)),
            None => tracing::info!("  API key: not set"),
        }

        if self.accept_invalid_certs {
            tracing::info!("  TLS verification: disabled");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_deref().map(mask_secret))
            .field("base_host", &self.base_host)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .finish()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Masks a secret for logging, keeping at most its first four characters.
///
/// - `abcdef123456` → `abcd***`
/// - `short` → `***`
fn mask_secret(secret: &str) -> String {
    if secret.chars().count() < 12 {
        return "***".to_string();
    }

    let prefix: String = secret.chars().take(4).collect();
    format!("{prefix}***")
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
