//! # seturl
//!
//! An async client for the [seturl.in](https://seturl.in) URL shortening API.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Configuration, reply interpretation, and the transport trait
//! - **Application Layer** ([`application`]) - The [`ShortenerClient`] itself
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest`-backed transport
//! - **Utilities** ([`utils`]) - Query construction and short-link detection
//!
//! ## Behaviour
//!
//! - Links already on the service are returned as-is, without a request
//! - `silently_fail` degrades every failure to returning the original URL
//! - The quick-link path never reports errors
//! - TLS certificate verification is on unless explicitly disabled
//!
//! ## Quick Start
//!
//! ```no_run
//! use seturl::prelude::*;
//!
//! # async fn run() -> Result<(), ShortenerError> {
//! let client = ShortenerClient::new(ClientConfig::new("my-api-key"))?;
//!
//! let options = ConvertOptions::new().alias("launch").silently_fail(true);
//! let short = client.convert("https://example.com/launch", &options).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Command Line
//!
//! The `seturl` binary wraps the client. See [`config`] for the environment
//! variables it reads.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use application::services::ShortenerClient;
pub use error::ShortenerError;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::ShortenerClient;
    pub use crate::domain::entities::{ClientConfig, ConvertOptions, Scheme, ServiceResponse};
    pub use crate::domain::transport::{RawResponse, Transport, TransportError};
    pub use crate::error::ShortenerError;
}
