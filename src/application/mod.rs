//! Application layer: the shortener client.
//!
//! Combines configuration, request construction, the transport, and reply
//! interpretation into the `convert` and `get_quick_link` operations.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerClient`] - URL shortening client

pub mod services;
