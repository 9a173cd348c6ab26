//! Utility functions for request construction and link detection.
//!
//! - [`api_url`] - Query string construction for the shortening API
//! - [`short_link`] - Detection of links that are already shortened

pub mod api_url;
pub mod short_link;
