//! Core entities of the shortener client.

pub mod client_config;
pub mod convert_options;
pub mod service_response;

pub use client_config::{ClientConfig, DEFAULT_BASE_HOST, Scheme};
pub use convert_options::ConvertOptions;
pub use service_response::ServiceResponse;
