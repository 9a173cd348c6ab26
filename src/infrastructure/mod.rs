//! Infrastructure layer for external integrations.
//!
//! This layer implements the [`crate::domain::transport::Transport`] trait
//! against a real HTTP stack.
//!
//! # Modules
//!
//! - [`http`] - `reqwest`-backed transport

pub mod http;
