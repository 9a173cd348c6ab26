//! Domain layer: client entities and the transport contract.
//!
//! Nothing in this layer performs I/O. The network is reached only through
//! the [`transport::Transport`] trait, implemented by the infrastructure
//! layer.
//!
//! # Architecture
//!
//! - [`entities`] - Configuration, per-call options, and interpreted replies
//! - [`transport`] - Transport trait and raw response model

pub mod entities;
pub mod transport;
