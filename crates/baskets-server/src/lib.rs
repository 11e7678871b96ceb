//! # `request-baskets`
//!
//! Service for collecting HTTP requests into named baskets and inspecting
//! them later. This crate carries the service configuration and the HTTP
//! front of the service:
//!
//! - [`config`]: command line arguments and the immutable [`ServerConfig`]
//!   record the rest of the service reads.
//! - [`tokens`]: master token generation.
//! - [`theme`]: CSS theme catalog for the web UI.
//! - [`storage`]: baskets storage backend selection.
//! - [`server`]: listener, accept loop and operational endpoints.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod server;
pub mod storage;
pub mod theme;
pub mod tokens;

pub use config::{
    Config,
    ServerConfig,
};
pub use server::BasketsServer;
pub use storage::StorageKind;
