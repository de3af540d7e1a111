//! catalog-server: HTTP catalog of products, categories and their owners
//!
//! Layers, leaves first:
//! - [`models`]: row types, creation inputs, partial updates, validation
//! - [`db`]: connection pool, schema migrations, repositories
//! - [`http`]: axum router, extractors, error mapping, server loop
//!
//! A connection is checked out from the pool per repository call and returned
//! on every exit path; there is no shared session.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, DatabaseConfig};
pub use http::{build_router, run_server, AppState, ServerConfig};
