//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - Connection pool, never a process-wide session
//! - A connection is held for one query or one transaction, then returned
//! - Rely on DB constraints (foreign keys), map violations to typed errors
//! - Transactions for read-modify-write (partial product update)

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_lazy_pool, create_pool, create_pool_with_options, PoolOptions};
pub use repos::*;
