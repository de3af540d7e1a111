//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits and an acquire timeout.
//! Connections are checked out per query/transaction and returned on drop.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default time to wait for a free connection before failing the request.
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Pool tuning knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolOptions {
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// How long a request may wait for a connection
    pub acquire_timeout: Duration,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

impl PoolOptions {
    fn to_pg(self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
    }
}

/// Create a PostgreSQL connection pool with default options.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
///
/// # Errors
///
/// Returns an error if the URL is malformed or the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/catalog").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let connect = database_url.parse::<PgConnectOptions>()?;
    create_pool_with_options(connect, PoolOptions::default()).await
}

/// Create a PostgreSQL connection pool with custom options.
pub async fn create_pool_with_options(
    connect: PgConnectOptions,
    options: PoolOptions,
) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(
        host = connect.get_host(),
        port = connect.get_port(),
        max_connections = options.max_connections,
        acquire_timeout_ms = options.acquire_timeout.as_millis() as u64,
        "connecting database pool"
    );
    options.to_pg().connect_with(connect).await
}

/// Create a pool that connects on first use.
///
/// Used by router tests that never reach the database.
pub fn create_lazy_pool(connect: PgConnectOptions, options: PoolOptions) -> PgPool {
    options.to_pg().connect_lazy_with(connect)
}
