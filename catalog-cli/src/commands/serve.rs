//! HTTP server command for the catalog API
//!
//! Migrates the schema, then serves until Ctrl+C / SIGTERM.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;

use catalog_server::db::{create_pool_with_options, migrations, PoolOptions};
use catalog_server::http::{run_server, ServerConfig};

use super::database_config;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides POSTGRES_* environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = 5)]
    pub max_connections: u32,

    /// Seconds a request may wait for a free connection
    #[arg(long, default_value_t = 5)]
    pub acquire_timeout: u64,

    /// Seconds before an in-flight request is answered with 408
    #[arg(long, default_value_t = 10)]
    pub request_timeout: u64,
}

impl ServeArgs {
    fn pool_options(&self) -> PoolOptions {
        PoolOptions {
            max_connections: self.max_connections.max(1),
            acquire_timeout: Duration::from_secs(self.acquire_timeout.max(1)),
        }
    }

    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            cors_permissive: self.cors_permissive,
            request_timeout: Duration::from_secs(self.request_timeout.max(1)),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = database_config(args.database_url.as_deref())?;

    tracing::info!("Starting catalog server on {}", args.bind);

    let pool = create_pool_with_options(config.connect_options(), args.pool_options())
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    // Run server (blocks until shutdown, then closes the pool)
    run_server(pool, args.server_config())
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ServeArgs {
        ServeArgs::try_parse_from(std::iter::once("serve").chain(args.iter().copied()))
            .expect("valid args")
    }

    #[test]
    fn defaults() {
        let args = parse(&["--database-url", "postgres://localhost/catalog"]);
        assert_eq!(args.bind.port(), 8000);

        let pool = args.pool_options();
        assert_eq!(pool.max_connections, 5);
        assert_eq!(pool.acquire_timeout, Duration::from_secs(5));

        let server = args.server_config();
        assert_eq!(server.request_timeout, Duration::from_secs(10));
        assert!(!server.cors_permissive);
    }

    #[test]
    fn zero_connections_clamped() {
        let args = parse(&["--max-connections", "0"]);
        assert_eq!(args.pool_options().max_connections, 1);
    }

    #[test]
    fn zero_timeouts_clamped() {
        let args = parse(&["--acquire-timeout", "0", "--request-timeout", "0"]);
        assert_eq!(args.pool_options().acquire_timeout, Duration::from_secs(1));
        assert_eq!(args.server_config().request_timeout, Duration::from_secs(1));
    }

    #[test]
    fn custom_bind() {
        let args = parse(&["-b", "0.0.0.0:9000", "--cors-permissive"]);
        assert_eq!(args.server_config().bind_addr.port(), 9000);
        assert!(args.server_config().cors_permissive);
    }
}
