//! Command implementations for the catalog CLI

pub mod migrate;
pub mod serve;

// Re-export dispatcher functions for flat access from main.rs
pub use migrate::run_migrate;
pub use serve::run_serve;

use anyhow::{Context, Result};
use catalog_server::DatabaseConfig;

/// Resolve database settings: explicit URL first, then the environment.
pub(crate) fn database_config(database_url: Option<&str>) -> Result<DatabaseConfig> {
    let config = match database_url {
        Some(url) => DatabaseConfig::from_url(url),
        None => DatabaseConfig::from_env(),
    }
    .context("Invalid database configuration. Set --database-url, DATABASE_URL or POSTGRES_*")?;

    tracing::info!(
        host = config.host(),
        port = config.port(),
        database = config.database().unwrap_or("<default>"),
        "Database configured"
    );
    Ok(config)
}
