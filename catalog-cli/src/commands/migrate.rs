//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use catalog_server::db::{create_pool_with_options, migrations, PoolOptions};

use super::database_config;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides POSTGRES_* environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Create the catalog tables and exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let config = database_config(args.database_url.as_deref())?;

    let pool = create_pool_with_options(config.connect_options(), PoolOptions::default())
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    pool.close().await;
    Ok(())
}
