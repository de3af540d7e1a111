//! catalog CLI - runs the catalog HTTP service
//!
//! - `catalog serve`: migrate the schema and serve the REST API
//! - `catalog migrate`: create the tables and exit
//!
//! A `.env` file in the working directory is loaded before arguments are
//! parsed, so `DATABASE_URL` / `POSTGRES_*` can live there.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "catalog",
    author,
    version,
    about = "Product and category catalog over PostgreSQL"
)]
struct Cli {
    /// Enable debug logging (when RUST_LOG is unset)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create catalog tables and indexes, then exit
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Don't fail if there is no .env
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
    }
    Ok(())
}
