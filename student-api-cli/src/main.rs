//! student-api - HTTP CRUD service for student records
//!
//! Loads the configuration, sets up logging, opens the SQLite store and
//! serves `/api/students` until Ctrl+C or SIGTERM.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use student_api_server::{run_server, ServerConfig, SqliteStudentStore};
use tracing::{debug, info};

mod config;
mod tracing_setup;

use config::Config;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "student-api",
    author,
    version,
    about = "HTTP service for creating, reading, updating and deleting student records"
)]
struct Cli {
    /// Path to the configuration file (YAML or TOML)
    #[arg(long, short = 'c', env = "CONFIG_PATH")]
    config: PathBuf,

    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing so CONFIG_PATH may come from .env
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    tracing_setup::init(&TracingConfig::from_config(&config, cli.debug))
        .context("Failed to initialize logging")?;

    match dotenv {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(_) => debug!("no .env file found, relying on environment variables"),
    }

    let store = SqliteStudentStore::connect(&config.db_path)
        .await
        .with_context(|| format!("failed to open database at {}", config.db_path.display()))?;
    info!(env = %config.env, db = %config.db_path.display(), "connected to database");

    let server_config = ServerConfig {
        bind_addr: config.bind_addr()?,
        shutdown_grace: config.shutdown_grace(),
    };

    run_server(Arc::new(store), server_config)
        .await
        .context("server error")?;

    Ok(())
}
