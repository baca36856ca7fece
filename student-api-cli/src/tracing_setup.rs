//! Tracing setup for the student-api binary
//!
//! Development environments log to the console and the log file; every
//! other environment logs to the file only.
//!
//! Environment variables:
//!   RUST_LOG                          # Log filter (overrides config and --debug)

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

/// Tracing configuration options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Force debug level unless RUST_LOG is explicitly set
    pub debug: bool,
    /// Also log to the console
    pub console: bool,
    /// Default filter directive, e.g. `info`
    pub level: String,
    pub file: PathBuf,
}

impl TracingConfig {
    pub fn from_config(config: &Config, debug: bool) -> Self {
        Self {
            debug,
            console: config.is_development(),
            level: config.logging.level.clone(),
            file: config.logging.file.clone(),
        }
    }

    fn default_directive(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            &self.level
        }
    }
}

/// Build the filter: RUST_LOG wins, then --debug, then the configured level.
pub fn build_filter(config: &TracingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let directive = config.default_directive();
    EnvFilter::try_new(directive).with_context(|| format!("Invalid log level: {directive}"))
}

/// Open the log file for appending, creating parent directories.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}

/// Install the global subscriber
pub fn init(config: &TracingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let file = open_log_file(&config.file)?;

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(Mutex::new(file));

    let console_layer = config
        .console
        .then(|| fmt::layer().with_target(config.debug).compact());

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|err| anyhow!(err))
}
