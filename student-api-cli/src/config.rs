//! Service configuration
//!
//! Read from a YAML or TOML file (picked by extension). `ENV` in the
//! environment overrides the file's `env`.

use std::fs;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Deployment environment; `development` also logs to the console
    #[serde(default = "default_env")]
    pub env: String,
    pub db_path: PathBuf,
    #[serde(default)]
    pub http_server: HttpServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
    pub shutdown_grace_secs: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8082,
            shutdown_grace_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: PathBuf::from("logs/app.log"),
        }
    }
}

fn default_env() -> String {
    "production".to_string()
}

/// On-disk config format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Toml,
}

impl Format {
    /// `.toml` is TOML; everything else is treated as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }
}

impl Config {
    /// Load, override from the environment, and validate.
    ///
    /// Fails hard with an actionable error: the service cannot start
    /// without a usable config.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Configuration file does not exist: {}", path.display());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let mut config = Self::parse(&content, Format::from_path(path))?;
        config.apply_env_override(std::env::var("ENV").ok());
        config.validate()?;
        Ok(config)
    }

    pub fn parse(content: &str, format: Format) -> Result<Self> {
        match format {
            Format::Yaml => serde_yaml::from_str(content)
                .context("Failed to parse configuration file (invalid YAML)"),
            Format::Toml => {
                toml::from_str(content).context("Failed to parse configuration file (invalid TOML)")
            }
        }
    }

    /// Replace `env` with a non-empty override.
    pub fn apply_env_override(&mut self, env: Option<String>) {
        if let Some(env) = env.filter(|e| !e.trim().is_empty()) {
            self.env = env;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.db_path.as_os_str().is_empty() {
            bail!("db_path must be set in the configuration file");
        }
        if self.http_server.host.trim().is_empty() {
            bail!("http_server.host must not be empty");
        }
        Ok(())
    }

    pub fn is_development(&self) -> bool {
        matches!(
            self.env.to_ascii_lowercase().as_str(),
            "development" | "dev" | "local"
        )
    }

    /// Resolve `http_server.host:port`.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let HttpServerConfig { host, port, .. } = &self.http_server;
        (host.as_str(), *port)
            .to_socket_addrs()
            .with_context(|| format!("Invalid listen address {host}:{port}"))?
            .next()
            .with_context(|| format!("Listen address {host}:{port} did not resolve"))
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.http_server.shutdown_grace_secs)
    }
}
