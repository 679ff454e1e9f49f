//! Configuration Loader - File Loading, Overrides and Validation
//!
//! Handles loading `config.toml`, applying environment overrides,
//! validating all parameters, and providing clear error messages for
//! misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::{AppConfig, Environment, StorageBackend};

/// Environment variable replacing `database.url`.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Environment variable replacing `server.environment`.
pub const ENVIRONMENT_VAR: &str = "WEALTHPULSE_ENV";

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let mut config = parse_config(&content)?;
  apply_overrides(&mut config, |key| std::env::var(key).ok())?;
  validate_config(&config)?;

  info!(
    environment = %config.server.environment,
    backend = ?config.database.backend,
    bind = %config.server.bind_address,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Parse TOML text into a config without validating it.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  toml::from_str(content).context("Failed to parse config.toml")
}

/// Apply environment overrides through `lookup`.
pub fn apply_overrides<F>(config: &mut AppConfig, lookup: F) -> Result<()>
where
  F: Fn(&str) -> Option<String>,
{
  if let Some(url) = lookup(DATABASE_URL_VAR).filter(|v| !v.is_empty()) {
    config.database.url = url;
  }

  if let Some(raw) = lookup(ENVIRONMENT_VAR) {
    config.server.environment = Environment::parse(&raw)
      .with_context(|| format!("{ENVIRONMENT_VAR} has unknown value: {raw}"))?;
  }

  Ok(())
}

/// Validate all configuration parameters.
pub fn validate_config(config: &AppConfig) -> Result<()> {
  anyhow::ensure!(
    !config.server.bind_address.trim().is_empty(),
    "server.bind_address must not be empty"
  );

  anyhow::ensure!(
    config.database.max_connections > 0,
    "database.max_connections must be positive, got {}",
    config.database.max_connections
  );

  if config.database.backend == StorageBackend::Postgres {
    let url = config.database.url.as_str();
    anyhow::ensure!(
      !url.is_empty(),
      "database.url (or {DATABASE_URL_VAR}) is required for the postgres backend"
    );
    anyhow::ensure!(
      url.starts_with("postgres://") || url.starts_with("postgresql://"),
      "database.url must be a postgres:// or postgresql:// connection string"
    );
  }

  Ok(())
}
