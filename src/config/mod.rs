//! Configuration Module - TOML-based Service Configuration
//!
//! Loads and validates configuration from `config.toml` with
//! environment variable overrides (`DATABASE_URL`, `WEALTHPULSE_ENV`).
//! Connection strings live here or in the environment - never in code.

pub mod loader;

use std::fmt;

use serde::Deserialize;

/// Top-level service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
  /// HTTP server settings.
  #[serde(default)]
  pub server: ServerConfig,
  /// Storage settings.
  #[serde(default)]
  pub database: DatabaseConfig,
}

/// Deployment environment. Selects error verbosity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
  /// Detailed (credential-redacted) error messages.
  Development,
  /// Fixed, opaque error messages.
  #[default]
  Production,
}

impl Environment {
  pub fn is_development(self) -> bool {
    self == Self::Development
  }

  /// Parse the `WEALTHPULSE_ENV` value. Case-insensitive.
  pub fn parse(value: &str) -> Option<Self> {
    match value.trim().to_ascii_lowercase().as_str() {
      "development" | "dev" => Some(Self::Development),
      "production" | "prod" => Some(Self::Production),
      _ => None,
    }
  }
}

impl fmt::Display for Environment {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Development => write!(f, "development"),
      Self::Production => write!(f, "production"),
    }
  }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  /// Listen address.
  #[serde(default = "default_bind_address")]
  pub bind_address: String,
  /// Deployment environment.
  #[serde(default)]
  pub environment: Environment,
  /// Directory served for non-API paths (front-end).
  #[serde(default = "default_static_dir")]
  pub static_dir: String,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      bind_address: default_bind_address(),
      environment: Environment::default(),
      static_dir: default_static_dir(),
      log_level: default_log_level(),
    }
  }
}

/// Which storage adapter backs the repository port.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
  #[default]
  Postgres,
  Memory,
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
  /// Storage adapter.
  #[serde(default)]
  pub backend: StorageBackend,
  /// PostgreSQL connection string.
  #[serde(default)]
  pub url: String,
  /// Pool size.
  #[serde(default = "default_max_connections")]
  pub max_connections: u32,
  /// Seconds to wait for a pooled connection.
  #[serde(default = "default_acquire_timeout")]
  pub acquire_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
  fn default() -> Self {
    Self {
      backend: StorageBackend::default(),
      url: String::new(),
      max_connections: default_max_connections(),
      acquire_timeout_seconds: default_acquire_timeout(),
    }
  }
}

// Default value functions for serde

fn default_bind_address() -> String {
  "0.0.0.0:8080".to_string()
}

fn default_static_dir() -> String {
  "wwwroot".to_string()
}

fn default_log_level() -> String {
  "info".to_string()
}

fn default_max_connections() -> u32 {
  5
}

fn default_acquire_timeout() -> u64 {
  30
}
