//! WealthPulse - Entry Point
//!
//! Wiring sequence:
//! 1. Load config.toml (path from first CLI argument) + env overrides
//! 2. Init tracing (JSON structured logging)
//! 3. Build the storage provider (PostgreSQL pool + schema, or in-memory)
//! 4. Serve the HTTP API until SIGINT

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{info, warn};

use wealthpulse::adapters::http::{create_router, AppState};
use wealthpulse::adapters::metrics::MetricsRegistry;
use wealthpulse::adapters::persistence::{ensure_schema, InMemoryProvider, PgProvider};
use wealthpulse::config::{self, AppConfig, StorageBackend};
use wealthpulse::ports::RepositoryProvider;

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Load configuration ───────────────────────────────
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());
    let config = config::loader::load_config(&config_path)
        .context("Failed to load configuration")?;

    // ── 2. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(&config.server.log_level)
                }),
        )
        .json()
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.server.environment,
        backend = ?config.database.backend,
        "Starting WealthPulse"
    );

    let metrics = Arc::new(
        MetricsRegistry::new().context("Failed to register metrics")?,
    );

    // ── 3. Storage provider ─────────────────────────────────
    match config.database.backend {
        StorageBackend::Postgres => {
            let provider = PgProvider::connect(&config.database).await?;
            ensure_schema(provider.pool()).await?;
            serve(provider, &config, metrics).await
        }
        StorageBackend::Memory => {
            warn!("In-memory storage selected, data is lost on restart");
            serve(InMemoryProvider::new(), &config, metrics).await
        }
    }
}

/// Bind the listener and serve until SIGINT.
async fn serve<P: RepositoryProvider>(
    provider: P,
    config: &AppConfig,
    metrics: Arc<MetricsRegistry>,
) -> Result<()> {
    let state = Arc::new(AppState::new(
        provider,
        config.server.environment,
        &config.server.static_dir,
        metrics,
    ));
    let app = create_router(state);

    // ── 4. HTTP server ──────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&config.server.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind_address))?;
    info!(address = %config.server.bind_address, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = signal::ctrl_c().await;
            info!("SIGINT received, initiating graceful shutdown");
        })
        .await?;

    info!("Shutdown complete");
    Ok(())
}
