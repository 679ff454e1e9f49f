//! Health Checks - Liveness and Readiness Probes
//!
//! `/live` answers as long as the process serves HTTP. `/ready`
//! additionally probes the storage backend through a fresh repository.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::warn;

use crate::adapters::http::AppState;
use crate::ports::repository::{AssetRepository, RepositoryProvider};

/// Liveness probe: always returns 200 if the process is running.
pub async fn liveness() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Readiness probe: returns 200 only if storage answers.
pub async fn readiness<P: RepositoryProvider>(
    State(state): State<Arc<AppState<P>>>,
) -> impl IntoResponse {
    if state.provider.scoped().is_healthy().await {
        (StatusCode::OK, "READY")
    } else {
        warn!("Readiness probe failed: storage unavailable");
        (StatusCode::SERVICE_UNAVAILABLE, "NOT READY")
    }
}
