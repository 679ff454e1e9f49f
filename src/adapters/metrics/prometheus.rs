//! Prometheus Metrics Registry - Service Observability
//!
//! Registers request and asset counters on a private registry and
//! renders them in the text exposition format on `/metrics`.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};
use tracing::error;

use crate::adapters::http::AppState;
use crate::ports::repository::RepositoryProvider;

/// Counters for the portfolio service.
///
/// All metrics follow the naming convention `wealthpulse_*`.
pub struct MetricsRegistry {
    /// Prometheus registry.
    registry: Registry,
    /// Assets committed through the API.
    pub assets_created: IntCounter,
    /// Requests that ended in an internal fault.
    pub storage_faults: IntCounter,
    /// Responses by method and status code.
    pub http_requests: IntCounterVec,
}

impl MetricsRegistry {
    /// Create and register all Prometheus metrics.
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let assets_created = IntCounter::new(
            "wealthpulse_assets_created_total",
            "Total assets created",
        )?;

        let storage_faults = IntCounter::new(
            "wealthpulse_storage_faults_total",
            "Requests answered with a 500 fault envelope",
        )?;

        let http_requests = IntCounterVec::new(
            Opts::new("wealthpulse_http_requests_total", "HTTP responses served"),
            &["method", "status"],
        )?;

        registry.register(Box::new(assets_created.clone()))?;
        registry.register(Box::new(storage_faults.clone()))?;
        registry.register(Box::new(http_requests.clone()))?;

        Ok(Self {
            registry,
            assets_created,
            storage_faults,
            http_requests,
        })
    }

    /// Text exposition of every registered metric.
    pub fn render(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

/// GET /metrics
pub async fn metrics_endpoint<P: RepositoryProvider>(
    State(state): State<Arc<AppState<P>>>,
) -> impl IntoResponse {
    match state.metrics.render() {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)],
            body,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to encode metrics");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
