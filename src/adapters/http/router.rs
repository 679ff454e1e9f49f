//! Router assembly and shared application state.

use std::path::PathBuf;
use std::sync::Arc;

use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::error::{panic_response, request_boundary, Boundary};
use super::handlers::{self, ASSETS_PATH};
use crate::adapters::metrics::{health, prometheus, MetricsRegistry};
use crate::config::Environment;
use crate::ports::repository::RepositoryProvider;

/// State shared by every handler.
pub struct AppState<P: RepositoryProvider> {
    /// Hands out one repository per request.
    pub provider: P,
    /// Selects error verbosity.
    pub environment: Environment,
    /// Front-end files served for non-API paths.
    pub static_dir: PathBuf,
    /// Prometheus counters.
    pub metrics: Arc<MetricsRegistry>,
}

impl<P: RepositoryProvider> AppState<P> {
    pub fn new(
        provider: P,
        environment: Environment,
        static_dir: impl Into<PathBuf>,
        metrics: Arc<MetricsRegistry>,
    ) -> Self {
        Self {
            provider,
            environment,
            static_dir: static_dir.into(),
            metrics,
        }
    }
}

/// Build the full HTTP surface.
pub fn create_router<P: RepositoryProvider>(state: Arc<AppState<P>>) -> Router {
    let boundary = Boundary {
        environment: state.environment,
        metrics: Arc::clone(&state.metrics),
    };

    Router::new()
        .route(
            ASSETS_PATH,
            get(handlers::list_assets::<P>).post(handlers::create_asset::<P>),
        )
        .route("/api/portfolio/summary", get(handlers::portfolio_summary::<P>))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness::<P>))
        .route("/metrics", get(prometheus::metrics_endpoint::<P>))
        .fallback_service(ServeDir::new(&state.static_dir))
        // Middleware (innermost first; the boundary sees panic envelopes)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn_with_state(boundary, request_boundary))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
