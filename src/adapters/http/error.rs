//! API errors and the top-level fault boundary.
//!
//! Handlers return [`ApiError`]. Internal faults always render the
//! opaque production envelope and carry the redacted diagnostic in a
//! response extension; [`request_boundary`] swaps it in when running in
//! development. Panics are turned into the same envelope by
//! [`panic_response`].

use std::any::Any;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, warn};

use super::dto::ErrorEnvelope;
use crate::adapters::metrics::MetricsRegistry;
use crate::config::Environment;

pub const INTERNAL_ERROR: &str = "Internal Server Error";
pub const GENERIC_MESSAGE: &str = "An error occurred processing your request";
pub const BAD_REQUEST: &str = "Bad Request";

const CREDENTIAL_MARKERS: [&str; 2] = ["postgresql://", "postgres://"];

/// Errors surfaced by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body failed shape binding. Never reaches storage.
    #[error("{0}")]
    BadRequest(String),
    /// Storage or programming fault. Indistinguishable to the caller.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// Redacted diagnostic riding on a 500 response.
#[derive(Debug, Clone)]
pub struct FaultDetail(pub String);

/// Cut `message` before the first embedded connection string.
pub fn redact_credentials(message: &str) -> &str {
    let cut = CREDENTIAL_MARKERS
        .iter()
        .filter_map(|marker| message.find(marker))
        .min()
        .unwrap_or(message.len());
    &message[..cut]
}

fn envelope(status: StatusCode, error: &str, message: impl Into<String>) -> Response {
    (status, Json(ErrorEnvelope::new(error, message))).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(message) => {
                warn!(reason = %message, "Rejected request body");
                envelope(StatusCode::BAD_REQUEST, BAD_REQUEST, message)
            }
            Self::Internal(err) => {
                let full = format!("{err:#}");
                let detail = redact_credentials(&full).to_string();
                error!(error = %detail, "Request failed");

                let mut response =
                    envelope(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR, GENERIC_MESSAGE);
                response.extensions_mut().insert(FaultDetail(detail));
                response
            }
        }
    }
}

/// State for [`request_boundary`].
#[derive(Clone)]
pub struct Boundary {
    pub environment: Environment,
    pub metrics: Arc<MetricsRegistry>,
}

/// Outermost request middleware: counts responses and applies the
/// environment's error verbosity.
pub async fn request_boundary(
    State(boundary): State<Boundary>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let mut response = next.run(request).await;

    if let Some(FaultDetail(detail)) = response.extensions_mut().remove::<FaultDetail>() {
        boundary.metrics.storage_faults.inc();
        if boundary.environment.is_development() {
            response = envelope(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR, detail);
        }
    }

    boundary
        .metrics
        .http_requests
        .with_label_values(&[method.as_str(), response.status().as_str()])
        .inc();

    response
}

/// Build the envelope for a handler panic.
///
/// Rendered like any internal fault so [`request_boundary`], which wraps
/// the panic layer, counts it and applies the environment's verbosity.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("handler panicked");
    let detail = redact_credentials(detail).to_string();
    error!(error = %detail, "Handler panicked");

    let mut response = envelope(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR, GENERIC_MESSAGE);
    response.extensions_mut().insert(FaultDetail(detail));
    response
}
