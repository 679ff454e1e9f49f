//! HTTP API Adapter
//!
//! Exposes the portfolio use cases over JSON with axum.
//!
//! Sub-modules:
//! - `dto`: request/response bodies
//! - `error`: `ApiError`, credential redaction, fault boundary
//! - `handlers`: list/create/summary handlers
//! - `router`: `AppState` and route/middleware assembly

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;

pub use error::ApiError;
pub use router::{create_router, AppState};
