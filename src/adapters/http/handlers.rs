//! Asset API handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use super::dto::CreateAssetRequest;
use super::error::ApiError;
use super::router::AppState;
use crate::domain::{Asset, PortfolioSummary};
use crate::ports::repository::RepositoryProvider;
use crate::usecases::PortfolioService;

/// Path of the collection; `Location` of created assets points here.
pub const ASSETS_PATH: &str = "/api/assets";

/// GET /api/assets
pub async fn list_assets<P: RepositoryProvider>(
    State(state): State<Arc<AppState<P>>>,
) -> Result<Json<Vec<Asset>>, ApiError> {
    let service = PortfolioService::new(state.provider.scoped());
    let assets = service.list_assets().await?;
    Ok(Json(assets))
}

/// POST /api/assets
pub async fn create_asset<P: RepositoryProvider>(
    State(state): State<Arc<AppState<P>>>,
    payload: Result<Json<CreateAssetRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;

    let mut service = PortfolioService::new(state.provider.scoped());
    let asset = service.create_asset(request.into_draft()).await?;
    state.metrics.assets_created.inc();

    let location = format!("{ASSETS_PATH}?id={}", asset.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(asset)))
}

/// GET /api/portfolio/summary
pub async fn portfolio_summary<P: RepositoryProvider>(
    State(state): State<Arc<AppState<P>>>,
) -> Result<Json<PortfolioSummary>, ApiError> {
    let service = PortfolioService::new(state.provider.scoped());
    Ok(Json(service.summary().await?))
}
