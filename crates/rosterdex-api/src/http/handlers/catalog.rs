//! Catalog handler for the REST API.

use std::time::Instant;

use axum::Json;
use axum::extract::State;

use rosterdex_types::creature::Creature;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/catalog - The full creature catalog.
///
/// Upstream failures propagate as 502 rather than being retried here.
pub async fn get_catalog(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Creature>>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let catalog = state.team_service.fetch_catalog().await?;
    let elapsed = start.elapsed().as_millis() as u64;

    let resp = ApiResponse::success(catalog, request_id, elapsed)
        .with_link("self", "/api/v1/catalog");

    Ok(Json(resp))
}
