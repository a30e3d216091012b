//! Team handlers for the REST API.
//!
//! None of these can fail: unknown users read as empty teams, clears are
//! idempotent, and a full team is a boolean outcome in the response body,
//! not an error status.

use std::time::Instant;

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use rosterdex_types::creature::Creature;

use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Body of a successful toggle response.
#[derive(Debug, Serialize)]
pub struct ToggleOutcome {
    /// `true` when the creature was added or removed; `false` when the
    /// team was full and the request left it unchanged.
    pub accepted: bool,
    /// Team size after the toggle.
    pub team_size: usize,
}

/// GET /api/v1/users/{user_id}/team - Current team, empty for unknown users.
pub async fn get_team(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<ApiResponse<Vec<Creature>>> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let team = state.team_service.get_team(&user_id);
    let elapsed = start.elapsed().as_millis() as u64;

    let resp = ApiResponse::success(team, request_id, elapsed)
        .with_link("self", &format!("/api/v1/users/{user_id}/team"))
        .with_link("catalog", "/api/v1/catalog");

    Json(resp)
}

/// DELETE /api/v1/users/{user_id}/team - Clear the team. Idempotent.
pub async fn clear_team(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<ApiResponse<serde_json::Value>> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    state.team_service.clear_team(&user_id);
    let elapsed = start.elapsed().as_millis() as u64;

    let resp = ApiResponse::success(serde_json::json!({ "cleared": true }), request_id, elapsed)
        .with_link("team", &format!("/api/v1/users/{user_id}/team"));

    Json(resp)
}

/// POST /api/v1/users/{user_id}/team/toggle - Add-or-remove a creature.
pub async fn toggle_membership(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(creature): Json<Creature>,
) -> Json<ApiResponse<ToggleOutcome>> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let accepted = state.team_service.toggle_membership(&user_id, creature);
    let team_size = state.team_service.get_team(&user_id).len();
    let elapsed = start.elapsed().as_millis() as u64;

    let outcome = ToggleOutcome {
        accepted,
        team_size,
    };
    let resp = ApiResponse::success(outcome, request_id, elapsed)
        .with_link("team", &format!("/api/v1/users/{user_id}/team"));

    Json(resp)
}
