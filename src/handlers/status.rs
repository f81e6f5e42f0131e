use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::models::server::StatusSnapshot;
use crate::services::aggregator;
use crate::AppState;

// Latest aggregated snapshot for the status page
#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = 200, description = "Current aggregated server status", body = StatusSnapshot)
    )
)]
pub async fn get_status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.status.read().await.clone();
    Json(snapshot)
}

// Refresh outside the schedule (the page's refresh button). Shares the
// in-flight gate with the timer, so a cycle that is already running makes
// this a no-op.
#[utoipa::path(
    post,
    path = "/api/status/refresh",
    responses(
        (status = 200, description = "A refresh cycle ran to completion"),
        (status = 409, description = "A refresh was already in flight")
    )
)]
pub async fn refresh_status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    if aggregator::refresh_snapshot(&state).await {
        (StatusCode::OK, Json(json!({ "message": "Status refreshed" })))
    } else {
        (
            StatusCode::CONFLICT,
            Json(json!({ "error": "Refresh already in progress" })),
        )
    }
}
