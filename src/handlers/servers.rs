use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::models::server::ServerConfig;
use crate::services::aggregator;
use crate::{AppState, ConfigState};

// The polling set as last loaded from the directory
#[utoipa::path(
    get,
    path = "/api/servers",
    responses(
        (status = 200, description = "Currently configured servers", body = Vec<ServerConfig>)
    )
)]
pub async fn list_servers(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let servers = state.configs.read().await.servers.clone();
    Json(servers)
}

// Manual reconfiguration: re-fetch the directory and replace the polling set
// wholesale, then run an immediate cycle so the snapshot reflects the new
// list. A failed fetch also replaces the set (with nothing), mirroring the
// load semantics: the page then shows "no servers configured".
#[utoipa::path(
    post,
    path = "/api/servers/reload",
    responses(
        (status = 200, description = "Server list reloaded"),
        (status = 502, description = "Directory unreachable; polling set is now empty")
    )
)]
pub async fn reload_servers(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.directory.load_configs(false).await {
        Ok(servers) => {
            let count = servers.len();
            tracing::info!("Reloaded server directory: {} servers", count);
            *state.configs.write().await = ConfigState::loaded(servers);
            aggregator::refresh_snapshot(&state).await;
            (
                StatusCode::OK,
                Json(json!({ "message": "Server list reloaded", "servers": count })),
            )
        }
        Err(e) => {
            tracing::error!("Failed to reload server directory: {}", e);
            *state.configs.write().await = ConfigState::failed(e.to_string());
            aggregator::refresh_snapshot(&state).await;
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": format!("Failed to load server list: {}", e) })),
            )
        }
    }
}
