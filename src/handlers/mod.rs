use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub mod rankings;
pub mod servers;
pub mod status;

// Full route table; layers and state are attached by the caller
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root))
        // Status
        .route("/api/status", get(status::get_status))
        .route("/api/status/refresh", post(status::refresh_status))
        // Servers
        .route("/api/servers", get(servers::list_servers))
        .route("/api/servers/reload", post(servers::reload_servers))
        // Rankings
        .route("/api/rankings", get(rankings::get_rankings))
        .route("/api/rankings/servers", get(rankings::list_ranking_servers))
}

async fn root() -> &'static str {
    "Game Status Backend API"
}
