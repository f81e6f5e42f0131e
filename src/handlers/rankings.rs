use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::models::ranking::{PlayerRanking, RankingOrder};
use crate::models::server::ServerConfig;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RankingsQuery {
    pub server_ip: String,
    pub server_port: u16,
    pub order_by: Option<RankingOrder>,
    pub limit: Option<u32>,
}

// Leaderboard passthrough for one server. Row order comes from the stats
// backend and is preserved exactly as received; the rank column is
// authoritative and must stay attached to its row. Upstream failures degrade
// to an empty list so the page shows its "no ranking data" state instead of
// an error banner.
#[utoipa::path(
    get,
    path = "/api/rankings",
    params(
        ("server_ip" = String, Query, description = "Server IP"),
        ("server_port" = u16, Query, description = "Server port"),
        ("order_by" = Option<String>, Query, description = "kd_ratio | total_kills | total_score"),
        ("limit" = Option<u32>, Query, description = "Maximum number of rows")
    ),
    responses(
        (status = 200, description = "Leaderboard rows in backend order", body = Vec<PlayerRanking>)
    )
)]
pub async fn get_rankings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RankingsQuery>,
) -> impl IntoResponse {
    let order = params.order_by.unwrap_or_default();
    let limit = params.limit.unwrap_or(state.config.default_ranking_limit);

    let rankings = state
        .rankings
        .fetch_rankings(&params.server_ip, params.server_port, order, limit)
        .await
        .unwrap_or_else(|e| {
            tracing::error!(
                "Failed to fetch rankings for {}:{}: {}",
                params.server_ip,
                params.server_port,
                e
            );
            vec![]
        });

    Json(rankings)
}

// Servers eligible for the leaderboard view, straight from the directory
#[utoipa::path(
    get,
    path = "/api/rankings/servers",
    responses(
        (status = 200, description = "Ranking-eligible servers", body = Vec<ServerConfig>),
        (status = 502, description = "Directory unreachable")
    )
)]
pub async fn list_ranking_servers(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.directory.load_configs(true).await {
        Ok(servers) => (StatusCode::OK, Json(servers)).into_response(),
        Err(e) => {
            tracing::error!("Failed to load ranking servers: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": "Failed to load server list" })),
            )
                .into_response()
        }
    }
}
