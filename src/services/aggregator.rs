use chrono::Utc;
use futures::future::join_all;

use crate::models::server::{
    PlayerEntry, PlayerList, ServerConfig, ServerInfo, ServerWithStatus, StatusSnapshot,
};
use crate::services::game_query::GameQueryService;
use crate::AppState;

// Query every configured server concurrently and merge the results into one
// batch. Output order always equals config order, one record per config. A
// failure on one server only ever touches that server's record; the batch
// itself cannot fail.
pub async fn refresh_all(
    query: &GameQueryService,
    configs: &[ServerConfig],
) -> Vec<ServerWithStatus> {
    let lookups = configs.iter().map(|config| async move {
        // Info and player list for one server are independent requests with
        // independent failure handling, issued at the same time.
        let (info, players) = tokio::join!(
            query.fetch_info(&config.ip, config.port),
            query.fetch_players(&config.ip, config.port),
        );
        assemble(config, info, players)
    });

    join_all(lookups).await
}

// Fold one server's pair of fetch results into its status record. An info
// failure becomes the record's error; a player-list failure degrades to an
// unavailable roster and is never an error, since the server info alone is
// still worth showing.
fn assemble(
    config: &ServerConfig,
    info: anyhow::Result<ServerInfo>,
    players: anyhow::Result<Vec<PlayerEntry>>,
) -> ServerWithStatus {
    let (info, error) = match info {
        Ok(info) => (Some(info), None),
        Err(e) => {
            tracing::warn!("Info query failed for {}:{}: {}", config.ip, config.port, e);
            (None, Some(e.to_string()))
        }
    };

    let players = match players {
        Ok(players) => PlayerList::Online(players),
        Err(e) => {
            tracing::warn!(
                "Player list unavailable for {}:{}: {}",
                config.ip,
                config.port,
                e
            );
            PlayerList::Unavailable
        }
    };

    ServerWithStatus {
        ip: config.ip.clone(),
        port: config.port,
        name: config.name.clone(),
        info,
        players,
        error,
    }
}

// One guarded poll cycle: snapshot the config list, query everything, and
// publish a brand-new StatusSnapshot. The previous snapshot is replaced
// whole, never patched, and lastUpdate is stamped only after every
// per-server pair has settled. Returns false when another cycle already
// holds the gate (skip-if-busy; the next tick or manual refresh retries).
pub async fn refresh_snapshot(state: &AppState) -> bool {
    let _guard = match state.refresh_gate.try_lock() {
        Ok(guard) => guard,
        Err(_) => {
            tracing::debug!("Refresh already in flight, skipping");
            return false;
        }
    };

    let (configs, config_error) = {
        let current = state.configs.read().await;
        (current.servers.clone(), current.error.clone())
    };

    let servers = refresh_all(&state.game_query, &configs).await;

    let mut status = state.status.write().await;
    *status = StatusSnapshot {
        loading: false,
        servers,
        last_update: Some(Utc::now()),
        config_error,
    };
    true
}
