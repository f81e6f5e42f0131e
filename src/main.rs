use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use game_status_backend::bg_task::StatusPoller;
use game_status_backend::config::Config;
use game_status_backend::{handlers, AppState, ConfigState};

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    let addr = format!("{}:{}", config.host, config.port)
        .parse::<SocketAddr>()
        .expect("Invalid address");

    let state = Arc::new(AppState::new(config));

    // The directory is consulted once at startup; after that only the manual
    // reload endpoint touches the polling set.
    match state.directory.load_configs(false).await {
        Ok(servers) => {
            tracing::info!("Loaded {} servers from directory", servers.len());
            *state.configs.write().await = ConfigState::loaded(servers);
        }
        Err(e) => {
            tracing::error!("Failed to load server directory: {}", e);
            *state.configs.write().await = ConfigState::failed(e.to_string());
        }
    }

    // Polling task, started before the listener so the first snapshot is
    // usually ready by the time requests arrive
    let _poller = StatusPoller::start(state.clone());

    let app = handlers::routes()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
