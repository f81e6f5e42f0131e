use tokio::sync::{Mutex, RwLock};

pub mod bg_task;
pub mod config;
pub mod handlers;
pub mod models;
pub mod services;

use config::Config;
use models::server::{ServerConfig, StatusSnapshot};
use services::directory::DirectoryService;
use services::game_query::GameQueryService;
use services::rankings::RankingService;

// Outcome of the latest directory load. Swapped whole on reload; the poll
// cycle copies it into each published snapshot.
#[derive(Debug, Default)]
pub struct ConfigState {
    pub servers: Vec<ServerConfig>,
    pub error: Option<String>,
}

impl ConfigState {
    pub fn loaded(servers: Vec<ServerConfig>) -> Self {
        Self {
            servers,
            error: None,
        }
    }

    pub fn failed(error: String) -> Self {
        Self {
            servers: Vec::new(),
            error: Some(error),
        }
    }
}

// Application State
pub struct AppState {
    pub config: Config,
    pub directory: DirectoryService,
    pub game_query: GameQueryService,
    pub rankings: RankingService,
    // Current polling set; replaced whole on directory reload
    pub configs: RwLock<ConfigState>,
    // Latest published snapshot; replaced whole per poll cycle
    pub status: RwLock<StatusSnapshot>,
    // Single in-flight guard shared by the timer and manual refreshes
    pub refresh_gate: Mutex<()>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            directory: DirectoryService::new(config.directory_url.clone()),
            game_query: GameQueryService::new(
                config.query_url.clone(),
                config.info_timeout_secs,
                config.players_timeout_secs,
            ),
            rankings: RankingService::new(config.rankings_url.clone()),
            configs: RwLock::new(ConfigState::default()),
            status: RwLock::new(StatusSnapshot::initial(None)),
            refresh_gate: Mutex::new(()),
            config,
        }
    }
}
