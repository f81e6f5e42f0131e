use std::env;
use std::str::FromStr;
use std::time::Duration;

// Runtime settings, read once at startup. Every knob has a default so the
// service boots with an empty environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    // Base URL of the PHP site hosting the server directory
    pub directory_url: String,
    // Base URL of the external game-query service
    pub query_url: String,
    // Base URL of the rankings endpoint (usually the same site as the directory)
    pub rankings_url: String,
    pub poll_interval: Duration,
    // timeOut values forwarded to the query service, in seconds
    pub info_timeout_secs: u64,
    pub players_timeout_secs: u64,
    // Leaderboard size when the request does not specify one
    pub default_ranking_limit: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_or("SERVER_PORT", 3000),
            directory_url: env::var("DIRECTORY_URL")
                .unwrap_or_else(|_| "http://127.0.0.1/api".to_string()),
            query_url: env::var("QUERY_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string()),
            rankings_url: env::var("RANKINGS_URL")
                .unwrap_or_else(|_| "http://127.0.0.1/api".to_string()),
            poll_interval: Duration::from_secs(parse_or("POLL_INTERVAL_SECS", 30)),
            info_timeout_secs: parse_or("INFO_TIMEOUT_SECS", 8),
            players_timeout_secs: parse_or("PLAYERS_TIMEOUT_SECS", 12),
            default_ranking_limit: parse_or("RANKING_LIMIT", 100),
        }
    }
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
