use anyhow::bail;
use serde::Deserialize;
use std::time::Duration;

use crate::models::server::ServerConfig;

// The directory is a same-site script and should answer quickly
const DIRECTORY_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct DirectoryResponse {
    success: bool,
    #[serde(default)]
    servers: Vec<ServerConfig>,
}

pub struct DirectoryService {
    client: reqwest::Client,
    base_url: String,
}

impl DirectoryService {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    // Fetch the configured server list. ranking_only narrows the result to
    // servers that feed the aggregate leaderboard. No side effects, safe to
    // call repeatedly; the caller decides what a failure means.
    pub async fn load_configs(&self, ranking_only: bool) -> anyhow::Result<Vec<ServerConfig>> {
        let url = if ranking_only {
            format!("{}/servers/get-all.php?ranking_only=true", self.base_url)
        } else {
            format!("{}/servers/get-all.php", self.base_url)
        };

        let deadline = Duration::from_secs(DIRECTORY_TIMEOUT_SECS);
        match tokio::time::timeout(deadline, self.get_list(&url)).await {
            Ok(result) => result,
            Err(_) => bail!("server directory timed out after {}s", DIRECTORY_TIMEOUT_SECS),
        }
    }

    async fn get_list(&self, url: &str) -> anyhow::Result<Vec<ServerConfig>> {
        let resp = self.client.get(url).send().await?;
        if !resp.status().is_success() {
            bail!("server directory returned HTTP {}", resp.status());
        }

        let body = resp.json::<DirectoryResponse>().await?;
        if !body.success {
            bail!("server directory reported failure");
        }
        Ok(body.servers)
    }
}
