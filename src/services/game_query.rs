use anyhow::bail;
use std::time::Duration;

use crate::models::server::{PlayerEntry, ServerInfo};

// Slack on top of the timeOut we forward, so a wedged query service cannot
// stall a poll cycle past its own advertised deadline
const REQUEST_GRACE_SECS: u64 = 3;

// Client for the external game-query service. Info and player lookups are
// fully independent: separate requests, separate timeouts, separate failure
// handling. The caller runs them concurrently and decides how each failure
// degrades.
pub struct GameQueryService {
    client: reqwest::Client,
    base_url: String,
    info_timeout_secs: u64,
    players_timeout_secs: u64,
}

impl GameQueryService {
    pub fn new(base_url: String, info_timeout_secs: u64, players_timeout_secs: u64) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            info_timeout_secs,
            players_timeout_secs,
        }
    }

    pub async fn fetch_info(&self, ip: &str, port: u16) -> anyhow::Result<ServerInfo> {
        let url = format!(
            "{}/server-info?ip={}&port={}&timeOut={}",
            self.base_url, ip, port, self.info_timeout_secs
        );

        let deadline = Duration::from_secs(self.info_timeout_secs + REQUEST_GRACE_SECS);
        match tokio::time::timeout(deadline, self.get_info(&url)).await {
            Ok(result) => result,
            Err(_) => bail!(
                "server info query timed out after {}s",
                deadline.as_secs()
            ),
        }
    }

    async fn get_info(&self, url: &str) -> anyhow::Result<ServerInfo> {
        let resp = self.client.get(url).send().await?;
        if !resp.status().is_success() {
            bail!("query service returned HTTP {}", resp.status());
        }
        let info = resp.json::<ServerInfo>().await?;
        Ok(info)
    }

    pub async fn fetch_players(&self, ip: &str, port: u16) -> anyhow::Result<Vec<PlayerEntry>> {
        let url = format!(
            "{}/players?ip={}&port={}&timeOut={}",
            self.base_url, ip, port, self.players_timeout_secs
        );

        let deadline = Duration::from_secs(self.players_timeout_secs + REQUEST_GRACE_SECS);
        match tokio::time::timeout(deadline, self.get_players(&url)).await {
            Ok(result) => result,
            Err(_) => bail!(
                "player list query timed out after {}s",
                deadline.as_secs()
            ),
        }
    }

    async fn get_players(&self, url: &str) -> anyhow::Result<Vec<PlayerEntry>> {
        let resp = self.client.get(url).send().await?;
        if !resp.status().is_success() {
            bail!("query service returned HTTP {}", resp.status());
        }
        let players = resp.json::<Vec<PlayerEntry>>().await?;
        Ok(players)
    }
}
