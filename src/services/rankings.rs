use anyhow::bail;
use serde::Deserialize;
use std::time::Duration;

use crate::models::ranking::{PlayerRanking, RankingOrder};

const RANKINGS_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct RankingsResponse {
    #[serde(default)]
    rankings: Vec<PlayerRanking>,
}

pub struct RankingService {
    client: reqwest::Client,
    base_url: String,
}

impl RankingService {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    // Fetch the precomputed leaderboard for one server. order is advisory to
    // the stats backend; the returned rows carry their rank and are handed
    // on exactly as received. Nothing in this service ever re-sorts them.
    pub async fn fetch_rankings(
        &self,
        server_ip: &str,
        server_port: u16,
        order: RankingOrder,
        limit: u32,
    ) -> anyhow::Result<Vec<PlayerRanking>> {
        let url = format!(
            "{}/rankings/get-rankings.php?server_ip={}&server_port={}&order_by={}&limit={}",
            self.base_url,
            server_ip,
            server_port,
            order.as_str(),
            limit
        );

        let deadline = Duration::from_secs(RANKINGS_TIMEOUT_SECS);
        match tokio::time::timeout(deadline, self.get_rankings(&url)).await {
            Ok(result) => result,
            Err(_) => bail!("rankings endpoint timed out after {}s", RANKINGS_TIMEOUT_SECS),
        }
    }

    async fn get_rankings(&self, url: &str) -> anyhow::Result<Vec<PlayerRanking>> {
        let resp = self.client.get(url).send().await?;
        if !resp.status().is_success() {
            bail!("rankings endpoint returned HTTP {}", resp.status());
        }
        let body = resp.json::<RankingsResponse>().await?;
        Ok(body.rankings)
    }
}
