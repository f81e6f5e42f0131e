use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// One leaderboard row as computed by the stats backend. rank is assigned
// upstream for the requested ordering; rows must be displayed in received
// order so the rank number stays attached to its row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRanking {
    pub rank: i32,
    pub player_name: String,
    pub server_ip: String,
    pub server_port: u16,
    #[serde(default)]
    pub total_kills: i64,
    #[serde(default)]
    pub total_deaths: i64,
    #[serde(default)]
    pub total_score: i64,
    #[serde(default)]
    pub kd_ratio: f64,
    #[serde(default)]
    pub games_played: i32,
    // Formatted by the stats backend, passed through untouched
    #[serde(default)]
    pub last_seen: Option<String>,
}

// Ordering key understood by the rankings endpoint. Advisory only: whatever
// order comes back is what gets displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RankingOrder {
    KdRatio,
    TotalKills,
    TotalScore,
}

impl RankingOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankingOrder::KdRatio => "kd_ratio",
            RankingOrder::TotalKills => "total_kills",
            RankingOrder::TotalScore => "total_score",
        }
    }
}

impl Default for RankingOrder {
    fn default() -> Self {
        RankingOrder::KdRatio
    }
}

impl std::fmt::Display for RankingOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_key_matches_wire_name() {
        assert_eq!(RankingOrder::KdRatio.as_str(), "kd_ratio");
        assert_eq!(RankingOrder::TotalKills.as_str(), "total_kills");
        assert_eq!(RankingOrder::TotalScore.as_str(), "total_score");
    }

    #[test]
    fn order_key_deserializes_from_query_values() {
        let parsed: RankingOrder = serde_json::from_str("\"total_kills\"").unwrap();
        assert_eq!(parsed, RankingOrder::TotalKills);
        assert!(serde_json::from_str::<RankingOrder>("\"alphabetical\"").is_err());
    }

    #[test]
    fn ranking_row_parses_backend_payload() {
        let raw = r#"{
            "rank": 1,
            "playerName": "reaper",
            "serverIp": "1.2.3.4",
            "serverPort": 7777,
            "totalKills": 912,
            "totalDeaths": 304,
            "totalScore": 15210,
            "kdRatio": 3.0,
            "gamesPlayed": 87,
            "lastSeen": "2024-06-01 19:42:00"
        }"#;
        let row: PlayerRanking = serde_json::from_str(raw).unwrap();
        assert_eq!(row.rank, 1);
        assert_eq!(row.player_name, "reaper");
        assert_eq!(row.kd_ratio, 3.0);
        assert_eq!(row.last_seen.as_deref(), Some("2024-06-01 19:42:00"));
    }
}
