use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

// One monitored game server as listed by the directory. Identity is (ip, port);
// the list is replaced wholesale whenever the directory is re-fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
    pub name: String,
    #[serde(default)]
    pub ranking_eligible: bool,
}

// Live state of one server as reported by the query service. Field names are
// the query service's camelCase wire names; secondary fields tolerate absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    pub hostname: String,
    #[serde(default)]
    pub map_title: String,
    #[serde(default)]
    pub map_name: String,
    pub num_players: i32,
    pub max_players: i32,
    #[serde(default)]
    pub score_terrorists: i32,
    #[serde(default)]
    pub score_special_forces: i32,
    #[serde(default)]
    pub round_number: i32,
    #[serde(default)]
    pub time_limit: i32,
    #[serde(default)]
    pub password: bool,
    #[serde(default)]
    pub game_ver: Option<String>,
    #[serde(default)]
    pub game_type: Option<String>,
    #[serde(default)]
    pub friendly_fire: Option<bool>,
}

impl ServerInfo {
    /// Occupancy as a fraction in 0.0..=1.0 for progress displays. Clamped:
    /// the query service occasionally reports more players than slots, and
    /// the raw counts are still shown verbatim elsewhere.
    pub fn fill_ratio(&self) -> f32 {
        if self.max_players <= 0 {
            return 0.0;
        }
        let ratio = self.num_players as f32 / self.max_players as f32;
        ratio.clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerEntry {
    pub name: String,
    #[serde(default)]
    pub ping: i32,
    #[serde(default)]
    pub score: i32,
    // 0 and 1 are the two teams, anything else is spectator/unassigned
    #[serde(default)]
    pub team: i32,
    #[serde(default)]
    pub frags: i32,
    #[serde(default)]
    pub deaths: i32,
}

/// Per-server player roster. `Unavailable` (the roster fetch failed while the
/// server itself answered) is kept distinct from an empty roster for logging,
/// but both serialize as a plain array so clients see the same shape either way.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerList {
    Online(Vec<PlayerEntry>),
    Unavailable,
}

impl PlayerList {
    pub fn as_slice(&self) -> &[PlayerEntry] {
        match self {
            PlayerList::Online(players) => players,
            PlayerList::Unavailable => &[],
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, PlayerList::Unavailable)
    }
}

impl Serialize for PlayerList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

impl Default for PlayerList {
    fn default() -> Self {
        PlayerList::Online(Vec::new())
    }
}

// The merge unit: one directory entry plus whatever this poll cycle learned
// about it. info and error are mutually exclusive by construction.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServerWithStatus {
    pub ip: String,
    pub port: u16,
    pub name: String,
    pub info: Option<ServerInfo>,
    #[schema(value_type = Vec<PlayerEntry>)]
    pub players: PlayerList,
    pub error: Option<String>,
}

// The one shared value behind the RwLock. Replaced whole each cycle, never
// mutated in place, so readers always see a consistent batch.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    pub loading: bool,
    pub servers: Vec<ServerWithStatus>,
    pub last_update: Option<DateTime<Utc>>,
    pub config_error: Option<String>,
}

impl StatusSnapshot {
    // State before the first poll cycle completes
    pub fn initial(config_error: Option<String>) -> Self {
        Self {
            loading: true,
            servers: Vec::new(),
            last_update: None,
            config_error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(num_players: i32, max_players: i32) -> ServerInfo {
        ServerInfo {
            hostname: "test".to_string(),
            map_title: String::new(),
            map_name: String::new(),
            num_players,
            max_players,
            score_terrorists: 0,
            score_special_forces: 0,
            round_number: 0,
            time_limit: 0,
            password: false,
            game_ver: None,
            game_type: None,
            friendly_fire: None,
        }
    }

    #[test]
    fn fill_ratio_basic() {
        assert_eq!(info(8, 16).fill_ratio(), 0.5);
        assert_eq!(info(0, 16).fill_ratio(), 0.0);
        assert_eq!(info(16, 16).fill_ratio(), 1.0);
    }

    #[test]
    fn fill_ratio_clamps_overfull_server() {
        // Observed in the wild when spectators are counted into numPlayers
        assert_eq!(info(20, 16).fill_ratio(), 1.0);
    }

    #[test]
    fn fill_ratio_handles_zero_slots() {
        assert_eq!(info(5, 0).fill_ratio(), 0.0);
        assert_eq!(info(5, -1).fill_ratio(), 0.0);
    }

    #[test]
    fn server_info_parses_camel_case_wire_names() {
        let raw = r#"{
            "hostname": "=TIC= 24/7 Crossfire",
            "mapTitle": "Crossfire",
            "mapName": "cf_urban",
            "numPlayers": 5,
            "maxPlayers": 16,
            "scoreTerrorists": 3,
            "scoreSpecialForces": 2,
            "roundNumber": 6,
            "timeLimit": 20,
            "password": false,
            "gameVer": "1.0.3",
            "gameType": "tdm",
            "friendlyFire": true
        }"#;
        let parsed: ServerInfo = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.hostname, "=TIC= 24/7 Crossfire");
        assert_eq!(parsed.num_players, 5);
        assert_eq!(parsed.max_players, 16);
        assert_eq!(parsed.score_special_forces, 2);
        assert_eq!(parsed.friendly_fire, Some(true));
    }

    #[test]
    fn server_info_tolerates_missing_secondary_fields() {
        let raw = r#"{"hostname": "bare", "numPlayers": 0, "maxPlayers": 8}"#;
        let parsed: ServerInfo = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.map_name, "");
        assert_eq!(parsed.score_terrorists, 0);
        assert_eq!(parsed.game_ver, None);
    }

    #[test]
    fn unavailable_players_serialize_as_empty_array() {
        let list = PlayerList::Unavailable;
        assert!(list.is_unavailable());
        assert_eq!(serde_json::to_string(&list).unwrap(), "[]");
    }

    #[test]
    fn online_players_serialize_as_plain_array() {
        let list = PlayerList::Online(vec![PlayerEntry {
            name: "alpha".to_string(),
            ping: 40,
            score: 12,
            team: 0,
            frags: 10,
            deaths: 2,
        }]);
        let json: serde_json::Value = serde_json::to_value(&list).unwrap();
        assert_eq!(json[0]["name"], "alpha");
        assert_eq!(json.as_array().unwrap().len(), 1);
    }

    #[test]
    fn server_config_defaults_ranking_flag() {
        let raw = r#"{"ip": "1.2.3.4", "port": 7777, "name": "A"}"#;
        let parsed: ServerConfig = serde_json::from_str(raw).unwrap();
        assert!(!parsed.ranking_eligible);
    }
}
