//! String-in, string-out team generation.
//!
//! The document carries its own player pool, so a host application can call
//! this without sharing any Rust types: parse, validate, generate, serialize.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::balancer;
use crate::error::{GenerationError, Result};
use crate::models::{
    BalanceMethod, GeneratedTeam, MatchFormat, Player, PlayerStats, TeamGenerationRequest,
};
use crate::roster::RosterStore;
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct GenerateTeamsRequest {
    pub schema_version: u8,
    /// Fixed seed for reproducible output; drawn fresh when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Match format code, e.g. "7-a-side".
    pub format: String,
    /// "skill", "position" or "mixed".
    #[serde(default = "default_balance_method")]
    pub balance_method: String,
    pub teams_count: usize,
    #[serde(default)]
    pub consider_history: bool,
    #[serde(default)]
    pub competition_mode: bool,
    /// Ids to partition, resolved against `players`.
    pub player_ids: Vec<u32>,
    /// The player pool the ids refer to.
    pub players: Vec<PlayerData>,
}

fn default_balance_method() -> String {
    "mixed".to_string()
}

#[derive(Debug, Deserialize)]
pub struct PlayerData {
    pub id: u32,
    pub name: String,
    /// Position name or code ("Goalkeeper", "GK", ...).
    pub position: String,
    #[serde(default)]
    pub stats: PlayerStats,
}

#[derive(Debug, Serialize)]
pub struct GenerateTeamsResponse {
    pub schema_version: u8,
    /// Seed the run actually used; replaying it reproduces these teams.
    pub seed: u64,
    pub teams: Vec<GeneratedTeam>,
}

/// Parse a [`GenerateTeamsRequest`] document, run generation and serialize
/// the response. Every failure surfaces as a [`GenerationError`]; nothing
/// partial is ever returned.
pub fn generate_teams_json(request_json: &str) -> Result<String> {
    let request: GenerateTeamsRequest = serde_json::from_str(request_json).map_err(|e| {
        error!("Failed to parse GenerateTeamsRequest: {}", e);
        GenerationError::Deserialization(e.to_string())
    })?;

    if request.schema_version != SCHEMA_VERSION {
        warn!("Rejected request with schema_version {}", request.schema_version);
        return Err(GenerationError::InvalidConfig(format!(
            "unsupported schema_version {}, expected {}",
            request.schema_version, SCHEMA_VERSION
        )));
    }

    // The typed core makes unknown formats and methods unrepresentable, so
    // the string boundary is where they get reported.
    let format: MatchFormat = request.format.parse().map_err(GenerationError::InvalidConfig)?;
    let balance_method: BalanceMethod =
        request.balance_method.parse().map_err(GenerationError::InvalidConfig)?;

    let mut pool = Vec::with_capacity(request.players.len());
    for data in &request.players {
        let position = data
            .position
            .parse()
            .map_err(|reason| GenerationError::InvalidPlayer { id: data.id, reason })?;
        pool.push(Player {
            id: data.id,
            name: data.name.clone(),
            position,
            stats: data.stats.clone(),
        });
    }
    let store = RosterStore::with_players(pool)?;

    let typed = TeamGenerationRequest {
        format,
        player_ids: request.player_ids,
        balance_method,
        teams_count: request.teams_count,
        consider_history: request.consider_history,
        competition_mode: request.competition_mode,
    };

    let seed = request.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!(
        "Generating {} teams from {} selected players (seed {})",
        typed.teams_count,
        typed.player_ids.len(),
        seed
    );

    let teams = balancer::generate_teams_seeded(&typed, &store, seed).map_err(|e| {
        warn!("Team generation rejected: {}", e);
        e
    })?;
    info!("Generated {} teams", teams.len());

    let response = GenerateTeamsResponse { schema_version: SCHEMA_VERSION, seed, teams };
    serde_json::to_string(&response).map_err(|e| GenerationError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request_document(overrides: impl FnOnce(&mut serde_json::Value)) -> String {
        let positions = ["Goalkeeper", "Defender", "Defender", "Midfielder", "Midfielder",
            "Goalkeeper", "Defender", "Midfielder", "Forward", "Forward"];
        let players: Vec<serde_json::Value> = (1u32..=10)
            .map(|id| {
                json!({
                    "id": id,
                    "name": format!("Player {}", id),
                    "position": positions[(id - 1) as usize],
                    "stats": { "skill_rating": 1 + (id % 5) }
                })
            })
            .collect();
        let mut doc = json!({
            "schema_version": 1,
            "seed": 77,
            "format": "5-a-side",
            "balance_method": "mixed",
            "teams_count": 2,
            "competition_mode": true,
            "player_ids": (1u32..=10).collect::<Vec<_>>(),
            "players": players,
        });
        overrides(&mut doc);
        doc.to_string()
    }

    #[test]
    fn round_trip_produces_the_requested_team_count() {
        let response_json = generate_teams_json(&request_document(|_| {})).unwrap();
        let response: serde_json::Value = serde_json::from_str(&response_json).unwrap();

        assert_eq!(response["schema_version"], 1);
        assert_eq!(response["seed"], 77);
        let teams = response["teams"].as_array().unwrap();
        assert_eq!(teams.len(), 2);
        for team in teams {
            assert!(team["captain"].is_object());
        }
    }

    #[test]
    fn fixed_seed_makes_the_response_reproducible() {
        let doc = request_document(|doc| {
            doc["balance_method"] = json!("position");
        });
        let first = generate_teams_json(&doc).unwrap();
        let second = generate_teams_json(&doc).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn malformed_json_is_a_deserialization_error() {
        match generate_teams_json("{not json") {
            Err(GenerationError::Deserialization(_)) => {}
            other => panic!("expected Deserialization, got {:?}", other),
        }
    }

    #[test]
    fn wrong_schema_version_is_rejected() {
        let doc = request_document(|doc| {
            doc["schema_version"] = json!(9);
        });
        match generate_teams_json(&doc) {
            Err(GenerationError::InvalidConfig(message)) => {
                assert!(message.contains("schema_version"));
            }
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn unknown_method_and_format_are_config_errors() {
        let doc = request_document(|doc| {
            doc["balance_method"] = json!("random");
        });
        assert!(matches!(generate_teams_json(&doc), Err(GenerationError::InvalidConfig(_))));

        let doc = request_document(|doc| {
            doc["format"] = json!("6-a-side");
        });
        assert!(matches!(generate_teams_json(&doc), Err(GenerationError::InvalidConfig(_))));
    }

    #[test]
    fn unknown_position_names_the_player() {
        let doc = request_document(|doc| {
            doc["players"][0]["position"] = json!("Sweeper");
        });
        match generate_teams_json(&doc) {
            Err(GenerationError::InvalidPlayer { id, .. }) => assert_eq!(id, 1),
            other => panic!("expected InvalidPlayer, got {:?}", other),
        }
    }

    #[test]
    fn balance_method_defaults_to_mixed() {
        let doc = request_document(|doc| {
            doc.as_object_mut().unwrap().remove("balance_method");
        });
        assert!(generate_teams_json(&doc).is_ok());
    }
}
