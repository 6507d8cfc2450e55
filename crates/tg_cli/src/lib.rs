//! Roster-file front end for the team generation engine.
//!
//! Loads a roster JSON file, runs generation, renders team sheets, and
//! writes match outcomes back into the roster so later history-aware runs
//! see the updated counters.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use tg_core::{
    generate_teams, generate_teams_seeded, BalanceMethod, GeneratedTeam, MatchFormat,
    MatchOutcome, Player, PlayerId, RosterStore, TeamGenerationRequest, SCHEMA_VERSION,
};

/// On-disk roster document: a schema-tagged list of players.
#[derive(Debug, Serialize, Deserialize)]
pub struct RosterFile {
    pub schema_version: u8,
    /// RFC3339 timestamp of the last write, refreshed on save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    pub players: Vec<Player>,
}

pub fn load_roster(path: &Path) -> Result<RosterFile> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster at '{}'", path.display()))?;
    let roster: RosterFile = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse roster at '{}'", path.display()))?;
    if roster.schema_version != SCHEMA_VERSION {
        bail!(
            "Unsupported roster schema_version {}, expected {}",
            roster.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(roster)
}

pub fn save_roster(path: &Path, roster: &mut RosterFile) -> Result<()> {
    roster.updated_at = Some(chrono::Utc::now().to_rfc3339());
    let json = serde_json::to_string_pretty(roster)?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write roster to '{}'", path.display()))?;
    Ok(())
}

/// Generation settings as they arrive from the command line.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Selected player ids; `None` selects the whole roster.
    pub ids: Option<Vec<PlayerId>>,
    pub format: MatchFormat,
    pub method: BalanceMethod,
    pub teams: usize,
    pub consider_history: bool,
    pub competition: bool,
    pub seed: Option<u64>,
}

pub fn generate_from_roster(
    roster: &RosterFile,
    options: &GenerateOptions,
) -> Result<Vec<GeneratedTeam>> {
    let store = RosterStore::with_players(roster.players.clone())?;
    let player_ids = match &options.ids {
        Some(ids) => ids.clone(),
        None => store.player_ids(),
    };
    let request = TeamGenerationRequest {
        format: options.format,
        player_ids,
        balance_method: options.method,
        teams_count: options.teams,
        consider_history: options.consider_history,
        competition_mode: options.competition,
    };

    let teams = match options.seed {
        Some(seed) => generate_teams_seeded(&request, &store, seed)?,
        None => generate_teams(&request, &store)?,
    };
    info!("Generated {} teams from {} players", teams.len(), request.player_ids.len());
    Ok(teams)
}

/// Apply one match outcome to the listed players. The roster is untouched if
/// any id is unknown.
pub fn record_outcome(
    roster: &mut RosterFile,
    ids: &[PlayerId],
    outcome: MatchOutcome,
) -> Result<()> {
    let mut store = RosterStore::with_players(roster.players.clone())?;
    store.record_result(ids, outcome)?;
    roster.players = store.into_players();
    Ok(())
}

/// Plain-text team sheets for terminal output.
pub fn format_team_sheets(teams: &[GeneratedTeam]) -> String {
    let mut out = String::new();
    for team in teams {
        out.push_str(&format!(
            "{}  (skill {}, position balance {:.0}, win rate {:.0}%)\n",
            team.name, team.total_skill, team.position_balance, team.average_win_rate
        ));
        for player in &team.players {
            let marker = if team.captain.as_ref().is_some_and(|c| c.id == player.id) {
                "  (C)"
            } else {
                ""
            };
            out.push_str(&format!(
                "  {}  {} [skill {}]{}\n",
                player.position.code(),
                player.name,
                player.stats.skill_rating,
                marker
            ));
        }
        out.push('\n');
    }
    out
}
