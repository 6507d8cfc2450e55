use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

use crate::error::{GenerationError, Result};
use crate::models::PlayerId;

/// Fewest teams a pool may be split into.
pub const MIN_TEAMS: usize = 2;
/// Most teams a pool may be split into.
pub const MAX_TEAMS: usize = 4;

/// Match format the generated teams will play. The format sets the minimum
/// pool size; the generator otherwise distributes whatever pool it is given.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MatchFormat {
    #[serde(rename = "5-a-side")]
    FiveASide,
    #[serde(rename = "7-a-side")]
    SevenASide,
    #[serde(rename = "11-a-side")]
    ElevenASide,
}

impl MatchFormat {
    pub fn players_per_side(&self) -> usize {
        match self {
            MatchFormat::FiveASide => 5,
            MatchFormat::SevenASide => 7,
            MatchFormat::ElevenASide => 11,
        }
    }

    /// Canonical format code string (e.g., "7-a-side").
    pub fn code(&self) -> &'static str {
        match self {
            MatchFormat::FiveASide => "5-a-side",
            MatchFormat::SevenASide => "7-a-side",
            MatchFormat::ElevenASide => "11-a-side",
        }
    }
}

impl FromStr for MatchFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "5-a-side" | "5" => Ok(MatchFormat::FiveASide),
            "7-a-side" | "7" => Ok(MatchFormat::SevenASide),
            "11-a-side" | "11" => Ok(MatchFormat::ElevenASide),
            _ => Err(format!("Invalid match format: {}", s)),
        }
    }
}

/// Strategy for the initial split, before the rebalancing pass runs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BalanceMethod {
    /// Snake-draft the whole pool by skill.
    Skill,
    /// Fill positions evenly, shuffling within each position group.
    Position,
    /// Snake-draft by skill within each position group.
    #[default]
    Mixed,
}

impl FromStr for BalanceMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "skill" => Ok(BalanceMethod::Skill),
            "position" => Ok(BalanceMethod::Position),
            "mixed" => Ok(BalanceMethod::Mixed),
            _ => Err(format!("Invalid balance method: {}", s)),
        }
    }
}

/// Everything the generator needs to split one pool of players.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamGenerationRequest {
    pub format: MatchFormat,
    /// Players to partition. Must be non-empty and free of duplicates;
    /// duplicate selection is a caller mistake and is rejected, not deduped.
    pub player_ids: Vec<PlayerId>,
    #[serde(default)]
    pub balance_method: BalanceMethod,
    /// Number of teams, [`MIN_TEAMS`]..=[`MAX_TEAMS`].
    pub teams_count: usize,
    /// Feed win/loss history into rebalancing and post-assignment swaps.
    #[serde(default)]
    pub consider_history: bool,
    /// Competition mode assigns a captain to every team.
    #[serde(default)]
    pub competition_mode: bool,
}

impl TeamGenerationRequest {
    /// Configuration checks that need no player data. Runs before any
    /// resolution or distribution work.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_TEAMS..=MAX_TEAMS).contains(&self.teams_count) {
            return Err(GenerationError::InvalidConfig(format!(
                "teams_count must be between {} and {}, got {}",
                MIN_TEAMS, MAX_TEAMS, self.teams_count
            )));
        }
        if self.player_ids.is_empty() {
            return Err(GenerationError::InvalidConfig("player_ids must not be empty".to_string()));
        }
        let mut seen = HashSet::with_capacity(self.player_ids.len());
        for id in &self.player_ids {
            if !seen.insert(id) {
                return Err(GenerationError::InvalidConfig(format!("duplicate player id: {}", id)));
            }
        }
        Ok(())
    }

    /// Smallest pool that can field `teams_count` sides in this format.
    pub fn min_players(&self) -> usize {
        self.teams_count * self.format.players_per_side()
    }
}
