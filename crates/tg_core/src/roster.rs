//! In-memory roster store, standing in for real persistence.
//!
//! The generation core only ever sees the [`PlayerResolver`] seam; the store
//! behind it also records match outcomes so later history-aware runs observe
//! updated counters. Callers hold an explicit store handle, nothing is
//! global.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::{GenerationError, Result};
use crate::models::{Player, PlayerId};

/// Resolves selected ids to full player records.
pub trait PlayerResolver {
    /// Players for `ids`, in the order requested. Every unknown id is
    /// collected into the error rather than failing on the first.
    fn resolve(&self, ids: &[PlayerId]) -> Result<Vec<Player>>;
}

/// Outcome of one match, applied to every player on the relevant side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOutcome {
    Win,
    Loss,
    Draw,
}

impl FromStr for MatchOutcome {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "win" => Ok(MatchOutcome::Win),
            "loss" => Ok(MatchOutcome::Loss),
            "draw" => Ok(MatchOutcome::Draw),
            _ => Err(format!("Invalid match outcome: {}", s)),
        }
    }
}

/// Player store keyed by id, ordered so `player_ids` is stable.
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    players: BTreeMap<PlayerId, Player>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_players(players: Vec<Player>) -> Result<Self> {
        let mut store = Self::new();
        for player in players {
            store.insert(player)?;
        }
        Ok(store)
    }

    /// Add or replace a player. Stats are validated here, at the boundary;
    /// the generation core relies on every stored record being well-formed.
    pub fn insert(&mut self, player: Player) -> Result<()> {
        player
            .stats
            .validate()
            .map_err(|reason| GenerationError::InvalidPlayer { id: player.id, reason })?;
        self.players.insert(player.id, player);
        Ok(())
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    pub fn remove(&mut self, id: PlayerId) -> Option<Player> {
        self.players.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// All ids currently in the roster, ascending.
    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.keys().copied().collect()
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub fn into_players(self) -> Vec<Player> {
        self.players.into_values().collect()
    }

    /// Record one match outcome against every listed player, bumping the
    /// matching history counter and `games_played`. Nothing is written unless
    /// all ids resolve.
    pub fn record_result(&mut self, ids: &[PlayerId], outcome: MatchOutcome) -> Result<()> {
        let missing: Vec<PlayerId> =
            ids.iter().copied().filter(|id| !self.players.contains_key(id)).collect();
        if !missing.is_empty() {
            return Err(GenerationError::PlayerNotFound { missing });
        }
        for id in ids {
            if let Some(player) = self.players.get_mut(id) {
                match outcome {
                    MatchOutcome::Win => player.stats.team_wins += 1,
                    MatchOutcome::Loss => player.stats.team_losses += 1,
                    MatchOutcome::Draw => player.stats.team_draws += 1,
                }
                player.stats.games_played += 1;
            }
        }
        Ok(())
    }
}

impl PlayerResolver for RosterStore {
    fn resolve(&self, ids: &[PlayerId]) -> Result<Vec<Player>> {
        let mut resolved = Vec::with_capacity(ids.len());
        let mut missing = Vec::new();
        for id in ids {
            match self.players.get(id) {
                Some(player) => resolved.push(player.clone()),
                None => missing.push(*id),
            }
        }
        if missing.is_empty() {
            Ok(resolved)
        } else {
            Err(GenerationError::PlayerNotFound { missing })
        }
    }
}
