use serde::{Deserialize, Serialize};

use crate::models::{Player, Position};

/// Names handed out to generated teams in order. The pool covers the maximum
/// team count; anything beyond it falls back to a numbered label.
pub const TEAM_NAME_POOL: [&str; 4] = ["Red Dragons", "Blue Sharks", "Green Rovers", "Gold Eagles"];

/// Name for the team at `index`, drawn from [`TEAM_NAME_POOL`].
pub fn team_name(index: usize) -> String {
    match TEAM_NAME_POOL.get(index) {
        Some(name) => (*name).to_string(),
        None => format!("Team {}", index + 1),
    }
}

/// One side produced by the generator. Every input player lands in exactly
/// one team's `players` list; the aggregate fields are derived from that list
/// and refreshed whenever it changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedTeam {
    pub name: String,
    pub players: Vec<Player>,
    /// Present only when the request ran in competition mode; always a member
    /// of this team's `players`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captain: Option<Player>,
    /// Sum of member skill ratings.
    pub total_skill: u32,
    /// 0..=100 score for how closely the position mix matches the ideal.
    pub position_balance: f32,
    /// Mean member win rate, on the 0..=100 scale.
    pub average_win_rate: f32,
}

impl GeneratedTeam {
    pub fn new(name: String) -> Self {
        Self {
            name,
            players: Vec::new(),
            captain: None,
            total_skill: 0,
            position_balance: 0.0,
            average_win_rate: 0.0,
        }
    }

    pub fn size(&self) -> usize {
        self.players.len()
    }

    /// Members currently playing `position`.
    pub fn position_count(&self, position: Position) -> usize {
        self.players.iter().filter(|p| p.position == position).count()
    }

    /// Mean member skill rating on the raw 1..=5 scale.
    pub fn average_skill(&self) -> f32 {
        if self.players.is_empty() {
            return 0.0;
        }
        self.total_skill as f32 / self.players.len() as f32
    }

    /// Recompute all derived fields from the current member list. Must be
    /// called after any change to `players`.
    pub fn refresh_metrics(&mut self) {
        self.total_skill = self.players.iter().map(|p| p.stats.skill_rating as u32).sum();
        self.average_win_rate = if self.players.is_empty() {
            0.0
        } else {
            self.players.iter().map(Player::win_rate).sum::<f32>() / self.players.len() as f32
        };
        self.position_balance = self.compute_position_balance();
    }

    /// Start from a perfect 100 and subtract the absolute deviation from the
    /// ideal share for each position, scaled to percentage points.
    fn compute_position_balance(&self) -> f32 {
        if self.players.is_empty() {
            return 0.0;
        }
        let size = self.players.len() as f32;
        let mut score = 100.0;
        for position in Position::ALL {
            let actual = self.position_count(position) as f32 / size;
            score -= 100.0 * (position.ideal_share() - actual).abs();
        }
        score.clamp(0.0, 100.0)
    }
}
