//! Per-player numbers the balancer compares between teams.

use crate::models::Player;

/// Skill-style ratings run 1..=5 while win rate is already a percentage.
/// Scaling the ratings by 20 puts every metric on one 0..=100 scale, so a
/// single gap threshold works for all of them.
const RATING_SCALE: f32 = 20.0;

/// Snapshot of one player's balance-relevant numbers, with the optional
/// ratings already resolved to their fallbacks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerMetrics {
    pub skill_rating: u8,
    pub form_rating: u8,
    pub position_strength: u8,
    pub win_rate: f32,
}

impl PlayerMetrics {
    pub fn of(player: &Player) -> Self {
        Self {
            skill_rating: player.stats.skill_rating,
            form_rating: player.form_rating(),
            position_strength: player.position_strength(),
            win_rate: player.win_rate(),
        }
    }
}

/// Which number a rebalancing pass compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BalanceMetric {
    Skill,
    PositionStrength,
    WinRate,
}

impl BalanceMetric {
    /// Metric value for one player on the shared 0..=100 scale.
    pub(crate) fn value(&self, player: &Player) -> f32 {
        let metrics = PlayerMetrics::of(player);
        match self {
            BalanceMetric::Skill => metrics.skill_rating as f32 * RATING_SCALE,
            BalanceMetric::PositionStrength => metrics.position_strength as f32 * RATING_SCALE,
            BalanceMetric::WinRate => metrics.win_rate,
        }
    }
}

/// Mean metric value across a team's members; zero for an empty team.
pub(crate) fn team_mean(metric: BalanceMetric, players: &[Player]) -> f32 {
    if players.is_empty() {
        return 0.0;
    }
    players.iter().map(|p| metric.value(p)).sum::<f32>() / players.len() as f32
}
