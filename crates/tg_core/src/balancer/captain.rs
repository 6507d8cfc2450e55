//! Captain selection for competition-mode teams.

use crate::models::Player;

const GAMES_WEIGHT: f32 = 0.4;
const FORM_WEIGHT: f32 = 0.3;
const SKILL_WEIGHT: f32 = 0.3;

/// Weighted leadership score: experience carries the most weight, current
/// form and raw skill share the rest.
fn leadership_score(player: &Player) -> f32 {
    GAMES_WEIGHT * player.stats.games_played as f32
        + FORM_WEIGHT * player.form_rating() as f32
        + SKILL_WEIGHT * player.stats.skill_rating as f32
}

/// The member with the highest leadership score; ties resolve to the first
/// player encountered. `None` only for an empty member list.
pub(crate) fn select(players: &[Player]) -> Option<Player> {
    let mut best: Option<(f32, &Player)> = None;
    for player in players {
        let score = leadership_score(player);
        let beats = match &best {
            Some((current, _)) => score > *current,
            None => true,
        };
        if beats {
            best = Some((score, player));
        }
    }
    best.map(|(_, player)| player.clone())
}
