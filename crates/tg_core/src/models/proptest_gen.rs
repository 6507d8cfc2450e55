//! Property-based test generators for roster and request types.
//!
//! These strategies feed the generation properties (partition, bounds,
//! captain membership) without hand-writing pools for every case.

use proptest::prelude::*;

use super::{BalanceMethod, MatchFormat, Player, PlayerId, PlayerStats, Position};

pub fn position_strategy() -> impl Strategy<Value = Position> {
    prop_oneof![
        Just(Position::Goalkeeper),
        Just(Position::Defender),
        Just(Position::Midfielder),
        Just(Position::Forward),
    ]
}

pub fn balance_method_strategy() -> impl Strategy<Value = BalanceMethod> {
    prop_oneof![Just(BalanceMethod::Skill), Just(BalanceMethod::Position), Just(BalanceMethod::Mixed),]
}

pub fn format_strategy() -> impl Strategy<Value = MatchFormat> {
    prop_oneof![
        Just(MatchFormat::FiveASide),
        Just(MatchFormat::SevenASide),
        Just(MatchFormat::ElevenASide),
    ]
}

pub fn stats_strategy() -> impl Strategy<Value = PlayerStats> {
    (
        1u8..=5,                          // skill_rating
        0u32..60,                         // goals
        0u32..60,                         // assists
        0u32..30,                         // clean_sheets
        0u32..200,                        // tackles
        0u32..200,                        // saves
        0u32..150,                        // games_played
        0u32..40,                         // team_wins
        0u32..40,                         // team_losses
        0u32..40,                         // team_draws
        prop::option::of(1u8..=5),        // form_rating
        prop::option::of(1u8..=5),        // position_rating
    )
        .prop_map(
            |(
                skill_rating,
                goals,
                assists,
                clean_sheets,
                tackles,
                saves,
                games_played,
                team_wins,
                team_losses,
                team_draws,
                form_rating,
                position_rating,
            )| {
                PlayerStats {
                    skill_rating,
                    goals,
                    assists,
                    clean_sheets,
                    tackles,
                    saves,
                    games_played,
                    team_wins,
                    team_losses,
                    team_draws,
                    form_rating,
                    position_rating,
                }
            },
        )
}

pub fn player_strategy(id: PlayerId) -> impl Strategy<Value = Player> {
    (position_strategy(), stats_strategy()).prop_map(move |(position, stats)| Player {
        id,
        name: format!("Player {}", id),
        position,
        stats,
    })
}

/// A pool of `count` players with distinct, consecutive ids starting at 1.
pub fn squad_strategy(count: usize) -> impl Strategy<Value = Vec<Player>> {
    (1..=count as PlayerId).map(player_strategy).collect::<Vec<_>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    proptest! {
        #[test]
        fn generated_stats_pass_boundary_validation(stats in stats_strategy()) {
            prop_assert!(stats.validate().is_ok());
        }

        #[test]
        fn squads_have_distinct_ids(players in squad_strategy(14)) {
            let ids: HashSet<_> = players.iter().map(|p| p.id).collect();
            prop_assert_eq!(ids.len(), players.len());
        }

        #[test]
        fn players_round_trip_through_json(player in player_strategy(3)) {
            let json = serde_json::to_string(&player).unwrap();
            let back: Player = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(player, back);
        }
    }
}
