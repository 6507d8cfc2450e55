//! History-based cross-team adjustment, run after captains are assigned.

use crate::models::{GeneratedTeam, Player};

use super::captain;

/// A pair of top winners must differ by more than this many recorded wins
/// before they trade places.
const WINS_GAP: u32 = 3;

/// One pass over every unordered pair of teams: when the two teams' top
/// players by raw win count are far apart and share a position, trade them.
/// Swapped teams get their aggregates and captains recomputed so the captain
/// always stays a member of its own team.
pub(crate) fn adjust(teams: &mut [GeneratedTeam]) {
    for i in 0..teams.len() {
        for j in i + 1..teams.len() {
            let Some(a) = top_winner(&teams[i].players) else { continue };
            let Some(b) = top_winner(&teams[j].players) else { continue };

            let wins_a = teams[i].players[a].stats.team_wins;
            let wins_b = teams[j].players[b].stats.team_wins;
            if wins_a.abs_diff(wins_b) <= WINS_GAP {
                continue;
            }
            if teams[i].players[a].position != teams[j].players[b].position {
                continue;
            }

            let traded = teams[i].players[a].clone();
            teams[i].players[a] = teams[j].players[b].clone();
            teams[j].players[b] = traded;

            for team in [i, j] {
                teams[team].refresh_metrics();
                teams[team].captain = captain::select(&teams[team].players);
            }
        }
    }
}

/// Index of the first member with the most recorded team wins.
fn top_winner(players: &[Player]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, player) in players.iter().enumerate() {
        let better = match best {
            Some(b) => player.stats.team_wins > players[b].stats.team_wins,
            None => true,
        };
        if better {
            best = Some(i);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{team_name, PlayerStats, Position};

    fn player(id: u32, position: Position, wins: u32) -> Player {
        Player {
            id,
            name: format!("Player {}", id),
            position,
            stats: PlayerStats {
                team_wins: wins,
                team_losses: wins, // keep win rates level so only raw wins differ
                ..PlayerStats::default()
            },
        }
    }

    fn team(index: usize, players: Vec<Player>) -> GeneratedTeam {
        let mut team = GeneratedTeam::new(team_name(index));
        team.players = players;
        team.refresh_metrics();
        team.captain = captain::select(&team.players);
        team
    }

    #[test]
    fn distant_top_winners_trade_places() {
        let mut teams = vec![
            team(0, vec![player(1, Position::Midfielder, 20), player(2, Position::Midfielder, 1)]),
            team(1, vec![player(3, Position::Midfielder, 2), player(4, Position::Midfielder, 1)]),
        ];
        adjust(&mut teams);

        let first: Vec<u32> = teams[0].players.iter().map(|p| p.id).collect();
        let second: Vec<u32> = teams[1].players.iter().map(|p| p.id).collect();
        assert_eq!(first, vec![3, 2]);
        assert_eq!(second, vec![1, 4]);

        for team in &teams {
            let captain = team.captain.as_ref().unwrap();
            assert!(team.players.iter().any(|p| p.id == captain.id));
        }
    }

    #[test]
    fn close_win_counts_are_left_alone() {
        let mut teams = vec![
            team(0, vec![player(1, Position::Midfielder, 5)]),
            team(1, vec![player(2, Position::Midfielder, 3)]),
        ];
        adjust(&mut teams);
        assert_eq!(teams[0].players[0].id, 1);
    }

    #[test]
    fn different_positions_block_the_trade() {
        let mut teams = vec![
            team(0, vec![player(1, Position::Forward, 20)]),
            team(1, vec![player(2, Position::Defender, 1)]),
        ];
        adjust(&mut teams);
        assert_eq!(teams[0].players[0].id, 1);
        assert_eq!(teams[1].players[0].id, 2);
    }
}
