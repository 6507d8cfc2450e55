//! Initial distribution strategies, one per balance method.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::models::{GeneratedTeam, Player, Position};

/// Team index for the `pick`-th selection in a snake draft over `teams`
/// teams: 0,1,...,N-1,N-1,...,1,0,0,1,... reversing at each boundary.
fn snake_index(pick: usize, teams: usize) -> usize {
    let round = pick / teams;
    let offset = pick % teams;
    if round % 2 == 0 {
        offset
    } else {
        teams - 1 - offset
    }
}

/// Sort a group by skill (stable, descending) and deal it out snake-style.
/// The pick counter starts at zero for every call, so per-group callers
/// restart the zig-zag at team 0.
fn snake_deal(mut players: Vec<Player>, teams: &mut [GeneratedTeam]) {
    players.sort_by(|a, b| b.stats.skill_rating.cmp(&a.stats.skill_rating));
    let count = teams.len();
    for (pick, player) in players.into_iter().enumerate() {
        teams[snake_index(pick, count)].players.push(player);
    }
}

/// Split the pool into the four position groups, in canonical line order.
fn position_groups(players: Vec<Player>) -> [Vec<Player>; 4] {
    let mut groups: [Vec<Player>; 4] = Default::default();
    for player in players {
        let slot = match player.position {
            Position::Goalkeeper => 0,
            Position::Defender => 1,
            Position::Midfielder => 2,
            Position::Forward => 3,
        };
        groups[slot].push(player);
    }
    groups
}

/// *skill*: one snake draft over the whole pool, strongest first.
pub(crate) fn by_skill(players: Vec<Player>, teams: &mut [GeneratedTeam]) {
    snake_deal(players, teams);
}

/// *mixed*: a snake draft per position group, so both line counts and skill
/// spread evenly.
pub(crate) fn mixed(players: Vec<Player>, teams: &mut [GeneratedTeam]) {
    for group in position_groups(players) {
        snake_deal(group, teams);
    }
}

/// *position*: keepers dealt one per team first, then each outfield line
/// shuffled and dealt greedily to the currently smallest team.
pub(crate) fn by_position(players: Vec<Player>, teams: &mut [GeneratedTeam], rng: &mut ChaCha8Rng) {
    let [mut keepers, defenders, midfielders, forwards] = position_groups(players);

    // With surplus keepers the wrap-around order decides who doubles up, so
    // shuffle before dealing. Exact coverage needs no shuffle.
    if keepers.len() > teams.len() {
        keepers.shuffle(rng);
    }
    let count = teams.len();
    for (i, keeper) in keepers.into_iter().enumerate() {
        teams[i % count].players.push(keeper);
    }

    for mut group in [defenders, midfielders, forwards] {
        group.shuffle(rng);
        for player in group {
            let target = smallest_team(teams);
            teams[target].players.push(player);
        }
    }
}

/// Index of the team with the fewest members; ties go to the lowest index.
fn smallest_team(teams: &[GeneratedTeam]) -> usize {
    let mut target = 0;
    for (i, team) in teams.iter().enumerate() {
        if team.size() < teams[target].size() {
            target = i;
        }
    }
    target
}
