//! Iterative swap-based refinement over one balance metric.

use crate::models::{GeneratedTeam, Player};

use super::metrics::{team_mean, BalanceMetric};

/// Largest tolerated gap between the best and worst team mean, on the shared
/// 0..=100 metric scale.
pub(crate) const GAP_THRESHOLD: f32 = 20.0;

/// Hard cap on swap passes per metric. The convergence condition alone does
/// not guarantee termination; hitting the cap means best effort, stop.
pub(crate) const MAX_PASSES: usize = 32;

/// Narrow the gap between the strongest and weakest team on `metric` by
/// swapping their extreme players, one pair per pass, while the swap pair
/// shares a position. Stops at the threshold, when no valid swap exists, or
/// at the pass cap.
pub(crate) fn run(metric: BalanceMetric, teams: &mut [GeneratedTeam]) {
    for _ in 0..MAX_PASSES {
        let means: Vec<f32> = teams.iter().map(|t| team_mean(metric, &t.players)).collect();
        let (strongest, weakest) = extremes(&means);
        if means[strongest] - means[weakest] <= GAP_THRESHOLD {
            return;
        }
        let Some((s, w)) = swap_candidates(metric, &teams[strongest], &teams[weakest]) else {
            return;
        };
        let traded = teams[strongest].players[s].clone();
        teams[strongest].players[s] = teams[weakest].players[w].clone();
        teams[weakest].players[w] = traded;
    }
}

/// Indices of the highest and lowest mean; ties resolve to the first seen.
fn extremes(means: &[f32]) -> (usize, usize) {
    let mut strongest = 0;
    let mut weakest = 0;
    for (i, mean) in means.iter().enumerate() {
        if *mean > means[strongest] {
            strongest = i;
        }
        if *mean < means[weakest] {
            weakest = i;
        }
    }
    (strongest, weakest)
}

/// The single highest-metric player on the strong team and the single lowest
/// on the weak team, provided they play the same position. Any mismatch means
/// no swap is available this pass.
fn swap_candidates(
    metric: BalanceMetric,
    strong: &GeneratedTeam,
    weak: &GeneratedTeam,
) -> Option<(usize, usize)> {
    let s = index_of_extreme(metric, &strong.players, true)?;
    let w = index_of_extreme(metric, &weak.players, false)?;
    (strong.players[s].position == weak.players[w].position).then_some((s, w))
}

/// First maximal (or minimal) player by metric value.
fn index_of_extreme(metric: BalanceMetric, players: &[Player], highest: bool) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, player) in players.iter().enumerate() {
        let value = metric.value(player);
        let better = match best {
            Some(b) => {
                let current = metric.value(&players[b]);
                if highest {
                    value > current
                } else {
                    value < current
                }
            }
            None => true,
        };
        if better {
            best = Some(i);
        }
    }
    best
}
