//! Team generation: initial distribution, iterative rebalancing, captaincy
//! and history-based adjustment.
//!
//! The pipeline runs in fixed order: distribute by the requested method,
//! rebalance each active metric, refresh aggregates, then (in competition
//! mode) pick captains and apply the history swap pass.

pub mod metrics;

mod captain;
mod distribute;
mod history;
mod rebalance;

pub use metrics::PlayerMetrics;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{GenerationError, Result};
use crate::models::{team_name, BalanceMethod, GeneratedTeam, Player, TeamGenerationRequest};
use crate::roster::PlayerResolver;
use metrics::BalanceMetric;

/// Everything one generation run needs, resolved up front: the validated
/// request, the full player records behind the selected ids, and the seed.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    pub request: TeamGenerationRequest,
    pub players: Vec<Player>,
    pub seed: u64,
}

/// Split the selected players into balanced teams, drawing a fresh seed.
///
/// Only the *position* method consumes randomness; for *skill* and *mixed*
/// the seed has no effect on the output.
pub fn generate_teams(
    request: &TeamGenerationRequest,
    resolver: &impl PlayerResolver,
) -> Result<Vec<GeneratedTeam>> {
    generate_teams_seeded(request, resolver, rand::thread_rng().gen())
}

/// Split the selected players into balanced teams with a caller-fixed seed.
/// Same request, same roster, same seed: same teams.
pub fn generate_teams_seeded(
    request: &TeamGenerationRequest,
    resolver: &impl PlayerResolver,
    seed: u64,
) -> Result<Vec<GeneratedTeam>> {
    request.validate()?;
    let players = resolver.resolve(&request.player_ids)?;
    let plan = GenerationPlan { request: request.clone(), players, seed };
    Ok(TeamBalancer::new(plan)?.generate())
}

/// One generation run over an already-resolved pool.
pub struct TeamBalancer {
    request: TeamGenerationRequest,
    players: Vec<Player>,
    rng: ChaCha8Rng,
}

impl TeamBalancer {
    /// Validates the plan and prepares the run. The pool must cover
    /// `teams_count` full sides in the requested format; anything smaller
    /// would produce degenerate teams and is rejected instead.
    pub fn new(plan: GenerationPlan) -> Result<Self> {
        plan.request.validate()?;
        let required = plan.request.min_players();
        if plan.players.len() < required {
            return Err(GenerationError::InsufficientPlayers {
                required,
                found: plan.players.len(),
            });
        }
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(plan.seed),
            request: plan.request,
            players: plan.players,
        })
    }

    /// Run the full pipeline and hand back the finished teams.
    pub fn generate(mut self) -> Vec<GeneratedTeam> {
        let mut teams: Vec<GeneratedTeam> =
            (0..self.request.teams_count).map(|i| GeneratedTeam::new(team_name(i))).collect();

        let players = std::mem::take(&mut self.players);
        match self.request.balance_method {
            BalanceMethod::Skill => distribute::by_skill(players, &mut teams),
            BalanceMethod::Position => distribute::by_position(players, &mut teams, &mut self.rng),
            BalanceMethod::Mixed => distribute::mixed(players, &mut teams),
        }

        // Refinement runs regardless of method; the method only shapes the
        // starting point.
        for metric in self.balance_metrics() {
            rebalance::run(metric, &mut teams);
        }

        for team in &mut teams {
            team.refresh_metrics();
        }

        if self.request.competition_mode {
            for team in &mut teams {
                team.captain = captain::select(&team.players);
            }
            if self.request.consider_history {
                history::adjust(&mut teams);
            }
        }

        teams
    }

    /// Metrics the rebalancing pass works through, in order. Skill is always
    /// first; position strength joins when the method cares about positions;
    /// win rate joins when history matters.
    fn balance_metrics(&self) -> Vec<BalanceMetric> {
        let mut metrics = vec![BalanceMetric::Skill];
        if matches!(self.request.balance_method, BalanceMethod::Position | BalanceMethod::Mixed) {
            metrics.push(BalanceMetric::PositionStrength);
        }
        if self.request.consider_history {
            metrics.push(BalanceMetric::WinRate);
        }
        metrics
    }
}
