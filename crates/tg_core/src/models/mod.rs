pub mod player;
pub mod request;
pub mod team;

#[cfg(test)]
pub mod proptest_gen;

pub use player::{Player, PlayerId, PlayerStats, Position, DEFAULT_WIN_RATE};
pub use request::{BalanceMethod, MatchFormat, TeamGenerationRequest, MAX_TEAMS, MIN_TEAMS};
pub use team::{team_name, GeneratedTeam, TEAM_NAME_POOL};
