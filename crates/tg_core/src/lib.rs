//! # tg_core - Balanced Team Generation Engine
//!
//! This library splits a selected pool of club players into balanced teams
//! for match day, with a JSON API for easy integration with front ends.
//!
//! ## Features
//! - Deterministic generation (same seed = same teams)
//! - Three balance methods: skill, position, mixed
//! - Iterative swap rebalancing with a hard pass cap
//! - Optional history-aware adjustment and captain assignment

pub mod api;
pub mod balancer;
pub mod error;
pub mod models;
pub mod roster;

// Re-export the main API surface
pub use api::{generate_teams_json, GenerateTeamsRequest, GenerateTeamsResponse};
pub use balancer::{generate_teams, generate_teams_seeded, GenerationPlan, TeamBalancer};
pub use error::{GenerationError, Result};
pub use models::{
    BalanceMethod, GeneratedTeam, MatchFormat, Player, PlayerId, PlayerStats, Position,
    TeamGenerationRequest,
};
pub use roster::{MatchOutcome, PlayerResolver, RosterStore};

/// Library version, straight from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// JSON document schema version accepted by [`generate_teams_json`].
pub const SCHEMA_VERSION: u8 = 1;
