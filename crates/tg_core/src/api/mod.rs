//! JSON boundary for embedding the generator behind a string-typed surface.

pub mod teams_json;

pub use teams_json::{
    generate_teams_json, GenerateTeamsRequest, GenerateTeamsResponse, PlayerData,
};
