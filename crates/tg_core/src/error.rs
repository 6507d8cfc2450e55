use thiserror::Error;

use crate::models::PlayerId;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Insufficient players: need at least {required}, found {found}")]
    InsufficientPlayers { required: usize, found: usize },

    #[error("Unknown player id(s): {missing:?}")]
    PlayerNotFound { missing: Vec<PlayerId> },

    #[error("Invalid player {id}: {reason}")]
    InvalidPlayer { id: PlayerId, reason: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl GenerationError {
    /// True for errors caused by the request itself rather than the player
    /// data behind it. Callers usually surface these directly to the user.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            GenerationError::InvalidConfig(_) | GenerationError::InsufficientPlayers { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GenerationError>;
