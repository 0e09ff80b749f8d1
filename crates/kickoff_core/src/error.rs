use thiserror::Error;

use crate::models::TeamSide;

/// Malformed match setup, rejected before the first tick.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SetupError {
    #[error("{side} roster has {found} players, expected 11")]
    InvalidTeamSize { side: TeamSide, found: usize },

    #[error("{side} roster has {found} goalkeepers, expected exactly 1")]
    GoalkeeperCount { side: TeamSide, found: usize },

    #[error("{side} roster repeats squad number {number}")]
    DuplicateNumber { side: TeamSide, number: u8 },

    #[error("{side} roster has a player with an empty name")]
    EmptyName { side: TeamSide },

    #[error("unknown role {0:?}")]
    UnknownRole(String),

    #[error("unknown attribute {0:?}")]
    UnknownAttribute(String),

    #[error("missing attribute {0:?}")]
    MissingAttribute(String),

    #[error("attribute {key} = {value} outside 1..=20")]
    AttributeOutOfRange { key: String, value: u8 },

    #[error("invalid engine config: {0}")]
    Config(String),
}

/// Engine configuration loading / validation failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error (yaml): {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("config parse error (json): {0}")]
    Json(#[from] serde_json::Error),

    #[error("config value {field} = {value} out of range: {reason}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        reason: &'static str,
    },
}

/// JSON API failure.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid JSON request: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    #[error("unsupported schema version: {0}")]
    UnsupportedSchema(u32),

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, SetupError>;
