//! Error types for the VDC Fantasy CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FantasyError>;

#[derive(Error, Debug)]
pub enum FantasyError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(#[from] chrono::ParseError),

    #[error("{env_var} environment variable not set")]
    MissingCredential { env_var: String },

    #[error("Stat feed returned no data")]
    NoData,

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Player is not active: {name}")]
    InactivePlayer { name: String },

    #[error("No fantasy roster found for user {user_id}")]
    RosterNotFound { user_id: String },

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: String },

    #[error("Roster mutations are locked (deadline {deadline} has passed)")]
    RosterLocked { deadline: String },

    #[error("A roster must have exactly {expected} players, got {actual}")]
    RosterIncomplete { expected: usize, actual: usize },

    #[error("Roster MMR total {total} exceeds the cap of {cap}")]
    RosterOverCap { total: i64, cap: i64 },

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
