use std::path::PathBuf;

use crate::game::MoveError;

/// Errors raised while choosing a move.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("no valid columns to choose from")]
    NoValidColumns,

    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that abort a game in progress.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("illegal move: {0}")]
    Move(#[from] MoveError),

    #[error("agent failed to move: {0}")]
    Agent(#[from] AgentError),

    #[error("game is already over")]
    GameOver,
}

/// Errors that can occur while loading or saving the value table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("value table not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read value table from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse value table from {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("unsupported value table format version {0}")]
    UnsupportedVersion(u32),

    #[error("value table entry has out-of-range action {0}")]
    InvalidAction(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
