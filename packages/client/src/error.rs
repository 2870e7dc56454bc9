//! Client error definitions.

use thiserror::Error;

/// Invalid command-line configuration
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("latency scale must be a finite, non-negative number (got {0})")]
    InvalidLatencyScale(f64),

    #[error("user id cannot be empty")]
    EmptyUserId,
}

/// A REPL line that could not be understood
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

/// Errors surfaced by the interactive client
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no room is open; use 'open <room_id>' first")]
    NoRoomOpen,

    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to read input: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}
