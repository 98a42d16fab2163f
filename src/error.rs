//! Error types for techfocus.

use thiserror::Error;

/// Input problems detected when starting a focus cycle.
///
/// These never change controller state; they are shown inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Task or technology was left empty.
    #[error("fill in task and technology")]
    MissingFields,
    /// The minutes field is not a positive integer.
    #[error("invalid number")]
    InvalidMinutes,
    /// A countdown is already running.
    #[error("a focus cycle is already running")]
    AlreadyRunning,
}

/// Errors produced by techfocus.
#[derive(Debug, Error)]
pub enum FocusError {
    /// User input was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The session database could not be opened, written or read.
    #[error("database error: {0}")]
    Database(String),

    /// A desktop notification could not be delivered.
    #[error("notification failed: {0}")]
    Notification(String),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),

    /// The terminal could not be set up or drawn to.
    #[error("terminal error: {0}")]
    Terminal(String),

    /// Serialization failed.
    #[error("parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for FocusError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl FocusError {
    /// Whether the error comes from the storage layer.
    #[must_use]
    pub const fn is_storage(&self) -> bool {
        matches!(self, Self::Database(_))
    }
}
