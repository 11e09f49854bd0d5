//! Unified error types surfaced by the runtime API.
//!
//! Wraps content loading failures, level construction failures and session
//! misuse so clients can bubble them up with consistent context.
use thiserror::Error;

use game_core::{ErrorSeverity, GameError, LayoutError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("level {index} does not exist ({count} levels available)")]
    UnknownLevel { index: usize, count: usize },

    #[error("level {index} is locked (highest unlocked level is {max_level})")]
    LevelLocked { index: usize, max_level: usize },

    #[error("failed to build level: {0}")]
    Layout(#[from] LayoutError),

    #[error("failed to load content: {message}")]
    Content { message: String },

    #[error("session already finished ({phase})")]
    SessionFinished { phase: &'static str },
}

impl RuntimeError {
    /// Wraps a content loader error, keeping its full context chain.
    pub fn content(err: impl std::fmt::Display) -> Self {
        Self::Content {
            message: format!("{err:#}"),
        }
    }
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownLevel { .. } | Self::LevelLocked { .. } => ErrorSeverity::Recoverable,
            Self::Layout(_) | Self::Content { .. } => ErrorSeverity::Validation,
            Self::SessionFinished { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownLevel { .. } => "RUNTIME_UNKNOWN_LEVEL",
            Self::LevelLocked { .. } => "RUNTIME_LEVEL_LOCKED",
            Self::Layout(inner) => inner.error_code(),
            Self::Content { .. } => "RUNTIME_CONTENT",
            Self::SessionFinished { .. } => "RUNTIME_SESSION_FINISHED",
        }
    }
}
