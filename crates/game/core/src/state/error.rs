//! State management errors.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

/// Errors raised by state containers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    #[error("transition queue is full (max: {max})")]
    TransitionQueueFull { max: usize },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            StateError::TransitionQueueFull { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            StateError::TransitionQueueFull { .. } => "STATE_TRANSITION_QUEUE_FULL",
        }
    }
}

/// Errors raised while building the initial session state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitializationError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("start position {position} is outside the field")]
    StartOutOfBounds { position: Position },

    #[error("start position {position} is not passable")]
    StartBlocked { position: Position },
}

impl GameError for InitializationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            InitializationError::Oracle(error) => error.error_code(),
            InitializationError::StartOutOfBounds { .. } => "INIT_START_OUT_OF_BOUNDS",
            InitializationError::StartBlocked { .. } => "INIT_START_BLOCKED",
        }
    }
}
