//! Error types for action execution pipeline.

use crate::action::{BattleError, MoveError, SystemError};
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: GameError> TransitionPhaseError<E> {
    /// Anything past `pre_validate` has already touched state, so it is
    /// never a plain rejection regardless of the inner classification.
    pub fn severity(&self) -> ErrorSeverity {
        let inner = self.error.severity();
        match self.phase {
            TransitionPhase::PreValidate => inner,
            _ if inner == ErrorSeverity::Fatal => inner,
            _ => ErrorSeverity::Internal,
        }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("move action failed: {0}")]
    Move(TransitionPhaseError<MoveError>),

    #[error("attack action failed: {0}")]
    Attack(TransitionPhaseError<BattleError>),

    #[error("use herb action failed: {0}")]
    UseHerb(TransitionPhaseError<BattleError>),

    #[error("start encounter action failed: {0}")]
    StartEncounter(TransitionPhaseError<SystemError>),

    #[error("enemy attack action failed: {0}")]
    EnemyAttack(TransitionPhaseError<SystemError>),

    #[error("resolve victory action failed: {0}")]
    ResolveVictory(TransitionPhaseError<SystemError>),

    #[error("end battle action failed: {0}")]
    EndBattle(TransitionPhaseError<SystemError>),
}

impl ExecuteError {
    pub fn phase(&self) -> TransitionPhase {
        match self {
            ExecuteError::Move(e) => e.phase,
            ExecuteError::Attack(e) | ExecuteError::UseHerb(e) => e.phase,
            ExecuteError::StartEncounter(e)
            | ExecuteError::EnemyAttack(e)
            | ExecuteError::ResolveVictory(e)
            | ExecuteError::EndBattle(e) => e.phase,
        }
    }

    /// True when the action was refused before any mutation: the
    /// "precondition not met" case that hosts ignore silently.
    pub fn is_rejection(&self) -> bool {
        self.phase() == TransitionPhase::PreValidate && self.severity().is_recoverable()
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ExecuteError::Move(e) => e.severity(),
            ExecuteError::Attack(e) | ExecuteError::UseHerb(e) => e.severity(),
            ExecuteError::StartEncounter(e)
            | ExecuteError::EnemyAttack(e)
            | ExecuteError::ResolveVictory(e)
            | ExecuteError::EndBattle(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ExecuteError::Move(e) => e.error.error_code(),
            ExecuteError::Attack(e) | ExecuteError::UseHerb(e) => e.error.error_code(),
            ExecuteError::StartEncounter(e)
            | ExecuteError::EnemyAttack(e)
            | ExecuteError::ResolveVictory(e)
            | ExecuteError::EndBattle(e) => e.error.error_code(),
        }
    }
}
