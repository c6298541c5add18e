//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (e.g., `MoveError`, `BattleError`) are defined in
//! their respective modules alongside the actions they validate. This module
//! only carries the shared classification used by the runtime to decide how
//! loudly a failure is reported.

/// Severity level of an error, used for categorization and logging.
///
/// - **Recoverable**: the input was fine but the world said no (blocked tile, out of turn)
/// - **Validation**: the input made no sense for the current state
/// - **Internal**: an invariant broke after mutation; a bug
/// - **Fatal**: the session cannot continue (missing oracle)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Precondition not met; the action is silently ignored.
    ///
    /// Examples: destination blocked, attacking during the enemy turn
    Recoverable,

    /// Invalid request for the current state.
    ///
    /// Examples: attacking with no battle in progress
    Validation,

    /// Unexpected state inconsistency.
    ///
    /// Examples: HP outside its bounds after a transition, scheduler overflow
    Internal,

    /// Session cannot continue.
    ///
    /// Examples: missing map or enemy roster
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is a plain "precondition not met".
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable | Self::Validation)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Error codes are stable SCREAMING_SNAKE identifiers usable in logs
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
