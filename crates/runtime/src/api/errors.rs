//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and state initialization so
//! clients can bubble them up with consistent context. Rejected player
//! actions are not errors at this layer; they resolve to an empty outcome.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::{ExecuteError, InitializationError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires oracles to be configured before building")]
    MissingOracles,

    #[error("failed to initialize game state from oracles")]
    InitialState(#[source] InitializationError),

    #[error("action failed after validation")]
    Execution(#[source] ExecuteError),
}
