//! Deterministic rules for a tile-grid field RPG.
//!
//! `game-core` defines the canonical rules (terrain, encounters, battles,
//! exploration) and exposes pure APIs reused by the runtime and by tests.
//! All state mutation flows through [`engine::GameEngine`]; randomness and
//! static data come in through the oracles in [`env`]. Nothing here reads a
//! clock, spawns a thread or touches I/O.
pub mod action;
pub mod config;
pub mod cue;
pub mod encounter;
pub mod engine;
pub mod env;
pub mod error;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod test_utils;

pub use action::{
    Action, ActionResult, ActionTransition, AttackAction, BattleError, MoveAction, MoveError,
    PlayerAction, SystemAction, SystemError, UseHerbAction,
};
pub use config::GameConfig;
pub use cue::AudioCue;
pub use encounter::{EncounterCounter, pick_enemy};
pub use engine::{
    AdvanceReport, DiscardedTransition, ExecuteError, ExecutionOutcome, GameEngine,
    TransitionPhase, TransitionPhaseError,
};
pub use env::{
    AttackRange, EnemyOracle, EnemyTemplate, Env, GameEnv, MapDimensions, MapOracle, OracleError,
    PcgRng, RngOracle, RollKind, StaticTile, TerrainKind, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use snapshot::{FieldView, GameSnapshot, TileFlags};
pub use state::{
    BattleId, BattleOutcome, BattlePhase, BattleSession, CardinalDirection, EnemyInstance,
    GameState, InitializationError, MessageLog, PlayerState, Position, Timestamp,
};
