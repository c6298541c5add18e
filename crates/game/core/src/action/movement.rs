//! Exploration movement.

use crate::action::ActionTransition;
use crate::env::{GameEnv, OracleError, TerrainKind};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{CardinalDirection, GameState, Position};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("movement is suspended during battle")]
    InBattle,

    #[error("destination {destination} is out of bounds")]
    OutOfBounds { destination: Position },

    #[error("destination {destination} is blocked by {terrain:?}")]
    Blocked {
        destination: Position,
        terrain: TerrainKind,
    },

    #[error("player ended on impassable tile {position}")]
    ImpassableLanding { position: Position },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            MoveError::Oracle(error) => error.severity(),
            MoveError::InBattle | MoveError::OutOfBounds { .. } | MoveError::Blocked { .. } => {
                ErrorSeverity::Recoverable
            }
            MoveError::ImpassableLanding { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            MoveError::Oracle(error) => error.error_code(),
            MoveError::InBattle => "MOVE_IN_BATTLE",
            MoveError::OutOfBounds { .. } => "MOVE_OUT_OF_BOUNDS",
            MoveError::Blocked { .. } => "MOVE_BLOCKED",
            MoveError::ImpassableLanding { .. } => "MOVE_IMPASSABLE_LANDING",
        }
    }
}

/// One axis-aligned step of exactly one tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub direction: CardinalDirection,
}

impl MoveAction {
    pub fn new(direction: CardinalDirection) -> Self {
        Self { direction }
    }

    fn destination_from(&self, origin: Position) -> Position {
        origin.step(self.direction)
    }
}

/// Outcome of an accepted step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveResult {
    pub from: Position,
    pub to: Position,
    pub facing: CardinalDirection,
    /// The step reached the encounter threshold.
    pub encounter_triggered: bool,
}

impl ActionTransition for MoveAction {
    type Error = MoveError;
    type Result = MoveResult;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.is_in_battle() {
            return Err(MoveError::InBattle);
        }

        let map = env.map()?;
        let destination = self.destination_from(state.player.position);
        if !map.contains(destination) {
            return Err(MoveError::OutOfBounds { destination });
        }
        if !map.is_passable(destination) {
            return Err(MoveError::Blocked {
                destination,
                terrain: map.terrain(destination),
            });
        }

        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<MoveResult, Self::Error> {
        let from = state.player.position;
        let to = self.destination_from(from);

        state.player.position = to;
        state.player.facing = self.direction;
        state.encounter.on_step();

        Ok(MoveResult {
            from,
            to,
            facing: self.direction,
            encounter_triggered: state.encounter.should_trigger(),
        })
    }

    fn post_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let map = env.map()?;
        let position = state.player.position;
        if !map.contains(position) || !map.is_passable(position) {
            return Err(MoveError::ImpassableLanding { position });
        }
        Ok(())
    }
}
