//! Event payloads published on the bus.

use serde::{Deserialize, Serialize};

use game_core::{Action, ActionResult, AudioCue, GameState, Timestamp, TransitionPhase};

/// Game state events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameStateEvent {
    /// An action (player or scheduled) was committed.
    ActionExecuted {
        action: Action,
        result: ActionResult,
        clock: Timestamp,
        /// State after the commit.
        state: Box<GameState>,
    },

    /// A player action was refused by validation. Nothing changed.
    ActionRejected {
        action: Action,
        code: String,
        reason: String,
        clock: Timestamp,
    },

    /// An action failed after validation passed. The state was rolled back.
    ActionFailed {
        action: Action,
        phase: TransitionPhase,
        error: String,
        clock: Timestamp,
    },

    /// The session was replaced with a fresh one.
    SessionReset { seed: u64, state: Box<GameState> },
}

/// One sound cue, as handed to the audio sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioEvent {
    pub cue: AudioCue,
    pub volume: f32,
    pub looping: bool,
    pub clock: Timestamp,
}

impl AudioEvent {
    pub fn new(cue: AudioCue, clock: Timestamp) -> Self {
        Self {
            cue,
            volume: cue.volume(),
            looping: cue.is_looping(),
            clock,
        }
    }
}
