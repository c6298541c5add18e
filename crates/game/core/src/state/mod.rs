//! Authoritative session state.
//!
//! [`GameState`] is the explicit session object: the player, the encounter
//! countdown, the active battle (if any), the message log and the queue of
//! delayed battle transitions. Hosts clone or query it but mutate it
//! exclusively through the engine.
mod battle;
mod common;
mod error;
mod messages;
mod player;
mod schedule;

pub use battle::{BattleId, BattleOutcome, BattlePhase, BattleSession, EnemyInstance};
pub use common::{CardinalDirection, Position, Timestamp};
pub use error::{InitializationError, StateError};
pub use messages::MessageLog;
pub use player::PlayerState;
pub use schedule::{ScheduledStep, ScheduledTransition, TransitionQueue};

use crate::encounter::EncounterCounter;
use crate::env::{GameEnv, RollKind, compute_seed};

/// Canonical snapshot of one play session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Session seed. Combined with `nonce` for every random roll.
    pub seed: u64,

    /// Count of successfully executed actions.
    pub nonce: u64,

    /// Logical time of the most recent transition.
    pub clock: Timestamp,

    pub player: PlayerState,
    pub encounter: EncounterCounter,

    /// Active battle. While `Some`, movement is rejected.
    pub battle: Option<BattleSession>,

    /// Never reused within a session.
    next_battle_id: u64,

    pub messages: MessageLog,

    /// Delayed battle steps waiting for their due time.
    pub pending: TransitionQueue,
}

impl GameState {
    /// Builds a fresh session: player on the field's start tile at full health
    /// and the first encounter countdown rolled.
    pub fn new(seed: u64, env: &GameEnv<'_>) -> Result<Self, InitializationError> {
        let map = env.map()?;
        let config = env.config()?;
        let rng = env.rng()?;

        let start = map.start_position();
        if !map.contains(start) {
            return Err(InitializationError::StartOutOfBounds { position: start });
        }
        if !map.is_passable(start) {
            return Err(InitializationError::StartBlocked { position: start });
        }

        let mut encounter = EncounterCounter::default();
        encounter.start_countdown(
            rng,
            compute_seed(seed, 0, RollKind::EncounterCountdown),
            config.encounter_range(),
        );

        Ok(Self {
            seed,
            nonce: 0,
            clock: Timestamp::ZERO,
            player: PlayerState::new(start, config.player_max_hp, config.initial_herbs),
            encounter,
            battle: None,
            next_battle_id: 1,
            messages: MessageLog::new(),
            pending: TransitionQueue::new(),
        })
    }

    pub fn is_in_battle(&self) -> bool {
        self.battle.is_some()
    }

    /// Returns the active battle if its id matches `id`.
    pub fn battle_with_id(&self, id: BattleId) -> Option<&BattleSession> {
        self.battle.as_ref().filter(|battle| battle.id == id)
    }

    pub fn allocate_battle_id(&mut self) -> BattleId {
        let id = BattleId(self.next_battle_id);
        self.next_battle_id += 1;
        id
    }

    /// Seed for a roll made by the action currently being executed.
    pub fn roll_seed(&self, kind: RollKind) -> u64 {
        compute_seed(self.seed, self.nonce, kind)
    }

    /// Records a status message in the log and, during a battle, on the
    /// battle panel.
    pub fn post_message(&mut self, message: impl Into<String>) {
        let message = message.into();
        if let Some(battle) = self.battle.as_mut() {
            battle.last_message.clone_from(&message);
        }
        self.messages.push(message);
    }

    /// Moves the clock forward; never backwards.
    pub fn advance_clock(&mut self, now: Timestamp) {
        self.clock = self.clock.max(now);
    }

    /// Restarts logical time at zero, keeping every pending step the same
    /// distance from now. Hosts call this when resuming a saved session.
    pub fn rebase_clock(&mut self) {
        let offset = self.clock.as_millis();
        self.pending.shift_earlier(offset);
        self.clock = Timestamp::ZERO;
    }
}
