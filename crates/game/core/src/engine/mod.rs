//! Action execution pipeline and delayed-transition scheduling.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Player
//! input goes through [`GameEngine::execute`]; delayed battle steps come due
//! through [`GameEngine::advance`]. Both take the host's notion of "now" and
//! never read a clock themselves.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{Action, ActionResult};
use crate::env::GameEnv;
use crate::state::{GameState, ScheduledTransition, Timestamp};

/// Complete outcome of one executed action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    pub action: Action,
    pub result: ActionResult,
    /// Logical time the action ran at.
    pub clock: Timestamp,
}

/// Queued transition that was dropped instead of executed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscardedTransition {
    pub entry: ScheduledTransition,
    pub error: ExecuteError,
}

/// Everything [`GameEngine::advance`] did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdvanceReport {
    pub executed: Vec<ExecutionOutcome>,
    pub discarded: Vec<DiscardedTransition>,
}

impl AdvanceReport {
    pub fn is_empty(&self) -> bool {
        self.executed.is_empty() && self.discarded.is_empty()
    }
}

/// Game engine that manages action execution and delayed transitions.
///
/// All state mutations flow through the three-phase action pipeline:
/// pre_validate → apply → post_validate
///
/// On error the state may be partially mutated (an `apply` or
/// `post_validate` failure). Hosts that need atomicity run the engine
/// against a clone and commit only on success.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Executes an action at logical time `now`.
    ///
    /// A step that reaches the encounter threshold is followed in the same
    /// call by the encounter itself, so the returned list holds one or two
    /// outcomes. Due transitions are not fired here; call [`Self::advance`]
    /// first.
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        action: &Action,
        now: Timestamp,
    ) -> Result<Vec<ExecutionOutcome>, ExecuteError> {
        self.state.advance_clock(now);

        let outcome = self.run(&env, action)?;
        let chain_encounter = outcome.result.triggers_encounter();

        let mut outcomes = vec![outcome];
        if chain_encounter {
            outcomes.push(self.run(&env, &Action::start_encounter())?);
        }
        Ok(outcomes)
    }

    /// Fires every queued transition due at or before `now`, in due order.
    ///
    /// Each entry runs with the clock set to its own due time, so steps it
    /// schedules are timed from when it was due rather than from `now`.
    /// Entries refused by `pre_validate` (stale battle or wrong phase) are
    /// discarded; any later failure aborts the advance.
    pub fn advance(
        &mut self,
        env: GameEnv<'_>,
        now: Timestamp,
    ) -> Result<AdvanceReport, ExecuteError> {
        let mut report = AdvanceReport::default();

        while let Some(entry) = self.state.pending.pop_due(now) {
            self.state.advance_clock(entry.due);
            match self.run(&env, &Action::scheduled(&entry)) {
                Ok(outcome) => report.executed.push(outcome),
                Err(error) if error.phase() == TransitionPhase::PreValidate => {
                    report.discarded.push(DiscardedTransition { entry, error });
                }
                Err(error) => return Err(error),
            }
        }

        self.state.advance_clock(now);
        Ok(report)
    }

    /// Due time of the earliest queued transition.
    pub fn next_due(&self) -> Option<Timestamp> {
        self.state.pending.next_due()
    }

    fn run(&mut self, env: &GameEnv<'_>, action: &Action) -> Result<ExecutionOutcome, ExecuteError> {
        let result = transition::execute_transition(action, self.state, env)?;

        // Nonce advances only on success, so every roll gets a fresh seed.
        self.state.nonce += 1;

        Ok(ExecutionOutcome {
            action: *action,
            result,
            clock: self.state.clock,
        })
    }
}
