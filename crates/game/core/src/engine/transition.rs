//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionResult, ActionTransition, PlayerAction, SystemAction};
use crate::env::GameEnv;
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Routes each action to its transition and wraps the result in [`ActionResult`].
pub(super) fn execute_transition(
    action: &Action,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<ActionResult, ExecuteError> {
    match action {
        Action::Player(kind) => match kind {
            PlayerAction::Move(transition) => drive_transition(transition, state, env)
                .map(ActionResult::Move)
                .map_err(ExecuteError::Move),
            PlayerAction::Attack(transition) => drive_transition(transition, state, env)
                .map(ActionResult::Attack)
                .map_err(ExecuteError::Attack),
            PlayerAction::UseHerb(transition) => drive_transition(transition, state, env)
                .map(ActionResult::UseHerb)
                .map_err(ExecuteError::UseHerb),
        },
        Action::System(kind) => match kind {
            SystemAction::StartEncounter(transition) => drive_transition(transition, state, env)
                .map(ActionResult::EncounterStarted)
                .map_err(ExecuteError::StartEncounter),
            SystemAction::EnemyAttack(transition) => drive_transition(transition, state, env)
                .map(ActionResult::EnemyAttacked)
                .map_err(ExecuteError::EnemyAttack),
            SystemAction::ResolveVictory(transition) => drive_transition(transition, state, env)
                .map(ActionResult::VictoryResolved)
                .map_err(ExecuteError::ResolveVictory),
            SystemAction::EndBattle(transition) => drive_transition(transition, state, env)
                .map(ActionResult::BattleEnded)
                .map_err(ExecuteError::EndBattle),
        },
    }
}
