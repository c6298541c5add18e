//! System actions driven by the engine rather than by input.
//!
//! `StartEncounter` is chained onto the step that reaches the countdown. The
//! other three are delayed battle steps popped from the transition queue.
//! Each of those carries the [`BattleId`] that scheduled it and refuses to run
//! against any other battle, or against the right battle in the wrong phase.

use crate::action::ActionTransition;
use crate::encounter::pick_enemy;
use crate::env::{GameEnv, OracleError, RollKind};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{
    BattleId, BattleOutcome, BattlePhase, BattleSession, GameState, ScheduledStep,
    ScheduledTransition, StateError,
};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SystemError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Schedule(#[from] StateError),

    #[error("a battle is already in progress")]
    BattleAlreadyActive,

    #[error("encounter not due ({elapsed}/{threshold} steps)")]
    EncounterNotDue { elapsed: u32, threshold: u32 },

    #[error("{battle} is no longer the active battle")]
    Stale { battle: BattleId },

    #[error("{battle} expected phase {expected}, found {actual}")]
    UnexpectedPhase {
        battle: BattleId,
        expected: BattlePhase,
        actual: BattlePhase,
    },

    #[error("hp {hp} exceeds maximum {max}")]
    HpOutOfRange { hp: u32, max: u32 },

    #[error("{battle} ended with {count} transitions still queued")]
    OrphanedTransitions { battle: BattleId, count: usize },
}

impl GameError for SystemError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            SystemError::Oracle(error) => error.severity(),
            SystemError::Schedule(error) => error.severity(),
            SystemError::Stale { .. } => ErrorSeverity::Recoverable,
            SystemError::BattleAlreadyActive
            | SystemError::EncounterNotDue { .. }
            | SystemError::UnexpectedPhase { .. } => ErrorSeverity::Validation,
            SystemError::HpOutOfRange { .. } | SystemError::OrphanedTransitions { .. } => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            SystemError::Oracle(error) => error.error_code(),
            SystemError::Schedule(error) => error.error_code(),
            SystemError::BattleAlreadyActive => "SYSTEM_BATTLE_ALREADY_ACTIVE",
            SystemError::EncounterNotDue { .. } => "SYSTEM_ENCOUNTER_NOT_DUE",
            SystemError::Stale { .. } => "SYSTEM_STALE_TRANSITION",
            SystemError::UnexpectedPhase { .. } => "SYSTEM_UNEXPECTED_PHASE",
            SystemError::HpOutOfRange { .. } => "SYSTEM_HP_OUT_OF_RANGE",
            SystemError::OrphanedTransitions { .. } => "SYSTEM_ORPHANED_TRANSITIONS",
        }
    }
}

/// Checks that `battle` is still active and sitting in `expected`.
fn guard_battle(
    state: &GameState,
    battle: BattleId,
    expected: BattlePhase,
) -> Result<(), SystemError> {
    let session = state
        .battle_with_id(battle)
        .ok_or(SystemError::Stale { battle })?;
    if session.phase != expected {
        return Err(SystemError::UnexpectedPhase {
            battle,
            expected,
            actual: session.phase,
        });
    }
    Ok(())
}

fn active_battle(state: &mut GameState, battle: BattleId) -> Result<&mut BattleSession, SystemError> {
    state
        .battle
        .as_mut()
        .filter(|session| session.id == battle)
        .ok_or(SystemError::Stale { battle })
}

fn check_player_hp(state: &GameState) -> Result<(), SystemError> {
    let (hp, max) = (state.player.hp, state.player.max_hp);
    if hp > max {
        return Err(SystemError::HpOutOfRange { hp, max });
    }
    Ok(())
}

// ============================================================================
// StartEncounter
// ============================================================================

/// Opens a battle against a randomly picked enemy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartEncounterAction;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterResult {
    pub battle: BattleId,
    pub enemy_id: String,
    pub enemy_name: String,
}

impl ActionTransition for StartEncounterAction {
    type Error = SystemError;
    type Result = EncounterResult;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.is_in_battle() {
            return Err(SystemError::BattleAlreadyActive);
        }
        if !state.encounter.should_trigger() {
            return Err(SystemError::EncounterNotDue {
                elapsed: state.encounter.steps_since_last_battle,
                threshold: state.encounter.steps_until_next_battle,
            });
        }
        if env.enemies()?.roster().is_empty() {
            return Err(OracleError::EmptyRoster.into());
        }
        env.rng()?;
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
    ) -> Result<EncounterResult, Self::Error> {
        let roster = env.enemies()?.roster();
        let rng = env.rng()?;

        let template = pick_enemy(roster, rng, state.roll_seed(RollKind::EnemyPick))
            .ok_or(OracleError::EmptyRoster)?;

        let id = state.allocate_battle_id();
        let session = BattleSession::new(id, template);
        let announcement = session.last_message.clone();

        // The countdown itself is re-rolled when this battle ends.
        state.encounter.reset_elapsed();
        state.battle = Some(session);
        state.messages.push(announcement);

        Ok(EncounterResult {
            battle: id,
            enemy_id: template.id.clone(),
            enemy_name: template.display_name.clone(),
        })
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if let Some(battle) = &state.battle {
            let (hp, max) = (battle.enemy.current_hp, battle.enemy.max_hp());
            if hp != max {
                return Err(SystemError::HpOutOfRange { hp, max });
            }
        }
        Ok(())
    }
}

// ============================================================================
// EnemyAttack
// ============================================================================

/// Counter-attack fired after the enemy-turn delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyAttackAction {
    pub battle: BattleId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyAttackResult {
    pub battle: BattleId,
    pub damage: u32,
    pub player_hp: u32,
}

impl ActionTransition for EnemyAttackAction {
    type Error = SystemError;
    type Result = EnemyAttackResult;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        guard_battle(state, self.battle, BattlePhase::EnemyTurn)?;
        env.rng()?;
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
    ) -> Result<EnemyAttackResult, Self::Error> {
        let rng = env.rng()?;
        let seed = state.roll_seed(RollKind::EnemyDamage);

        let battle = active_battle(state, self.battle)?;
        let range = battle.enemy.template.attack;
        let damage = rng.range(seed, range.min, range.max);
        let message = format!("{} attacks! You take {damage} damage.", battle.enemy.name());
        // Reaching 0 HP has no special handling: the turn simply passes back.
        battle.phase = BattlePhase::PlayerTurn;

        let player_hp = state.player.take_damage(damage);
        state.post_message(message);

        Ok(EnemyAttackResult {
            battle: self.battle,
            damage,
            player_hp,
        })
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        check_player_hp(state)
    }
}

// ============================================================================
// ResolveVictory
// ============================================================================

/// Victory roll fired after the victory delay: herb drop, then the
/// victory display window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolveVictoryAction {
    pub battle: BattleId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VictoryResult {
    pub battle: BattleId,
    pub herb_dropped: bool,
    pub herbs: u32,
}

impl ActionTransition for ResolveVictoryAction {
    type Error = SystemError;
    type Result = VictoryResult;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        guard_battle(state, self.battle, BattlePhase::AwaitingVictory)?;
        env.config()?;
        env.rng()?;
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<VictoryResult, Self::Error> {
        let config = env.config()?;
        let rng = env.rng()?;
        let clock = state.clock;
        let herb_dropped = rng.chance(
            state.roll_seed(RollKind::HerbDrop),
            config.herb_drop_percent,
        );

        let battle = active_battle(state, self.battle)?;
        battle.phase = BattlePhase::ResolvingVictory;
        battle.outcome = BattleOutcome::Victory;
        let message = format!("{} was defeated!", battle.enemy.name());
        let drop_message = format!("{} dropped an herb!", battle.enemy.name());

        state.post_message(message);
        if herb_dropped {
            state.player.herbs += 1;
            state.post_message(drop_message);
        }

        state.pending.schedule(ScheduledTransition {
            due: clock.after(config.victory_display_ms),
            battle: self.battle,
            step: ScheduledStep::EndBattle,
        })?;

        Ok(VictoryResult {
            battle: self.battle,
            herb_dropped,
            herbs: state.player.herbs,
        })
    }
}

// ============================================================================
// EndBattle
// ============================================================================

/// Closes the battle and hands control back to exploration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndBattleAction {
    pub battle: BattleId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleEndResult {
    pub battle: BattleId,
    pub outcome: BattleOutcome,
    /// Freshly rolled countdown for the next encounter.
    pub next_encounter_in: u32,
}

impl ActionTransition for EndBattleAction {
    type Error = SystemError;
    type Result = BattleEndResult;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        guard_battle(state, self.battle, BattlePhase::ResolvingVictory)?;
        env.config()?;
        env.rng()?;
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
    ) -> Result<BattleEndResult, Self::Error> {
        let config = env.config()?;
        let rng = env.rng()?;
        let seed = state.roll_seed(RollKind::EncounterCountdown);

        let battle = active_battle(state, self.battle)?;
        battle.phase = BattlePhase::Ended;
        let outcome = battle.outcome;

        state.battle = None;
        let next_encounter_in = state
            .encounter
            .start_countdown(rng, seed, config.encounter_range());

        Ok(BattleEndResult {
            battle: self.battle,
            outcome,
            next_encounter_in,
        })
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        // Nothing queued may outlive its battle.
        let count = state
            .pending
            .iter()
            .filter(|entry| entry.battle == self.battle)
            .count();
        if count > 0 {
            return Err(SystemError::OrphanedTransitions {
                battle: self.battle,
                count,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::PcgRng;
    use crate::state::Timestamp;
    use crate::test_utils::{TestField, env, roster};

    #[test]
    fn end_battle_refuses_to_leave_transitions_behind() {
        let (roster, config) = (roster(), GameConfig::default());
        let env = env(&TestField, &roster, &config, &PcgRng);
        let mut state = GameState::new(7, &env).expect("initial state");
        let action = EndBattleAction {
            battle: BattleId(1),
        };

        assert_eq!(action.post_validate(&state, &env), Ok(()));

        state
            .pending
            .schedule(ScheduledTransition {
                due: Timestamp::from_millis(500),
                battle: BattleId(1),
                step: ScheduledStep::EnemyAttack,
            })
            .expect("queue has room");
        let error = action
            .post_validate(&state, &env)
            .expect_err("queued step outlives its battle");
        assert_eq!(
            error,
            SystemError::OrphanedTransitions {
                battle: BattleId(1),
                count: 1,
            }
        );
        assert_eq!(error.severity(), ErrorSeverity::Internal);
    }

    #[test]
    fn transitions_of_other_battles_do_not_block_ending() {
        let (roster, config) = (roster(), GameConfig::default());
        let env = env(&TestField, &roster, &config, &PcgRng);
        let mut state = GameState::new(7, &env).expect("initial state");
        state
            .pending
            .schedule(ScheduledTransition {
                due: Timestamp::from_millis(500),
                battle: BattleId(2),
                step: ScheduledStep::EnemyAttack,
            })
            .expect("queue has room");

        let action = EndBattleAction {
            battle: BattleId(1),
        };
        assert_eq!(action.post_validate(&state, &env), Ok(()));
    }
}
