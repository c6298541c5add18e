//! Player battle commands.
//!
//! Attacks and herbs are the only inputs a battle accepts. Everything after
//! an attack (counter-attack, victory roll, return to exploration) is queued
//! as a delayed system step and runs through [`crate::action::system`].

use crate::action::ActionTransition;
use crate::env::{GameEnv, OracleError, RollKind};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{
    BattleId, BattlePhase, GameState, ScheduledStep, ScheduledTransition, StateError,
};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Schedule(#[from] StateError),

    #[error("no battle in progress")]
    NoActiveBattle,

    #[error("not the player's turn (phase: {phase})")]
    NotPlayerTurn { phase: BattlePhase },

    #[error("battle has already ended")]
    BattleOver,

    #[error("no herbs left")]
    NoHerbs,

    #[error("player is already at full health")]
    AlreadyFullHealth,

    #[error("hp {hp} exceeds maximum {max}")]
    HpOutOfRange { hp: u32, max: u32 },
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            BattleError::Oracle(error) => error.severity(),
            BattleError::Schedule(error) => error.severity(),
            BattleError::NoActiveBattle | BattleError::BattleOver => ErrorSeverity::Validation,
            BattleError::NotPlayerTurn { .. }
            | BattleError::NoHerbs
            | BattleError::AlreadyFullHealth => ErrorSeverity::Recoverable,
            BattleError::HpOutOfRange { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            BattleError::Oracle(error) => error.error_code(),
            BattleError::Schedule(error) => error.error_code(),
            BattleError::NoActiveBattle => "BATTLE_NO_ACTIVE_BATTLE",
            BattleError::NotPlayerTurn { .. } => "BATTLE_NOT_PLAYER_TURN",
            BattleError::BattleOver => "BATTLE_OVER",
            BattleError::NoHerbs => "BATTLE_NO_HERBS",
            BattleError::AlreadyFullHealth => "BATTLE_ALREADY_FULL_HEALTH",
            BattleError::HpOutOfRange { .. } => "BATTLE_HP_OUT_OF_RANGE",
        }
    }
}

/// Player strike for the configured fixed damage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackAction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub battle: BattleId,
    pub damage: u32,
    pub enemy_hp: u32,
    pub defeated: bool,
}

impl ActionTransition for AttackAction {
    type Error = BattleError;
    type Result = AttackResult;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        env.config()?;
        let battle = state.battle.as_ref().ok_or(BattleError::NoActiveBattle)?;
        if !battle.is_player_turn() {
            return Err(BattleError::NotPlayerTurn {
                phase: battle.phase,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<AttackResult, Self::Error> {
        let config = env.config()?;
        let clock = state.clock;
        let battle = state.battle.as_mut().ok_or(BattleError::NoActiveBattle)?;

        let damage = config.player_attack;
        let enemy_hp = battle.enemy.take_damage(damage);
        let defeated = battle.enemy.is_defeated();
        let id = battle.id;
        let message = format!("You attack {} for {damage} damage.", battle.enemy.name());

        let (phase, step, delay) = if defeated {
            (
                BattlePhase::AwaitingVictory,
                ScheduledStep::ResolveVictory,
                config.victory_delay_ms,
            )
        } else {
            (
                BattlePhase::EnemyTurn,
                ScheduledStep::EnemyAttack,
                config.enemy_turn_delay_ms,
            )
        };
        battle.phase = phase;

        state.pending.schedule(ScheduledTransition {
            due: clock.after(delay),
            battle: id,
            step,
        })?;
        state.post_message(message);

        Ok(AttackResult {
            battle: id,
            damage,
            enemy_hp,
            defeated,
        })
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if let Some(battle) = &state.battle {
            let (hp, max) = (battle.enemy.current_hp, battle.enemy.max_hp());
            if hp > max {
                return Err(BattleError::HpOutOfRange { hp, max });
            }
        }
        Ok(())
    }
}

/// Consumes one herb to heal. Never ends the player's turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseHerbAction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseHerbResult {
    /// Rolled heal amount, before the HP cap.
    pub heal: u32,
    pub player_hp: u32,
    pub herbs_left: u32,
}

impl ActionTransition for UseHerbAction {
    type Error = BattleError;
    type Result = UseHerbResult;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        env.config()?;
        env.rng()?;
        let battle = state.battle.as_ref().ok_or(BattleError::NoActiveBattle)?;
        if battle.phase.is_terminal() {
            return Err(BattleError::BattleOver);
        }
        if state.player.herbs == 0 {
            return Err(BattleError::NoHerbs);
        }
        if state.player.is_full_health() {
            return Err(BattleError::AlreadyFullHealth);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<UseHerbResult, Self::Error> {
        let config = env.config()?;
        let rng = env.rng()?;

        let (min, max) = config.heal_range();
        let heal = rng.range(state.roll_seed(RollKind::HerbHeal), min, max);
        let player_hp = state.player.heal(heal);
        state.player.herbs -= 1;
        state.post_message(format!("Used an herb and recovered {heal} HP!"));

        Ok(UseHerbResult {
            heal,
            player_hp,
            herbs_left: state.player.herbs,
        })
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let (hp, max) = (state.player.hp, state.player.max_hp);
        if hp > max {
            return Err(BattleError::HpOutOfRange { hp, max });
        }
        Ok(())
    }
}
