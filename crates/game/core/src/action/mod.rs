//! Action domain.
//!
//! Player actions come from input: [`MoveAction`], [`AttackAction`] and
//! [`UseHerbAction`]. System actions are produced by the engine itself: the
//! encounter that a step triggers and the delayed battle steps popped from
//! the transition queue. Every variant implements [`ActionTransition`].

mod battle;
mod movement;
mod system;
mod transition;

pub use battle::{AttackAction, AttackResult, BattleError, UseHerbAction, UseHerbResult};
pub use movement::{MoveAction, MoveError, MoveResult};
pub use system::{
    BattleEndResult, EncounterResult, EndBattleAction, EnemyAttackAction, EnemyAttackResult,
    ResolveVictoryAction, StartEncounterAction, SystemError, VictoryResult,
};
pub use transition::ActionTransition;

use crate::cue::AudioCue;
use crate::state::{BattleId, CardinalDirection, ScheduledStep, ScheduledTransition};

/// Actions a player can submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerAction {
    Move(MoveAction),
    Attack(AttackAction),
    UseHerb(UseHerbAction),
}

/// Actions only the engine issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SystemAction {
    StartEncounter(StartEncounterAction),
    EnemyAttack(EnemyAttackAction),
    ResolveVictory(ResolveVictoryAction),
    EndBattle(EndBattleAction),
}

/// Top-level action enum that can be either a player action or a system action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Player(PlayerAction),
    System(SystemAction),
}

impl Action {
    pub fn move_player(direction: CardinalDirection) -> Self {
        Self::Player(PlayerAction::Move(MoveAction::new(direction)))
    }

    pub fn attack() -> Self {
        Self::Player(PlayerAction::Attack(AttackAction))
    }

    pub fn use_herb() -> Self {
        Self::Player(PlayerAction::UseHerb(UseHerbAction))
    }

    pub fn start_encounter() -> Self {
        Self::System(SystemAction::StartEncounter(StartEncounterAction))
    }

    /// Materialises a queued battle step.
    pub fn scheduled(entry: &ScheduledTransition) -> Self {
        let battle = entry.battle;
        Self::System(match entry.step {
            ScheduledStep::EnemyAttack => SystemAction::EnemyAttack(EnemyAttackAction { battle }),
            ScheduledStep::ResolveVictory => {
                SystemAction::ResolveVictory(ResolveVictoryAction { battle })
            }
            ScheduledStep::EndBattle => SystemAction::EndBattle(EndBattleAction { battle }),
        })
    }

    pub fn is_system(&self) -> bool {
        matches!(self, Action::System(_))
    }

    /// Battle a delayed step belongs to.
    pub fn battle(&self) -> Option<BattleId> {
        match self {
            Action::System(SystemAction::EnemyAttack(action)) => Some(action.battle),
            Action::System(SystemAction::ResolveVictory(action)) => Some(action.battle),
            Action::System(SystemAction::EndBattle(action)) => Some(action.battle),
            _ => None,
        }
    }

    /// Returns the snake_case name of the action, for logs and event keys.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Action::Player(PlayerAction::Move(_)) => "move",
            Action::Player(PlayerAction::Attack(_)) => "attack",
            Action::Player(PlayerAction::UseHerb(_)) => "use_herb",
            Action::System(SystemAction::StartEncounter(_)) => "start_encounter",
            Action::System(SystemAction::EnemyAttack(_)) => "enemy_attack",
            Action::System(SystemAction::ResolveVictory(_)) => "resolve_victory",
            Action::System(SystemAction::EndBattle(_)) => "end_battle",
        }
    }
}

impl From<PlayerAction> for Action {
    fn from(action: PlayerAction) -> Self {
        Self::Player(action)
    }
}

impl From<SystemAction> for Action {
    fn from(action: SystemAction) -> Self {
        Self::System(action)
    }
}

/// Action-specific result of a successful transition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    Move(MoveResult),
    Attack(AttackResult),
    UseHerb(UseHerbResult),
    EncounterStarted(EncounterResult),
    EnemyAttacked(EnemyAttackResult),
    VictoryResolved(VictoryResult),
    BattleEnded(BattleEndResult),
}

impl ActionResult {
    /// Audio cues this outcome should trigger, in playback order.
    pub fn cues(&self) -> &'static [AudioCue] {
        match self {
            ActionResult::Move(_) => &[],
            ActionResult::Attack(_) => &[AudioCue::SwordSwing],
            ActionResult::UseHerb(_) => &[AudioCue::HerbUse],
            ActionResult::EncounterStarted(_) => {
                &[AudioCue::NormalThemeStop, AudioCue::BattleThemeStart]
            }
            ActionResult::EnemyAttacked(_) => &[AudioCue::EnemyAttack],
            ActionResult::VictoryResolved(_) => &[AudioCue::BattleThemeStop, AudioCue::Victory],
            ActionResult::BattleEnded(_) => &[AudioCue::NormalThemeStart],
        }
    }

    /// True when a step reached the encounter threshold.
    pub fn triggers_encounter(&self) -> bool {
        matches!(
            self,
            ActionResult::Move(MoveResult {
                encounter_triggered: true,
                ..
            })
        )
    }
}
