use std::fmt;

use crate::env::EnemyTemplate;

/// Identifies one battle within a session.
///
/// Deferred transitions carry the id of the battle that scheduled them so a
/// transition outliving its battle can be recognised and dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleId(pub u64);

impl fmt::Display for BattleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "battle#{}", self.0)
    }
}

/// Enemy as it exists inside one battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyInstance {
    pub template: EnemyTemplate,
    pub current_hp: u32,
}

impl EnemyInstance {
    pub fn from_template(template: &EnemyTemplate) -> Self {
        Self {
            template: template.clone(),
            current_hp: template.max_hp,
        }
    }

    pub fn name(&self) -> &str {
        &self.template.display_name
    }

    pub fn max_hp(&self) -> u32 {
        self.template.max_hp
    }

    /// Subtracts `amount`, flooring at zero. Returns the new HP.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.current_hp = self.current_hp.saturating_sub(amount);
        self.current_hp
    }

    pub fn is_defeated(&self) -> bool {
        self.current_hp == 0
    }
}

/// Where a battle currently stands.
///
/// ```text
/// PlayerTurn ──attack (hp>0)──▶ EnemyTurn ──(delay)──▶ PlayerTurn
///     │
///     └──attack (hp=0)──▶ AwaitingVictory ──(delay)──▶ ResolvingVictory ──(delay)──▶ Ended
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattlePhase {
    PlayerTurn,
    /// Counter-attack pending.
    EnemyTurn,
    /// Enemy at 0 HP; the victory roll has not happened yet.
    AwaitingVictory,
    /// Victory shown; waiting to hand control back to exploration.
    ResolvingVictory,
    Ended,
}

impl BattlePhase {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, BattlePhase::Ended)
    }
}

impl fmt::Display for BattlePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleOutcome {
    Ongoing,
    Victory,
    /// Reserved: the player reaching 0 HP is not treated as a loss.
    Defeat,
}

/// Live battle against a single enemy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleSession {
    pub id: BattleId,
    pub enemy: EnemyInstance,
    pub phase: BattlePhase,
    pub last_message: String,
    pub outcome: BattleOutcome,
}

impl BattleSession {
    pub fn new(id: BattleId, template: &EnemyTemplate) -> Self {
        let enemy = EnemyInstance::from_template(template);
        let last_message = format!("{} appeared!", enemy.name());
        Self {
            id,
            enemy,
            phase: BattlePhase::PlayerTurn,
            last_message,
            outcome: BattleOutcome::Ongoing,
        }
    }

    pub fn is_player_turn(&self) -> bool {
        self.phase == BattlePhase::PlayerTurn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::AttackRange;

    fn slime() -> EnemyTemplate {
        EnemyTemplate::new("enemy1", "Slime", "/images/enemy1.png", 10, AttackRange::new(1, 3))
    }

    #[test]
    fn new_session_starts_on_player_turn_at_full_hp() {
        let session = BattleSession::new(BattleId(1), &slime());
        assert_eq!(session.phase, BattlePhase::PlayerTurn);
        assert_eq!(session.enemy.current_hp, 10);
        assert_eq!(session.outcome, BattleOutcome::Ongoing);
        assert_eq!(session.last_message, "Slime appeared!");
    }

    #[test]
    fn enemy_hp_floors_at_zero() {
        let mut enemy = EnemyInstance::from_template(&slime());
        assert_eq!(enemy.take_damage(6), 4);
        assert_eq!(enemy.take_damage(6), 0);
        assert!(enemy.is_defeated());
    }
}
