use super::{CardinalDirection, Position};

/// Session-long player record.
///
/// Movement fields are written only while exploring; `hp` and `herbs` only
/// while a battle is active.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub position: Position,
    /// Last accepted movement direction, for sprite selection.
    pub facing: CardinalDirection,
    pub hp: u32,
    pub max_hp: u32,
    pub herbs: u32,
}

impl PlayerState {
    pub fn new(position: Position, max_hp: u32, herbs: u32) -> Self {
        Self {
            position,
            facing: CardinalDirection::default(),
            hp: max_hp,
            max_hp,
            herbs,
        }
    }

    pub fn is_full_health(&self) -> bool {
        self.hp >= self.max_hp
    }

    /// Subtracts `amount`, flooring at zero. Returns the new HP.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.hp = self.hp.saturating_sub(amount);
        self.hp
    }

    /// Adds `amount`, capped at `max_hp`. Returns the new HP.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hp_stays_within_bounds() {
        let mut player = PlayerState::new(Position::ORIGIN, 50, 0);
        assert_eq!(player.take_damage(9), 41);
        assert_eq!(player.heal(30), 50);
        assert_eq!(player.take_damage(80), 0);
        assert_eq!(player.take_damage(3), 0);
    }
}
