/// Game configuration constants and tunable parameters.
///
/// Every field has a default so partial TOML files are accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Player HP ceiling. Healing never goes above this value.
    pub player_max_hp: u32,
    /// Fixed damage dealt by a player attack.
    pub player_attack: u32,
    /// Herbs carried at session start.
    pub initial_herbs: u32,
    /// Inclusive herb heal range.
    pub heal_min: u32,
    pub heal_max: u32,
    /// Inclusive range of steps between encounters.
    pub encounter_min_steps: u32,
    pub encounter_max_steps: u32,
    /// Chance (0-100) that a defeated enemy drops an herb.
    pub herb_drop_percent: u32,
    /// Delay between a non-lethal player attack and the enemy counter-attack.
    pub enemy_turn_delay_ms: u64,
    /// Delay between a lethal attack and victory resolution.
    pub victory_delay_ms: u64,
    /// How long the victory screen stays up before exploration resumes.
    pub victory_display_ms: u64,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Status messages retained for the presentation layer.
    pub const MAX_MESSAGES: usize = 8;
    /// Deferred transitions that may be pending at once. A battle never has
    /// more than one in flight; the slack absorbs stale entries.
    pub const MAX_PENDING_TRANSITIONS: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PLAYER_MAX_HP: u32 = 50;
    pub const DEFAULT_PLAYER_ATTACK: u32 = 6;
    pub const DEFAULT_HEAL_RANGE: (u32, u32) = (20, 30);
    pub const DEFAULT_ENCOUNTER_RANGE: (u32, u32) = (3, 8);
    pub const DEFAULT_HERB_DROP_PERCENT: u32 = 90;
    pub const DEFAULT_ENEMY_TURN_DELAY_MS: u64 = 1000;
    pub const DEFAULT_VICTORY_DELAY_MS: u64 = 500;
    pub const DEFAULT_VICTORY_DISPLAY_MS: u64 = 2000;

    pub fn new() -> Self {
        Self {
            player_max_hp: Self::DEFAULT_PLAYER_MAX_HP,
            player_attack: Self::DEFAULT_PLAYER_ATTACK,
            initial_herbs: 0,
            heal_min: Self::DEFAULT_HEAL_RANGE.0,
            heal_max: Self::DEFAULT_HEAL_RANGE.1,
            encounter_min_steps: Self::DEFAULT_ENCOUNTER_RANGE.0,
            encounter_max_steps: Self::DEFAULT_ENCOUNTER_RANGE.1,
            herb_drop_percent: Self::DEFAULT_HERB_DROP_PERCENT,
            enemy_turn_delay_ms: Self::DEFAULT_ENEMY_TURN_DELAY_MS,
            victory_delay_ms: Self::DEFAULT_VICTORY_DELAY_MS,
            victory_display_ms: Self::DEFAULT_VICTORY_DISPLAY_MS,
        }
    }

    pub fn with_initial_herbs(mut self, herbs: u32) -> Self {
        self.initial_herbs = herbs;
        self
    }

    /// Percentages above 100 are clamped.
    pub fn with_herb_drop_percent(mut self, percent: u32) -> Self {
        self.herb_drop_percent = percent.min(100);
        self
    }

    pub fn heal_range(&self) -> (u32, u32) {
        ordered(self.heal_min, self.heal_max)
    }

    pub fn encounter_range(&self) -> (u32, u32) {
        ordered(self.encounter_min_steps, self.encounter_max_steps)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn ordered(a: u32, b: u32) -> (u32, u32) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_rules() {
        let config = GameConfig::default();
        assert_eq!(config.player_max_hp, 50);
        assert_eq!(config.player_attack, 6);
        assert_eq!(config.heal_range(), (20, 30));
        assert_eq!(config.encounter_range(), (3, 8));
        assert_eq!(config.enemy_turn_delay_ms, 1000);
        assert_eq!(config.victory_delay_ms, 500);
        assert_eq!(config.victory_display_ms, 2000);
    }

    #[test]
    fn drop_percent_is_clamped() {
        let config = GameConfig::new().with_herb_drop_percent(250);
        assert_eq!(config.herb_drop_percent, 100);
    }

    #[test]
    fn swapped_ranges_are_normalized() {
        let config = GameConfig {
            encounter_min_steps: 9,
            encounter_max_steps: 2,
            ..GameConfig::default()
        };
        assert_eq!(config.encounter_range(), (2, 9));
    }
}
