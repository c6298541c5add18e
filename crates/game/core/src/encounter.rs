//! Random encounter pacing.
//!
//! The countdown is rolled once per exploration leg (session start and each
//! battle end) and stays fixed while the player walks, so encounters feel
//! paced but not predictable.

use crate::env::{EnemyTemplate, RngOracle};

/// Steps walked versus steps allowed before the next battle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterCounter {
    pub steps_since_last_battle: u32,
    pub steps_until_next_battle: u32,
}

impl EncounterCounter {
    pub const fn new(threshold: u32) -> Self {
        Self {
            steps_since_last_battle: 0,
            steps_until_next_battle: threshold,
        }
    }

    /// Rolls a fresh threshold in `[min, max]` and resets the elapsed steps.
    pub fn start_countdown<R>(&mut self, rng: &R, seed: u64, (min, max): (u32, u32)) -> u32
    where
        R: RngOracle + ?Sized,
    {
        self.steps_until_next_battle = rng.range(seed, min, max);
        self.steps_since_last_battle = 0;
        self.steps_until_next_battle
    }

    pub fn on_step(&mut self) {
        self.steps_since_last_battle = self.steps_since_last_battle.saturating_add(1);
    }

    pub fn should_trigger(&self) -> bool {
        self.steps_since_last_battle >= self.steps_until_next_battle
    }

    /// Clears elapsed steps without touching the threshold.
    pub fn reset_elapsed(&mut self) {
        self.steps_since_last_battle = 0;
    }

    pub fn remaining(&self) -> u32 {
        self.steps_until_next_battle
            .saturating_sub(self.steps_since_last_battle)
    }
}

/// Uniform pick from the roster; `None` only when the roster is empty.
pub fn pick_enemy<'a, R>(roster: &'a [EnemyTemplate], rng: &R, seed: u64) -> Option<&'a EnemyTemplate>
where
    R: RngOracle + ?Sized,
{
    roster.get(rng.index(seed, roster.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{AttackRange, PcgRng};

    #[test]
    fn countdown_always_lands_in_range() {
        let mut counter = EncounterCounter::default();
        for seed in 0..1_000u64 {
            counter.on_step();
            let threshold = counter.start_countdown(&PcgRng, seed, (3, 8));
            assert!((3..=8).contains(&threshold));
            assert_eq!(counter.steps_since_last_battle, 0);
        }
    }

    #[test]
    fn triggers_exactly_at_threshold() {
        let mut counter = EncounterCounter::new(3);
        counter.on_step();
        counter.on_step();
        assert!(!counter.should_trigger());
        assert_eq!(counter.remaining(), 1);
        counter.on_step();
        assert!(counter.should_trigger());
        counter.on_step();
        assert!(counter.should_trigger());
    }

    #[test]
    fn reset_elapsed_keeps_threshold() {
        let mut counter = EncounterCounter::new(4);
        (0..4).for_each(|_| counter.on_step());
        counter.reset_elapsed();
        assert_eq!(counter.steps_until_next_battle, 4);
        assert!(!counter.should_trigger());
    }

    #[test]
    fn pick_enemy_draws_from_whole_roster() {
        let roster: Vec<EnemyTemplate> = (1..=3)
            .map(|i| {
                EnemyTemplate::new(format!("enemy{i}"), format!("Enemy {i}"), "", 10, AttackRange::new(1, 2))
            })
            .collect();

        let mut seen = [false; 3];
        for seed in 0..300u64 {
            let picked = pick_enemy(&roster, &PcgRng, seed).unwrap();
            let index = roster.iter().position(|t| t.id == picked.id).unwrap();
            seen[index] = true;
        }
        assert_eq!(seen, [true; 3]);
        assert!(pick_enemy(&[], &PcgRng, 0).is_none());
    }
}
