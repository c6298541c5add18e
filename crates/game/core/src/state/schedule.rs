//! Deferred battle transitions.
//!
//! Each pending step is a `(battle, step, due)` entry. The queue knows nothing
//! about wall-clock time; the engine pops entries whose due time has passed.

use arrayvec::ArrayVec;

use super::{BattleId, StateError, Timestamp};
use crate::config::GameConfig;

/// The step a deferred transition performs when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScheduledStep {
    EnemyAttack,
    ResolveVictory,
    EndBattle,
}

impl ScheduledStep {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduledTransition {
    pub due: Timestamp,
    pub battle: BattleId,
    pub step: ScheduledStep,
}

/// Bounded queue of pending transitions ordered by due time, then insertion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionQueue {
    entries: ArrayVec<ScheduledTransition, { GameConfig::MAX_PENDING_TRANSITIONS }>,
}

impl TransitionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, transition: ScheduledTransition) -> Result<(), StateError> {
        self.entries
            .try_push(transition)
            .map_err(|_| StateError::TransitionQueueFull {
                max: GameConfig::MAX_PENDING_TRANSITIONS,
            })
    }

    /// Earliest due time, if anything is pending.
    pub fn next_due(&self) -> Option<Timestamp> {
        self.entries.iter().map(|entry| entry.due).min()
    }

    /// Removes and returns the earliest entry due at or before `now`.
    pub fn pop_due(&mut self, now: Timestamp) -> Option<ScheduledTransition> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= now)
            .min_by_key(|(index, entry)| (entry.due, *index))
            .map(|(index, _)| index)?;
        Some(self.entries.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScheduledTransition> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Moves every due time `millis` earlier, saturating at zero.
    pub fn shift_earlier(&mut self, millis: u64) {
        for entry in &mut self.entries {
            entry.due = Timestamp(entry.due.as_millis().saturating_sub(millis));
        }
    }
}
