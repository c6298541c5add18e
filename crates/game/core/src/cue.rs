//! Audio cues emitted by state transitions.
//!
//! Cues are plain data. The host decides how (or whether) to play them.

/// Discrete sound trigger handed to the audio collaborator.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::IntoStaticStr, strum::Display,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AudioCue {
    NormalThemeStart,
    NormalThemeStop,
    BattleThemeStart,
    BattleThemeStop,
    SwordSwing,
    HerbUse,
    Victory,
    EnemyAttack,
}

impl AudioCue {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Suggested playback volume in `[0.0, 1.0]`.
    pub fn volume(self) -> f32 {
        match self {
            AudioCue::NormalThemeStart | AudioCue::NormalThemeStop => 0.4,
            AudioCue::BattleThemeStart | AudioCue::BattleThemeStop => 0.3,
            AudioCue::SwordSwing
            | AudioCue::HerbUse
            | AudioCue::Victory
            | AudioCue::EnemyAttack => 1.0,
        }
    }

    /// Theme starts loop until the matching stop cue.
    pub fn is_looping(self) -> bool {
        matches!(self, AudioCue::NormalThemeStart | AudioCue::BattleThemeStart)
    }

    pub fn is_stop(self) -> bool {
        matches!(self, AudioCue::NormalThemeStop | AudioCue::BattleThemeStop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn only_theme_starts_loop() {
        let looping: Vec<AudioCue> = AudioCue::iter().filter(|cue| cue.is_looping()).collect();
        assert_eq!(
            looping,
            vec![AudioCue::NormalThemeStart, AudioCue::BattleThemeStart]
        );
    }

    #[test]
    fn volumes_stay_in_unit_range() {
        for cue in AudioCue::iter() {
            assert!((0.0..=1.0).contains(&cue.volume()), "{cue}");
        }
        assert_eq!(AudioCue::BattleThemeStart.as_str(), "battle_theme_start");
    }
}
