//! Audio collaborator seam.
//!
//! The worker hands every cue an outcome produces to an [`AudioSink`]. A sink
//! failure is logged and otherwise ignored; sound never blocks the game.
use thiserror::Error;

use game_core::AudioCue;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no asset registered for cue '{cue}'")]
    AssetUnavailable { cue: AudioCue },

    #[error("audio backend failure: {0}")]
    Backend(String),
}

/// Plays (or stops) sounds for cues.
///
/// Called from the simulation worker, so implementations must return
/// quickly; hand long work off to another thread.
pub trait AudioSink: Send + Sync + 'static {
    fn play(&self, cue: AudioCue) -> Result<(), AudioError>;
}

/// Sink that discards every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudioSink;

impl AudioSink for NullAudioSink {
    fn play(&self, _cue: AudioCue) -> Result<(), AudioError> {
        Ok(())
    }
}
