//! Audio sink for terminals: cues go to the log instead of a speaker.
use game_core::AudioCue;
use runtime::{AudioError, AudioSink};

#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingAudioSink;

impl AudioSink for LoggingAudioSink {
    fn play(&self, cue: AudioCue) -> Result<(), AudioError> {
        if cue.is_stop() {
            tracing::info!(target: "client::audio", cue = %cue, "stop");
        } else {
            tracing::info!(
                target: "client::audio",
                cue = %cue,
                volume = cue.volume(),
                looping = cue.is_looping(),
                "play"
            );
        }
        Ok(())
    }
}
