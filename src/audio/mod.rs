//! Sound output. The game only describes tones; an [`AudioSink`] decides
//! what to do with them.

pub mod cues;
pub mod sequencer;

pub use cues::cues_for;
pub use sequencer::MusicSequencer;

use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

/// One synthesized tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cue {
    /// Pitch in hertz.
    pub frequency: f32,
    /// Length in seconds.
    pub duration: f32,
    /// Peak gain, `0.0..=1.0`.
    pub volume: f32,
    pub waveform: Waveform,
}

impl Cue {
    pub const fn new(frequency: f32, duration: f32, volume: f32, waveform: Waveform) -> Self {
        Self {
            frequency,
            duration,
            volume,
            waveform,
        }
    }
}

pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

/// Sink that writes cues to the trace log instead of a sound device.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, cue: Cue) {
        trace!(
            hz = cue.frequency,
            secs = cue.duration,
            volume = cue.volume,
            waveform = ?cue.waveform,
            "cue"
        );
    }
}

/// Recording sink, handy for tests.
impl AudioSink for Vec<Cue> {
    fn play(&mut self, cue: Cue) {
        self.push(cue);
    }
}
