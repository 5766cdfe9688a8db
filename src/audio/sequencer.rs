//! Background music: a looping eight-step bass line, advanced by the frame
//! loop instead of its own timer.

use super::{Cue, Waveform};

const BASE_FREQ: f32 = 110.0;
/// Semitone offsets from the base note.
const SEQUENCE: [i32; 8] = [0, 0, 3, 5, 7, 7, 5, 3];
const STEP_MS: u64 = 200;
/// Note gain times the music bus gain.
const NOTE_VOLUME: f32 = 0.1 * 0.05;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MusicSequencer {
    step: usize,
    next_note_at: Option<u64>,
}

impl MusicSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.next_note_at.is_some()
    }

    /// Start from the first note. Does nothing if already playing.
    pub fn start(&mut self, now_ms: u64) {
        if self.next_note_at.is_none() {
            self.step = 0;
            self.next_note_at = Some(now_ms);
        }
    }

    pub fn stop(&mut self) {
        self.next_note_at = None;
    }

    /// Return the note due at `now_ms`, if any.
    ///
    /// At most one note per call. After a long stall the line resumes from
    /// `now_ms` rather than playing the missed notes back to back.
    pub fn advance(&mut self, now_ms: u64) -> Option<Cue> {
        let due = self.next_note_at?;
        if now_ms < due {
            return None;
        }
        let semitones = SEQUENCE[self.step % SEQUENCE.len()];
        self.step = (self.step + 1) % SEQUENCE.len();
        let next = due + STEP_MS;
        self.next_note_at = Some(if next <= now_ms { now_ms + STEP_MS } else { next });

        let frequency = BASE_FREQ * 2f32.powf(semitones as f32 / 12.0);
        Some(Cue::new(
            frequency,
            STEP_MS as f32 / 1000.0,
            NOTE_VOLUME,
            Waveform::Triangle,
        ))
    }
}
