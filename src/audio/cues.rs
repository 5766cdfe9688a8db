//! Sound cue table for game events.

use super::{Cue, Waveform};
use crate::snake::events::GameEvent;

pub const EAT: Cue = Cue::new(1320.0, 0.1, 0.1, Waveform::Sine);
pub const OVERLOAD: Cue = Cue::new(1760.0, 0.6, 0.2, Waveform::Sawtooth);
pub const STAR: Cue = Cue::new(880.0, 0.1, 0.1, Waveform::Square);
pub const SHIELD_BREAK: Cue = Cue::new(440.0, 0.5, 0.2, Waveform::Sawtooth);
pub const DASH: Cue = Cue::new(1760.0, 0.2, 0.15, Waveform::Sawtooth);
pub const REJECT: Cue = Cue::new(220.0, 0.1, 0.1, Waveform::Square);
pub const DEATH: Cue = Cue::new(50.0, 1.5, 0.8, Waveform::Sawtooth);
pub const GAME_OVER: Cue = Cue::new(110.0, 0.2, 0.8, Waveform::Sawtooth);
pub const BOSS_SPAWN: Cue = Cue::new(880.0, 0.3, 0.2, Waveform::Sawtooth);
pub const ACHIEVEMENT: [Cue; 2] = [
    Cue::new(2640.0, 0.3, 0.2, Waveform::Sine),
    Cue::new(3300.0, 0.2, 0.15, Waveform::Sine),
];
pub const CHALLENGE: Cue = Cue::new(2200.0, 0.3, 0.15, Waveform::Sine);
pub const PURCHASE: Cue = Cue::new(880.0, 0.2, 0.1, Waveform::Sine);

/// Cues to play for an event, in order. Most events play one or none.
pub fn cues_for(event: &GameEvent) -> &'static [Cue] {
    match event {
        GameEvent::FoodEaten { .. } | GameEvent::BossFoodEaten { .. } => &[EAT],
        GameEvent::OverloadStarted => &[OVERLOAD],
        GameEvent::StarCollected => &[STAR],
        GameEvent::ShieldBroken => &[SHIELD_BREAK],
        GameEvent::DashActivated => &[DASH],
        GameEvent::DashRejected(_) => &[REJECT],
        GameEvent::Died => &[DEATH],
        GameEvent::GameOver(_) => &[GAME_OVER],
        GameEvent::BossFoodSpawned => &[BOSS_SPAWN],
        GameEvent::AchievementUnlocked { .. } => &ACHIEVEMENT,
        GameEvent::ChallengeCompleted { .. } => &[CHALLENGE],
        GameEvent::RunStarted
        | GameEvent::PowerUpStarted { .. }
        | GameEvent::PowerUpExpired { .. }
        | GameEvent::OverloadEnded
        | GameEvent::BossFoodExpired
        | GameEvent::EnemyKilled
        | GameEvent::WallBump
        | GameEvent::LevelUp { .. } => &[],
    }
}
