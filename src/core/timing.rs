//! Frame clock: decides when a simulation tick is due and how far the
//! renderer is between two ticks.

use super::constants::DASH_TICK_MS;

/// What the clock decided for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTiming {
    pub tick_due: bool,
    /// Real time since the previous tick, reported when a tick is due.
    pub elapsed_ms: u64,
    /// Progress toward the next tick in `[0, 1]`.
    pub lerp: f64,
}

/// Tick interval after dash and slow-motion adjustments.
///
/// Dashing uses the fast dash interval; a time scale below 1 stretches the
/// interval proportionally.
pub fn effective_interval(dashing: bool, speed_ms: u64, time_scale: f64) -> f64 {
    let base = if dashing { DASH_TICK_MS } else { speed_ms } as f64;
    if time_scale < 1.0 && time_scale > 0.0 {
        base / time_scale
    } else {
        base
    }
}

/// Fraction of the interval elapsed since the last tick, clamped to `[0, 1]`.
/// Non-finite results (zero interval) count as zero.
pub fn lerp_fraction(since_tick_ms: u64, interval_ms: f64) -> f64 {
    let t = since_tick_ms as f64 / interval_ms;
    if t.is_finite() {
        t.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// At most one tick per frame, with no catch-up after a stall.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameClock {
    last_tick_ms: u64,
    armed: bool,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the clock and count the next interval from `now_ms`.
    pub fn start(&mut self, now_ms: u64) {
        self.last_tick_ms = now_ms;
        self.armed = true;
    }

    /// Re-arm after a pause. The time spent paused is not counted.
    pub fn resume(&mut self, now_ms: u64) {
        self.start(now_ms);
    }

    pub fn pause(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn last_tick_ms(&self) -> u64 {
        self.last_tick_ms
    }

    /// Advance the clock for one frame.
    pub fn frame(&mut self, now_ms: u64, interval_ms: f64) -> FrameTiming {
        if !self.armed {
            return FrameTiming {
                tick_due: false,
                elapsed_ms: 0,
                lerp: 0.0,
            };
        }
        let since = now_ms.saturating_sub(self.last_tick_ms);
        if since as f64 > interval_ms {
            self.last_tick_ms = now_ms;
            return FrameTiming {
                tick_due: true,
                elapsed_ms: since,
                lerp: 0.0,
            };
        }
        FrameTiming {
            tick_due: false,
            elapsed_ms: 0,
            lerp: lerp_fraction(since, interval_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_interval() {
        assert_eq!(effective_interval(false, 150, 1.0), 150.0);
        assert_eq!(effective_interval(true, 150, 1.0), 30.0);
        assert_eq!(effective_interval(true, 150, 0.5), 60.0);
        assert_eq!(effective_interval(false, 100, 0.5), 200.0);
    }

    #[test]
    fn test_tick_requires_strictly_more_than_interval() {
        let mut clock = FrameClock::new();
        clock.start(1_000);
        assert!(!clock.frame(1_150, 150.0).tick_due);
        let timing = clock.frame(1_151, 150.0);
        assert!(timing.tick_due);
        assert_eq!(timing.elapsed_ms, 151);
        assert_eq!(clock.last_tick_ms(), 1_151);
    }

    #[test]
    fn test_no_catch_up_after_stall() {
        let mut clock = FrameClock::new();
        clock.start(0);
        assert!(clock.frame(10_000, 150.0).tick_due);
        assert!(!clock.frame(10_016, 150.0).tick_due);
    }

    #[test]
    fn test_lerp_progresses_between_ticks() {
        let mut clock = FrameClock::new();
        clock.start(0);
        assert_eq!(clock.frame(75, 150.0).lerp, 0.5);
        assert_eq!(clock.frame(150, 150.0).lerp, 1.0);
    }

    #[test]
    fn test_lerp_fraction_edge_cases() {
        assert_eq!(lerp_fraction(10, 0.0), 0.0);
        assert_eq!(lerp_fraction(0, 0.0), 0.0);
        assert_eq!(lerp_fraction(500, 100.0), 1.0);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut clock = FrameClock::new();
        clock.start(0);
        clock.pause();
        assert!(!clock.is_armed());
        assert!(!clock.frame(5_000, 150.0).tick_due);
        clock.resume(5_000);
        assert!(!clock.frame(5_100, 150.0).tick_due);
        assert!(clock.frame(5_200, 150.0).tick_due);
    }
}
