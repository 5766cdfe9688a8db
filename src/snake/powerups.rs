//! Power-ups, combo/overload, invincibility, and the dash state machine.
//!
//! Deferred effects (power-up expiry, overload expiry) are stored as
//! deadlines on the game and fired by [`fire_due_timers`] at the start of
//! each frame. Re-arming an effect overwrites its deadline, which is how a
//! superseded timer gets cancelled.

use super::events::GameEvent;
use super::types::{ActivePowerUp, FoodKind, PowerUp, SnakeGame};
use crate::core::constants::*;
use thiserror::Error;
use tracing::debug;

/// Why a dash request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DashRejection {
    #[error("already dashing")]
    AlreadyDashing,
    #[error("dash on cooldown ({remaining_ms}ms left)")]
    OnCooldown { remaining_ms: u64 },
    #[error("need {cost} score to dash, have {score}")]
    InsufficientScore { cost: u32, score: u32 },
}

/// Apply the effects of eating a food item: score, combo, overload, and the
/// item's power-up. Returns the points awarded.
pub fn resolve_eat(game: &mut SnakeGame, kind: FoodKind, now_ms: u64) -> u32 {
    let combo_continues = game
        .last_eat_at
        .is_some_and(|last| now_ms.saturating_sub(last) < COMBO_WINDOW_MS);
    game.combo_count = if combo_continues {
        game.combo_count + 1
    } else {
        1
    };
    game.last_eat_at = Some(now_ms);

    if game.combo_count >= OVERLOAD_COMBO_THRESHOLD && !game.is_overloaded() {
        activate_overload(game, now_ms);
    }

    if let Some(power_up) = kind.power_up() {
        apply_power_up(game, power_up, now_ms);
        game.stats.boosts_eaten += 1;
    }

    let points = kind.points();
    game.score += points;
    game.events.push(GameEvent::FoodEaten {
        kind,
        points,
        combo: game.combo_count,
    });
    debug!(?kind, points, combo = game.combo_count, "food eaten");
    points
}

/// Start (or restart) a timed power-up, replacing any active one.
pub fn apply_power_up(game: &mut SnakeGame, kind: PowerUp, now_ms: u64) {
    let mut duration = kind.base_duration_ms();
    if game.upgrades.duration {
        duration = duration * DURATION_UPGRADE_PERCENT / 100;
    }
    game.active_power_up = Some(ActivePowerUp {
        kind,
        expires_at: now_ms + duration,
    });
    game.speed_ms = kind.speed_ms();
    game.events.push(GameEvent::PowerUpStarted { kind });
    debug!(power_up = kind.name(), duration, "power-up started");
}

pub fn activate_overload(game: &mut SnakeGame, now_ms: u64) {
    game.overload_until = Some(now_ms + OVERLOAD_DURATION_MS);
    game.stats.frenzy_triggers += 1;
    game.events.push(GameEvent::OverloadStarted);
    debug!(combo = game.combo_count, "overload started");
}

pub fn activate_invincibility(game: &mut SnakeGame, now_ms: u64) {
    game.invincible_until = now_ms + INVINCIBILITY_MS;
}

/// Fire every deferred effect whose deadline has passed.
///
/// An expiring power-up resets the speed to the base interval, not the
/// level-derived one.
pub fn fire_due_timers(game: &mut SnakeGame, now_ms: u64) {
    if let Some(active) = game.active_power_up {
        if now_ms >= active.expires_at {
            game.active_power_up = None;
            game.speed_ms = BASE_SPEED_MS;
            game.events.push(GameEvent::PowerUpExpired { kind: active.kind });
            debug!(power_up = active.kind.name(), "power-up expired");
        }
    }
    if let Some(until) = game.overload_until {
        if now_ms >= until {
            game.overload_until = None;
            game.events.push(GameEvent::OverloadEnded);
        }
    }
}

/// Try to start a dash. On success the cost is deducted from the score.
pub fn activate_dash(game: &mut SnakeGame) -> Result<(), DashRejection> {
    let rejection = if game.dash.active {
        Some(DashRejection::AlreadyDashing)
    } else if game.dash.cooldown_ms > 0 {
        Some(DashRejection::OnCooldown {
            remaining_ms: game.dash.cooldown_ms,
        })
    } else if game.score < DASH_COST {
        Some(DashRejection::InsufficientScore {
            cost: DASH_COST,
            score: game.score,
        })
    } else {
        None
    };

    if let Some(reason) = rejection {
        game.events.push(GameEvent::DashRejected(reason));
        return Err(reason);
    }

    game.score -= DASH_COST;
    game.dash.active = true;
    game.dash.duration_ms = DASH_MAX_DURATION_MS;
    game.dash.cooldown_ms = DASH_MAX_COOLDOWN_MS;
    game.stats.dash_used = true;
    game.time_scale = DASH_TIME_SCALE;
    game.events.push(GameEvent::DashActivated);
    debug!(score = game.score, "dash activated");
    Ok(())
}

/// Advance dash timers by the real time elapsed since the previous tick.
pub fn tick_dash(game: &mut SnakeGame, elapsed_ms: u64) {
    game.dash.cooldown_ms = game.dash.cooldown_ms.saturating_sub(elapsed_ms);
    if game.dash.active {
        game.dash.duration_ms = game.dash.duration_ms.saturating_sub(elapsed_ms);
        if game.dash.duration_ms == 0 {
            game.dash.active = false;
        }
    }
}

/// Ease the slow-motion factor back toward normal speed. Called once per frame.
pub fn recover_time_scale(game: &mut SnakeGame) {
    if game.time_scale < 1.0 {
        game.time_scale = (game.time_scale + TIME_SCALE_RECOVERY_PER_FRAME).min(1.0);
    }
}
