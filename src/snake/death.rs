//! Death sequence: `Alive → Dying → GameOver`.

use super::events::GameEvent;
use super::types::{LifeState, SnakeGame};
use crate::core::constants::{CURRENCY_REWARD_DIVISOR, DEATH_DELAY_MS};
use tracing::{info, warn};

/// Final numbers for a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub score: u32,
    pub level: u32,
    /// Currency earned for the run.
    pub reward: u32,
    pub total_distance: u64,
    pub boosts_eaten: u32,
    pub frenzy_triggers: u32,
    pub enemies_killed: u32,
}

pub fn currency_reward(score: u32) -> u32 {
    score / CURRENCY_REWARD_DIVISOR
}

/// Start the death sequence.
///
/// Does nothing while invulnerable or if the snake is already dying or dead,
/// so repeated triggers within one tick start only one sequence. Returns true
/// if a new sequence started.
pub fn trigger_death(game: &mut SnakeGame, now_ms: u64) -> bool {
    if game.is_invulnerable(now_ms) || !game.is_alive() {
        return false;
    }
    game.life = LifeState::Dying {
        game_over_at: now_ms + DEATH_DELAY_MS,
    };
    game.events.push(GameEvent::Died);
    info!(score = game.score, level = game.level, "snake died");
    true
}

/// True once the death delay has run out.
pub fn game_over_due(game: &SnakeGame, now_ms: u64) -> bool {
    matches!(game.life, LifeState::Dying { game_over_at } if now_ms >= game_over_at)
}

/// Finish the run and compute its summary.
///
/// Callable from `Dying`, or directly from `Alive` when a step fails and the
/// run is ended without the death animation. Returns `None` if the run is
/// already over.
pub fn finish_game_over(game: &mut SnakeGame) -> Option<RunSummary> {
    if game.is_game_over() {
        return None;
    }
    game.life = LifeState::GameOver;
    game.active_power_up = None;
    game.overload_until = None;
    game.dash.active = false;

    let summary = RunSummary {
        score: game.score,
        level: game.level,
        reward: currency_reward(game.score),
        total_distance: game.stats.total_distance,
        boosts_eaten: game.stats.boosts_eaten,
        frenzy_triggers: game.stats.frenzy_triggers,
        enemies_killed: game.stats.enemies_killed,
    };
    game.events.push(GameEvent::GameOver(summary));
    info!(
        score = summary.score,
        level = summary.level,
        reward = summary.reward,
        "game over"
    );
    Some(summary)
}

/// End the run immediately, skipping the death animation.
pub fn force_game_over(game: &mut SnakeGame) -> Option<RunSummary> {
    if !game.is_game_over() {
        warn!(life = ?game.life, "forcing game over");
    }
    finish_game_over(game)
}
