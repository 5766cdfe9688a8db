//! Render-time positions between two ticks.
//!
//! The simulation moves in whole cells; the renderer draws each segment part
//! of the way from where it was before the last tick to where it is now.

use super::types::{Position, SnakeGame};
use crate::core::constants::LERP_SNAP_DISTANCE;

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Continuous position of every body segment, head first.
///
/// A segment with no previous position (it grew this tick) starts from its
/// predecessor's previous position. Segments that jumped more than one cell
/// (overload wrap, wall clamp) snap to their current cell.
pub fn interpolated_body(game: &SnakeGame, lerp_fraction: f64) -> Vec<(f64, f64)> {
    let t = if lerp_fraction.is_finite() {
        lerp_fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    game.snake
        .iter()
        .enumerate()
        .map(|(i, cur)| {
            let prev = previous_position(game, i).unwrap_or(*cur);
            let dx = (cur.x - prev.x) as f64;
            let dy = (cur.y - prev.y) as f64;
            if dx.abs() <= LERP_SNAP_DISTANCE && dy.abs() <= LERP_SNAP_DISTANCE {
                (
                    lerp(prev.x as f64, cur.x as f64, t),
                    lerp(prev.y as f64, cur.y as f64, t),
                )
            } else {
                (cur.x as f64, cur.y as f64)
            }
        })
        .collect()
}

fn previous_position(game: &SnakeGame, index: usize) -> Option<Position> {
    game.prev_snake.get(index).copied().or_else(|| {
        index
            .checked_sub(1)
            .and_then(|i| game.prev_snake.get(i).copied())
    })
}

/// Continuous boss food position, if one is on the board.
pub fn interpolated_boss_food(game: &SnakeGame, lerp_fraction: f64) -> Option<(f64, f64)> {
    let t = if lerp_fraction.is_finite() {
        lerp_fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    game.boss_food
        .map(|b| (lerp(b.prev_x, b.x, t), lerp(b.prev_y, b.y, t)))
}
