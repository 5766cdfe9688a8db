//! Enemy pursuit and contact resolution. Runs once per tick, before the step.

use super::death::trigger_death;
use super::events::GameEvent;
use super::types::SnakeGame;
use crate::core::constants::{ENEMY_CHASE_MIN_DISTANCE, ENEMY_CONTACT_RADIUS, ENEMY_KILL_POINTS};
use tracing::debug;

/// Move every enemy toward the head and resolve contacts.
///
/// Touching an enemy while invulnerable destroys it for points. Otherwise the
/// snake dies and the remaining enemies are left where they are.
pub fn update_enemies(game: &mut SnakeGame, now_ms: u64) {
    let Some(head) = game.head() else {
        return;
    };
    let (hx, hy) = (head.x as f64, head.y as f64);

    let mut i = game.enemies.len();
    while i > 0 {
        i -= 1;
        let enemy = &mut game.enemies[i];
        let (ex, ey) = game.grid.sanitize(enemy.x, enemy.y);
        enemy.x = ex;
        enemy.y = ey;

        let dx = hx - enemy.x;
        let dy = hy - enemy.y;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist > ENEMY_CHASE_MIN_DISTANCE {
            enemy.x += dx / dist * enemy.speed;
            enemy.y += dy / dist * enemy.speed;
        }

        let touching = (enemy.x - hx).abs() < ENEMY_CONTACT_RADIUS
            && (enemy.y - hy).abs() < ENEMY_CONTACT_RADIUS;
        if !touching {
            continue;
        }

        if game.is_invulnerable(now_ms) {
            game.enemies.remove(i);
            game.score += ENEMY_KILL_POINTS;
            game.stats.enemies_killed += 1;
            game.events.push(GameEvent::EnemyKilled);
            debug!(remaining = game.enemies.len(), "enemy destroyed");
        } else {
            trigger_death(game, now_ms);
            return;
        }
    }
}
