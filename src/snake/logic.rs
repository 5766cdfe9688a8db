//! Snake game logic: movement, input processing, collision detection,
//! eating, growth, and level progression.

use super::death::trigger_death;
use super::events::GameEvent;
use super::powerups::{activate_dash, activate_invincibility, resolve_eat, tick_dash};
use super::spawn::{relocate_food_if_blocked, spawn_boss_food, spawn_enemy_wave, spawn_food};
use super::types::*;
use crate::core::constants::*;
use crate::error::GameError;
use rand::Rng;
use tracing::{debug, info};

/// UI-agnostic input actions for Snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeInput {
    Up,
    Down,
    Left,
    Right,
    Dash,
}

/// Wall-clock information for one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepContext {
    pub now_ms: u64,
    /// Real time since the previous step; drives the dash timers.
    pub elapsed_ms: u64,
}

/// Process player input. Ignored unless the snake is alive.
pub fn process_input(game: &mut SnakeGame, input: SnakeInput) {
    if !game.is_alive() {
        return;
    }
    let dir = match input {
        SnakeInput::Up => Direction::Up,
        SnakeInput::Down => Direction::Down,
        SnakeInput::Left => Direction::Left,
        SnakeInput::Right => Direction::Right,
        SnakeInput::Dash => {
            // Rejections are reported through the event queue
            let _ = activate_dash(game);
            return;
        }
    };
    // Queue for the next tick; a 180-degree turn would run into the neck
    if dir != game.direction.opposite() {
        game.next_direction = dir;
    }
}

/// Copy current positions so the renderer can interpolate toward the next tick.
pub fn snapshot_previous(game: &mut SnakeGame) {
    game.prev_snake.clear();
    game.prev_snake.extend(game.snake.iter().copied());
    if let Some(boss) = game.boss_food.as_mut() {
        boss.prev_x = boss.x;
        boss.prev_y = boss.y;
    }
}

/// What the candidate head position runs into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Collision {
    wall: bool,
    body: bool,
    obstacle: bool,
}

impl Collision {
    fn any(&self) -> bool {
        self.wall || self.body || self.obstacle
    }
}

/// Single movement step.
///
/// Does nothing unless the snake is alive. An `Err` means the game state is
/// unusable; the caller ends the run.
pub fn step<R: Rng>(game: &mut SnakeGame, ctx: StepContext, rng: &mut R) -> Result<(), GameError> {
    if !game.is_alive() {
        return Ok(());
    }
    let head = game.head().ok_or(GameError::EmptySnake)?;
    game.tick_count += 1;

    tick_dash(game, ctx.elapsed_ms);

    // Apply buffered direction
    game.direction = game.next_direction;
    let mut new_head = head.offset(game.direction);
    if game.is_overloaded() {
        new_head = game.grid.wrap(new_head);
    }

    if game.upgrades.magnet {
        pull_food(game, new_head);
    }

    let collision = Collision {
        wall: !game.grid.contains(new_head),
        body: game.is_on_snake(new_head),
        obstacle: game.is_obstacle(new_head),
    };
    if collision.any() {
        if game.is_invulnerable(ctx.now_ms) {
            if collision.wall {
                new_head = game.grid.clamp(new_head);
                game.events.push(GameEvent::WallBump);
            }
        } else if game.shield_active && !collision.body {
            game.shield_active = false;
            new_head = game.grid.clamp(new_head);
            game.events.push(GameEvent::ShieldBroken);
            debug!("shield absorbed a collision");
        } else {
            trigger_death(game, ctx.now_ms);
            return Ok(());
        }
    }

    // Move: add new head
    game.snake.push_front(new_head);
    game.stats.total_distance += 1;

    collect_star(game, new_head, ctx.now_ms);
    advance_boss_food(game, new_head);

    let (fx, fy) = game.grid.sanitize(game.food.x, game.food.y);
    game.food.x = fx;
    game.food.y = fy;
    if new_head.distance_to(fx, fy) < FOOD_EAT_RADIUS {
        resolve_eat(game, game.food.kind, ctx.now_ms);
        spawn_food(game, rng);
        if game.snake.len() < game.max_length() {
            game.growth_pending += 1;
        }
    }

    // Growing keeps the tail for this step
    if game.growth_pending > 0 {
        game.growth_pending -= 1;
    } else {
        game.snake.pop_back();
    }
    let max_len = game.max_length();
    game.snake.truncate(max_len);

    check_level_up(game, rng);
    Ok(())
}

/// Magnet upgrade: drag nearby food halfway toward the head each step.
fn pull_food(game: &mut SnakeGame, head: Position) {
    let dist = head.distance_to(game.food.x, game.food.y);
    if dist > MAGNET_MIN_DISTANCE && dist < MAGNET_RANGE {
        game.food.x += (head.x as f64 - game.food.x) * MAGNET_PULL;
        game.food.y += (head.y as f64 - game.food.y) * MAGNET_PULL;
    }
}

fn collect_star(game: &mut SnakeGame, head: Position, now_ms: u64) {
    let Some(star) = game.star else {
        return;
    };
    let near = ((head.x - star.x) as f64).abs() < STAR_PICKUP_TOLERANCE
        && ((head.y - star.y) as f64).abs() < STAR_PICKUP_TOLERANCE;
    if near {
        game.score += STAR_POINTS;
        activate_invincibility(game, now_ms);
        game.star = None;
        game.events.push(GameEvent::StarCollected);
        debug!("star collected");
    }
}

/// Move the boss food, bounce it off the edges, and check for a catch.
fn advance_boss_food(game: &mut SnakeGame, head: Position) {
    let Some(mut boss) = game.boss_food else {
        return;
    };
    let (cols, rows) = (game.grid.cols as f64, game.grid.rows as f64);

    boss.x += boss.vx * BOSS_FOOD_STEP;
    boss.y += boss.vy * BOSS_FOOD_STEP;
    let (x, y) = game.grid.sanitize(boss.x, boss.y);
    boss.x = x;
    boss.y = y;
    boss.life = boss.life.saturating_sub(1);
    if boss.x < 0.0 || boss.x >= cols {
        boss.vx = -boss.vx;
    }
    if boss.y < 0.0 || boss.y >= rows {
        boss.vy = -boss.vy;
    }

    let caught = (head.x as f64 - boss.x).abs() < BOSS_FOOD_PICKUP_TOLERANCE
        && (head.y as f64 - boss.y).abs() < BOSS_FOOD_PICKUP_TOLERANCE;
    if caught {
        game.score += boss.points;
        game.growth_pending += BOSS_FOOD_GROWTH;
        game.boss_food = None;
        game.events.push(GameEvent::BossFoodEaten {
            points: boss.points,
        });
    } else if boss.life == 0 {
        game.boss_food = None;
        game.events.push(GameEvent::BossFoodExpired);
    } else {
        game.boss_food = Some(boss);
    }
}

/// Level for a score: one level per hundred points, starting at 1.
pub fn level_for_score(score: u32) -> u32 {
    score / POINTS_PER_LEVEL + 1
}

/// Tick interval for a level, floored at the minimum speed.
pub fn speed_for_level(level: u32) -> u64 {
    BASE_SPEED_MS
        .saturating_sub(level.saturating_sub(1) as u64 * SPEED_STEP_PER_LEVEL_MS)
        .max(MIN_SPEED_MS)
}

/// Advance the level when the score has crossed the next threshold.
fn check_level_up<R: Rng>(game: &mut SnakeGame, rng: &mut R) {
    let new_level = level_for_score(game.score);
    if new_level <= game.level {
        return;
    }
    game.level = new_level;
    game.speed_ms = speed_for_level(new_level);
    game.obstacles = game.grid.obstacles_for_level(new_level);
    if relocate_food_if_blocked(game, rng) {
        debug!(x = game.food.x, y = game.food.y, "food moved clear of new obstacles");
    }
    spawn_enemy_wave(game, rng);
    if new_level >= BOSS_FOOD_MIN_LEVEL {
        spawn_boss_food(game, rng);
    }
    game.events.push(GameEvent::LevelUp { level: new_level });
    info!(level = new_level, speed_ms = game.speed_ms, "level up");
}
