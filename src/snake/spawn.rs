//! Placement rules for food, enemies, the star item, and boss food.

use super::events::GameEvent;
use super::grid::Grid;
use super::types::{BossFood, Enemy, Food, FoodKind, Position, SnakeGame, StarItem};
use crate::core::constants::*;
use rand::Rng;

/// Replace the ordinary food item.
///
/// The pity counter forces a special item on every fifth spawn; otherwise a
/// special item appears with a small fixed chance.
pub fn spawn_food<R: Rng>(game: &mut SnakeGame, rng: &mut R) {
    game.special_pity_counter += 1;
    let special = game.special_pity_counter >= SPECIAL_PITY_THRESHOLD
        || rng.gen_bool(SPECIAL_FOOD_CHANCE);
    if special {
        game.special_pity_counter = 0;
    }
    let kind = if special {
        FoodKind::SPECIALS[rng.gen_range(0..FoodKind::SPECIALS.len())]
    } else {
        FoodKind::Normal
    };

    let pos = find_food_cell(game, rng).unwrap_or_else(|| game.grid.center());
    game.food = Food {
        x: pos.x as f64,
        y: pos.y as f64,
        kind,
    };
}

/// True if any obstacle is on or next to `pos` (including diagonals).
fn near_obstacle(game: &SnakeGame, pos: Position) -> bool {
    game.obstacles
        .iter()
        .any(|o| (o.x - pos.x).abs() <= 1 && (o.y - pos.y).abs() <= 1)
}

fn is_valid_food_cell(game: &SnakeGame, pos: Position) -> bool {
    !game.is_on_snake(pos) && !near_obstacle(game, pos)
}

/// Move the current food off a cell that became invalid, for example after a
/// level change placed new obstacles. The kind is kept and the pity counter is
/// untouched. Returns true if the food moved.
pub fn relocate_food_if_blocked<R: Rng>(game: &mut SnakeGame, rng: &mut R) -> bool {
    let current = Position::new(game.food.x.round() as i32, game.food.y.round() as i32);
    if is_valid_food_cell(game, current) {
        return false;
    }
    let pos = find_food_cell(game, rng).unwrap_or_else(|| game.grid.center());
    game.food.x = pos.x as f64;
    game.food.y = pos.y as f64;
    true
}

/// Pick a food cell inside the one-cell margin.
///
/// Random attempts come first, biased toward the middle of the board early
/// on. If none succeed, the inner area is scanned in column order for the
/// first valid cell, then for the first cell that is merely unoccupied.
pub fn find_food_cell<R: Rng>(game: &SnakeGame, rng: &mut R) -> Option<Position> {
    let Grid { cols, rows } = game.grid;
    let (min_x, max_x) = (1, cols - 2);
    let (min_y, max_y) = (1, rows - 2);
    if max_x < min_x || max_y < min_y {
        return None;
    }

    for attempt in 1..=FOOD_SPAWN_ATTEMPTS {
        let pos = if attempt < FOOD_CENTER_BIAS_ATTEMPTS && rng.gen_bool(FOOD_CENTER_BIAS_CHANCE) {
            let margin_w = ((cols as f64 * FOOD_CENTER_MARGIN_RATIO) as i32).max(min_x);
            let margin_h = ((rows as f64 * FOOD_CENTER_MARGIN_RATIO) as i32).max(min_y);
            Position::new(
                margin_w + rng.gen_range(0..(cols - margin_w * 2)),
                margin_h + rng.gen_range(0..(rows - margin_h * 2)),
            )
        } else {
            Position::new(
                rng.gen_range(min_x..=max_x),
                rng.gen_range(min_y..=max_y),
            )
        };
        if is_valid_food_cell(game, pos) {
            return Some(pos);
        }
    }

    let inner = || (min_x..=max_x).flat_map(move |x| (min_y..=max_y).map(move |y| Position::new(x, y)));
    inner()
        .find(|&pos| is_valid_food_cell(game, pos))
        .or_else(|| inner().find(|&pos| !game.is_on_snake(pos) && !game.is_obstacle(pos)))
}

/// Number of enemies in the wave for a level: one per two levels, capped.
pub fn enemy_wave_size(level: u32) -> u32 {
    MAX_ENEMIES.min(level.div_ceil(2))
}

pub fn enemy_speed(level: u32) -> f64 {
    ENEMY_BASE_SPEED + level as f64 * ENEMY_SPEED_PER_LEVEL
}

/// Replace all enemies with a fresh wave for the current level and make sure
/// a star item is on the board.
pub fn spawn_enemy_wave<R: Rng>(game: &mut SnakeGame, rng: &mut R) {
    game.enemies.clear();
    for _ in 0..enemy_wave_size(game.level) {
        let enemy = spawn_enemy(game, rng);
        game.enemies.push(enemy);
    }
    spawn_star(game, rng);
}

/// Place one enemy well away from the head (Manhattan distance above the
/// safe radius). Falls back to the grid corner farthest from the head.
pub fn spawn_enemy<R: Rng>(game: &SnakeGame, rng: &mut R) -> Enemy {
    let grid = game.grid;
    let head = game.head();
    let far_enough = |pos: Position| match head {
        Some(h) => (pos.x - h.x).abs() + (pos.y - h.y).abs() > ENEMY_SAFE_DISTANCE,
        None => true,
    };

    let pos = (0..ENEMY_SPAWN_ATTEMPTS)
        .map(|_| {
            Position::new(
                rng.gen_range(0..grid.cols),
                rng.gen_range(0..grid.rows),
            )
        })
        .find(|&pos| far_enough(pos))
        .unwrap_or_else(|| farthest_corner(grid, head));

    Enemy {
        x: pos.x as f64,
        y: pos.y as f64,
        speed: enemy_speed(game.level),
    }
}

fn farthest_corner(grid: Grid, head: Option<Position>) -> Position {
    let corners = [
        Position::new(0, 0),
        Position::new(grid.cols - 1, 0),
        Position::new(0, grid.rows - 1),
        Position::new(grid.cols - 1, grid.rows - 1),
    ];
    let Some(h) = head else {
        return corners[0];
    };
    corners
        .into_iter()
        .max_by_key(|c| (c.x - h.x).abs() + (c.y - h.y).abs())
        .unwrap_or(corners[0])
}

/// Place the star item unless one is already waiting to be collected.
pub fn spawn_star<R: Rng>(game: &mut SnakeGame, rng: &mut R) {
    if game.star.is_some() {
        return;
    }
    game.star = Some(StarItem {
        x: rng.gen_range(1..game.grid.cols - 1),
        y: rng.gen_range(1..game.grid.rows - 1),
    });
}

/// Launch a boss food item away from the edges with a random diagonal heading.
pub fn spawn_boss_food<R: Rng>(game: &mut SnakeGame, rng: &mut R) {
    let grid = game.grid;
    let x = (BOSS_FOOD_MARGIN + rng.gen_range(0..grid.cols - BOSS_FOOD_MARGIN * 2)) as f64;
    let y = (BOSS_FOOD_MARGIN + rng.gen_range(0..grid.rows - BOSS_FOOD_MARGIN * 2)) as f64;
    let vx = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    let vy = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };

    game.boss_food = Some(BossFood {
        x,
        y,
        vx,
        vy,
        prev_x: x,
        prev_y: y,
        life: BOSS_FOOD_LIFE_TICKS,
        points: BOSS_FOOD_POINTS,
    });
    game.events.push(GameEvent::BossFoodSpawned);
}
