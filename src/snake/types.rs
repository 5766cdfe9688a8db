//! Snake game data structures.
//!
//! Everything the simulation owns for one run: the snake itself, the items
//! on the board, hazards, and the score/power-up/dash bookkeeping.

use super::events::GameEvent;
use super::grid::Grid;
use super::spawn::{spawn_enemy_wave, spawn_food};
use crate::core::config::GameConfig;
use crate::core::constants::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Cardinal direction for snake movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the (dx, dy) delta for this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// A cell on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Euclidean distance to a continuous point.
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        let dx = self.x as f64 - x;
        let dy = self.y as f64 - y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// What an ordinary food item grants when eaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodKind {
    Normal,
    Fire,
    Ice,
    Lightning,
}

impl FoodKind {
    pub const SPECIALS: [FoodKind; 3] = [FoodKind::Fire, FoodKind::Ice, FoodKind::Lightning];

    pub fn points(&self) -> u32 {
        match self {
            Self::Normal => NORMAL_FOOD_POINTS,
            Self::Fire => FIRE_FOOD_POINTS,
            Self::Ice => ICE_FOOD_POINTS,
            Self::Lightning => LIGHTNING_FOOD_POINTS,
        }
    }

    pub fn power_up(&self) -> Option<PowerUp> {
        match self {
            Self::Normal => None,
            Self::Fire => Some(PowerUp::Fire),
            Self::Ice => Some(PowerUp::Ice),
            Self::Lightning => Some(PowerUp::Lightning),
        }
    }

    pub fn is_special(&self) -> bool {
        !matches!(self, Self::Normal)
    }
}

/// Timed speed modifier granted by special food.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUp {
    Fire,
    Ice,
    Lightning,
}

impl PowerUp {
    /// Tick interval while the power-up is active.
    pub fn speed_ms(&self) -> u64 {
        match self {
            Self::Fire => FIRE_SPEED_MS,
            Self::Ice => ICE_SPEED_MS,
            Self::Lightning => LIGHTNING_SPEED_MS,
        }
    }

    pub fn base_duration_ms(&self) -> u64 {
        match self {
            Self::Fire => FIRE_DURATION_MS,
            Self::Ice => ICE_DURATION_MS,
            Self::Lightning => LIGHTNING_DURATION_MS,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Ice => "Ice",
            Self::Lightning => "Lightning",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePowerUp {
    pub kind: PowerUp,
    pub expires_at: u64,
}

/// The single ordinary food item. Continuous so the magnet can pull it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Food {
    pub x: f64,
    pub y: f64,
    pub kind: FoodKind,
}

/// Moving bonus target that bounces off the grid edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BossFood {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub prev_x: f64,
    pub prev_y: f64,
    /// Remaining lifetime in ticks.
    pub life: u32,
    pub points: u32,
}

/// Pickup granting timed invincibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarItem {
    pub x: i32,
    pub y: i32,
}

/// Pursuer with a continuous position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub x: f64,
    pub y: f64,
    pub speed: f64,
}

/// Permanent upgrades bought in the shop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Upgrades {
    pub magnet: bool,
    pub shield: bool,
    pub duration: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashState {
    pub active: bool,
    pub duration_ms: u64,
    pub cooldown_ms: u64,
}

/// Death sequence state. Pausing is tracked by the session, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeState {
    Alive,
    /// Simulation frozen while the death effects play out.
    Dying { game_over_at: u64 },
    GameOver,
}

/// Per-run counters shown on the game-over screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub total_distance: u64,
    pub boosts_eaten: u32,
    pub frenzy_triggers: u32,
    pub enemies_killed: u32,
    pub dash_used: bool,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct SnakeGame {
    pub grid: Grid,
    pub life: LifeState,

    // Snake state
    /// Snake body segments. Head is at the front (index 0).
    pub snake: VecDeque<Position>,
    /// Body as it was before the most recent tick, for interpolation.
    pub prev_snake: Vec<Position>,
    /// Current movement direction.
    pub direction: Direction,
    /// Buffered next direction (prevents 180-degree reversal within a single step).
    pub next_direction: Direction,
    pub growth_pending: u32,

    // Board items
    pub food: Food,
    pub special_pity_counter: u32,
    pub boss_food: Option<BossFood>,
    pub star: Option<StarItem>,
    pub enemies: Vec<Enemy>,
    pub obstacles: Vec<Position>,

    // Scoring
    pub score: u32,
    pub level: u32,
    /// Tick interval in milliseconds (lower = faster).
    pub speed_ms: u64,

    // Power-ups, combo, dash
    pub upgrades: Upgrades,
    pub shield_active: bool,
    pub active_power_up: Option<ActivePowerUp>,
    pub combo_count: u32,
    pub last_eat_at: Option<u64>,
    pub overload_until: Option<u64>,
    pub dash: DashState,
    pub invincible_until: u64,
    /// Slow-motion factor; values below 1 stretch the tick interval.
    pub time_scale: f64,

    pub stats: RunStats,
    pub tick_count: u64,
    /// Events produced since the last drain.
    pub events: Vec<GameEvent>,
}

impl SnakeGame {
    /// Create a fresh run: a three-segment snake moving right, one food item,
    /// and the level-1 enemy wave.
    pub fn new<R: Rng>(config: GameConfig, upgrades: Upgrades, rng: &mut R) -> Self {
        let grid = Grid::from_config(&config);
        let start_y = (grid.rows / 2).min(10);
        let snake: VecDeque<Position> = [
            Position::new(5, start_y),
            Position::new(4, start_y),
            Position::new(3, start_y),
        ]
        .into_iter()
        .collect();

        let mut game = Self {
            grid,
            life: LifeState::Alive,

            prev_snake: snake.iter().copied().collect(),
            snake,
            direction: Direction::Right,
            next_direction: Direction::Right,
            growth_pending: 0,

            // Temporary food position; will be overwritten by spawn_food
            food: Food {
                x: -100.0,
                y: -100.0,
                kind: FoodKind::Normal,
            },
            special_pity_counter: 0,
            boss_food: None,
            star: None,
            enemies: Vec::new(),
            obstacles: Vec::new(),

            score: 0,
            level: 1,
            speed_ms: BASE_SPEED_MS,

            upgrades,
            shield_active: upgrades.shield,
            active_power_up: None,
            combo_count: 0,
            last_eat_at: None,
            overload_until: None,
            dash: DashState::default(),
            invincible_until: 0,
            time_scale: 1.0,

            stats: RunStats::default(),
            tick_count: 0,
            events: Vec::new(),
        };

        spawn_food(&mut game, rng);
        spawn_enemy_wave(&mut game, rng);
        game.events.push(GameEvent::RunStarted);
        game
    }

    pub fn head(&self) -> Option<Position> {
        self.snake.front().copied()
    }

    /// Body length cap for the current level.
    pub fn max_length(&self) -> usize {
        BASE_MAX_LENGTH + (self.level.saturating_sub(1) as usize) * MAX_LENGTH_PER_LEVEL
    }

    pub fn is_alive(&self) -> bool {
        matches!(self.life, LifeState::Alive)
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.life, LifeState::GameOver)
    }

    pub fn is_overloaded(&self) -> bool {
        self.overload_until.is_some()
    }

    /// Invincibility from a star, or the dash's full protection.
    pub fn is_invulnerable(&self, now_ms: u64) -> bool {
        now_ms < self.invincible_until || self.dash.active
    }

    pub fn is_on_snake(&self, pos: Position) -> bool {
        self.snake.contains(&pos)
    }

    pub fn is_obstacle(&self, pos: Position) -> bool {
        self.obstacles.contains(&pos)
    }

    /// Take all events produced since the previous drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn new_game() -> SnakeGame {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        SnakeGame::new(GameConfig::default(), Upgrades::default(), &mut rng)
    }

    #[test]
    fn test_new_game_defaults() {
        let game = new_game();
        assert!(game.is_alive());
        assert_eq!(game.score, 0);
        assert_eq!(game.level, 1);
        assert_eq!(game.speed_ms, 150);
        assert_eq!(game.direction, Direction::Right);
        assert_eq!(game.next_direction, Direction::Right);
        assert!(game.obstacles.is_empty());
        assert!(game.active_power_up.is_none());
        assert!(!game.dash.active);
        assert_eq!(game.time_scale, 1.0);
    }

    #[test]
    fn test_snake_initial_position() {
        let game = new_game();
        let body: Vec<Position> = game.snake.iter().copied().collect();
        assert_eq!(
            body,
            vec![
                Position::new(5, 10),
                Position::new(4, 10),
                Position::new(3, 10)
            ]
        );
        assert_eq!(game.prev_snake, body);
    }

    #[test]
    fn test_first_wave_has_one_enemy_and_a_star() {
        let game = new_game();
        assert_eq!(game.enemies.len(), 1);
        assert!(game.star.is_some());
    }

    #[test]
    fn test_shield_follows_upgrade() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let upgrades = Upgrades {
            shield: true,
            ..Default::default()
        };
        let game = SnakeGame::new(GameConfig::default(), upgrades, &mut rng);
        assert!(game.shield_active);
    }

    #[test]
    fn test_max_length_grows_with_level() {
        let mut game = new_game();
        assert_eq!(game.max_length(), 6);
        game.level = 4;
        assert_eq!(game.max_length(), 12);
    }

    #[test]
    fn test_direction_opposite() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_food_kind_table() {
        assert_eq!(FoodKind::Normal.points(), 10);
        assert_eq!(FoodKind::Fire.points(), 30);
        assert_eq!(FoodKind::Ice.points(), 15);
        assert_eq!(FoodKind::Lightning.points(), 20);
        assert_eq!(FoodKind::Normal.power_up(), None);
        assert_eq!(PowerUp::Ice.speed_ms(), 220);
        assert_eq!(PowerUp::Lightning.base_duration_ms(), 5_000);
    }

    #[test]
    fn test_run_started_event() {
        let mut game = new_game();
        let events = game.drain_events();
        assert!(events.contains(&GameEvent::RunStarted));
        assert!(game.events.is_empty());
    }
}
