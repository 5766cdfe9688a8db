// Grid
pub const DEFAULT_COLS: i32 = 20;
pub const DEFAULT_ROWS: i32 = 20;
pub const MIN_GRID_CELLS: i32 = 10;

// Tick and timing
pub const BASE_SPEED_MS: u64 = 150;
pub const MIN_SPEED_MS: u64 = 50;
pub const SPEED_STEP_PER_LEVEL_MS: u64 = 10;
pub const REALTIME_FRAME_MS: u64 = 16; // ~60 FPS frame pacing for the shell
pub const TIME_SCALE_RECOVERY_PER_FRAME: f64 = 0.02;

// Scoring and levels
pub const POINTS_PER_LEVEL: u32 = 100;
pub const BASE_MAX_LENGTH: usize = 6;
pub const MAX_LENGTH_PER_LEVEL: usize = 2;
pub const NORMAL_FOOD_POINTS: u32 = 10;
pub const FIRE_FOOD_POINTS: u32 = 30;
pub const ICE_FOOD_POINTS: u32 = 15;
pub const LIGHTNING_FOOD_POINTS: u32 = 20;
pub const STAR_POINTS: u32 = 10;
pub const ENEMY_KILL_POINTS: u32 = 20;

// Food spawning
pub const SPECIAL_PITY_THRESHOLD: u32 = 5;
pub const SPECIAL_FOOD_CHANCE: f64 = 0.15;
pub const FOOD_SPAWN_ATTEMPTS: u32 = 150;
pub const FOOD_CENTER_BIAS_ATTEMPTS: u32 = 40;
pub const FOOD_CENTER_BIAS_CHANCE: f64 = 0.7;
pub const FOOD_CENTER_MARGIN_RATIO: f64 = 0.15;
pub const FOOD_EAT_RADIUS: f64 = 0.95;

// Magnet upgrade
pub const MAGNET_RANGE: f64 = 6.0;
pub const MAGNET_MIN_DISTANCE: f64 = 0.1;
pub const MAGNET_PULL: f64 = 0.5;

// Power-ups
pub const FIRE_SPEED_MS: u64 = 130;
pub const ICE_SPEED_MS: u64 = 220;
pub const LIGHTNING_SPEED_MS: u64 = 80;
pub const FIRE_DURATION_MS: u64 = 8_000;
pub const ICE_DURATION_MS: u64 = 10_000;
pub const LIGHTNING_DURATION_MS: u64 = 5_000;
pub const DURATION_UPGRADE_PERCENT: u64 = 150;

// Combo and overload
pub const COMBO_WINDOW_MS: u64 = 3_000;
pub const OVERLOAD_COMBO_THRESHOLD: u32 = 3;
pub const OVERLOAD_DURATION_MS: u64 = 5_000;

// Dash
pub const DASH_TICK_MS: u64 = 30;
pub const DASH_COST: u32 = 50;
pub const DASH_MAX_DURATION_MS: u64 = 2_000;
pub const DASH_MAX_COOLDOWN_MS: u64 = 5_000;
pub const DASH_TIME_SCALE: f64 = 0.5;

// Star item and invincibility
pub const STAR_PICKUP_TOLERANCE: f64 = 1.25;
pub const INVINCIBILITY_MS: u64 = 8_000;

// Boss food
pub const BOSS_FOOD_LIFE_TICKS: u32 = 60;
pub const BOSS_FOOD_POINTS: u32 = 100;
pub const BOSS_FOOD_GROWTH: u32 = 5;
pub const BOSS_FOOD_STEP: f64 = 0.2;
pub const BOSS_FOOD_PICKUP_TOLERANCE: f64 = 1.0;
pub const BOSS_FOOD_MARGIN: i32 = 2;
pub const BOSS_FOOD_MIN_LEVEL: u32 = 3;

// Enemies
pub const MAX_ENEMIES: u32 = 5;
pub const ENEMY_BASE_SPEED: f64 = 0.05;
pub const ENEMY_SPEED_PER_LEVEL: f64 = 0.005;
pub const ENEMY_SAFE_DISTANCE: i32 = 8;
pub const ENEMY_SPAWN_ATTEMPTS: u32 = 200;
pub const ENEMY_CHASE_MIN_DISTANCE: f64 = 0.5;
pub const ENEMY_CONTACT_RADIUS: f64 = 0.7;

// Death and rewards
pub const DEATH_DELAY_MS: u64 = 1_200;
pub const CURRENCY_REWARD_DIVISOR: u32 = 2;
pub const LEADERBOARD_SIZE: usize = 5;

// Rendering
pub const LERP_SNAP_DISTANCE: f64 = 1.1;
