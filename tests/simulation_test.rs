//! Integration test: simulation step scenarios
//!
//! Drives `step` directly with a seeded RNG and hand-placed entities to check
//! eating, growth, level progression, combos, dash, and the death sequence.

use neon_snake::core::constants::{DASH_COST, DEATH_DELAY_MS};
use neon_snake::core::GameConfig;
use neon_snake::snake::death::{finish_game_over, game_over_due, trigger_death};
use neon_snake::snake::{
    activate_dash, fire_due_timers, process_input, step, DashRejection, Direction, Food, FoodKind,
    GameEvent, LifeState, Position, SnakeGame, SnakeInput, StepContext, Upgrades,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const TICK: u64 = 150;

/// Fresh game with enemies, star, and food moved out of the way.
fn quiet_game(seed: u64) -> (SnakeGame, ChaCha8Rng) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut game = SnakeGame::new(GameConfig::default(), Upgrades::default(), &mut rng);
    game.enemies.clear();
    game.star = None;
    park_food(&mut game);
    game.drain_events();
    (game, rng)
}

fn park_food(game: &mut SnakeGame) {
    game.food = Food {
        x: 0.0,
        y: 0.0,
        kind: FoodKind::Normal,
    };
}

fn tick(game: &mut SnakeGame, rng: &mut ChaCha8Rng, now_ms: u64) {
    step(
        game,
        StepContext {
            now_ms,
            elapsed_ms: TICK,
        },
        rng,
    )
    .unwrap();
}

// =============================================================================
// Eating and growth
// =============================================================================

#[test]
fn test_eating_normal_food_scores_and_grows() {
    let (mut game, mut rng) = quiet_game(1);
    let start: Vec<Position> = game.snake.iter().copied().collect();
    assert_eq!(
        start,
        vec![
            Position::new(5, 10),
            Position::new(4, 10),
            Position::new(3, 10)
        ]
    );
    game.food = Food {
        x: 6.0,
        y: 10.0,
        kind: FoodKind::Normal,
    };

    tick(&mut game, &mut rng, 0);

    assert_eq!(game.score, 10);
    assert_eq!(game.snake.len(), 4);
    let food = Position::new(game.food.x as i32, game.food.y as i32);
    assert!(!start.contains(&food));
    assert_ne!(food, Position::new(6, 10));
    assert!(!game.is_on_snake(food));

    // Growth was consumed on the eating tick; the next moves keep length 4
    park_food(&mut game);
    for i in 1..=3 {
        tick(&mut game, &mut rng, i * TICK);
        assert_eq!(game.snake.len(), 4);
    }
}

#[test]
fn test_body_never_exceeds_level_cap() {
    let (mut game, mut rng) = quiet_game(2);
    game.growth_pending = 50;
    for i in 0..12 {
        // Stay in bounds: zig-zag along the rows
        if i == 6 {
            process_input(&mut game, SnakeInput::Down);
        }
        tick(&mut game, &mut rng, i * TICK);
        assert!(game.snake.len() <= game.max_length());
    }
    assert_eq!(game.snake.len(), 6);
}

#[test]
fn test_replacement_food_avoids_snake_and_obstacles() {
    for seed in 0..20 {
        let (mut game, mut rng) = quiet_game(seed);
        game.obstacles = game.grid.obstacles_for_level(2);
        game.food = Food {
            x: 6.0,
            y: 10.0,
            kind: FoodKind::Normal,
        };
        tick(&mut game, &mut rng, 0);
        let food = Position::new(game.food.x.round() as i32, game.food.y.round() as i32);
        assert!(game.grid.contains(food));
        assert!(!game.is_on_snake(food));
        assert!(game
            .obstacles
            .iter()
            .all(|o| (o.x - food.x).abs() > 1 || (o.y - food.y).abs() > 1));
    }
}

// =============================================================================
// Direction handling
// =============================================================================

#[test]
fn test_reversal_is_never_applied() {
    let (mut game, mut rng) = quiet_game(3);
    process_input(&mut game, SnakeInput::Left);
    tick(&mut game, &mut rng, 0);
    assert_eq!(game.direction, Direction::Right);
    assert_eq!(game.head(), Some(Position::new(6, 10)));
}

// =============================================================================
// Levels
// =============================================================================

#[test]
fn test_crossing_one_hundred_reaches_level_two() {
    let (mut game, mut rng) = quiet_game(4);
    game.score = 90;
    game.food = Food {
        x: 6.0,
        y: 10.0,
        kind: FoodKind::Normal,
    };

    tick(&mut game, &mut rng, 0);

    assert_eq!(game.score, 100);
    assert_eq!(game.level, 2);
    assert_eq!(game.speed_ms, 140);
    let center = game.grid.center();
    let mut expected = vec![
        Position::new(center.x - 2, center.y - 2),
        Position::new(center.x + 2, center.y - 2),
        Position::new(center.x - 2, center.y + 2),
        Position::new(center.x + 2, center.y + 2),
    ];
    let mut obstacles = game.obstacles.clone();
    expected.sort_by_key(|p| (p.x, p.y));
    obstacles.sort_by_key(|p| (p.x, p.y));
    assert_eq!(obstacles, expected);
    assert_eq!(game.enemies.len(), 1);
    assert!(game
        .drain_events()
        .contains(&GameEvent::LevelUp { level: 2 }));
}

// =============================================================================
// Combo and overload
// =============================================================================

#[test]
fn test_three_quick_eats_start_one_overload() {
    let (mut game, mut rng) = quiet_game(5);
    let mut now = 0;
    for _ in 0..4 {
        let head = game.head().unwrap().offset(game.direction);
        game.food = Food {
            x: head.x as f64,
            y: head.y as f64,
            kind: FoodKind::Normal,
        };
        tick(&mut game, &mut rng, now);
        now += 500;
    }
    let overloads = game
        .drain_events()
        .iter()
        .filter(|e| **e == GameEvent::OverloadStarted)
        .count();
    assert_eq!(overloads, 1);
    assert!(game.is_overloaded());
    assert_eq!(game.combo_count, 4);
}

#[test]
fn test_slow_eats_reset_combo() {
    let (mut game, mut rng) = quiet_game(6);
    let mut now = 0;
    for _ in 0..2 {
        let head = game.head().unwrap().offset(game.direction);
        game.food = Food {
            x: head.x as f64,
            y: head.y as f64,
            kind: FoodKind::Normal,
        };
        tick(&mut game, &mut rng, now);
        now += 3_000;
    }
    assert_eq!(game.combo_count, 1);
}

#[test]
fn test_overload_wraps_walls() {
    let (mut game, mut rng) = quiet_game(7);
    game.overload_until = Some(60_000);
    let mut now = 0;
    while game.head().unwrap().x < game.grid.cols - 1 {
        tick(&mut game, &mut rng, now);
        now += TICK;
    }
    tick(&mut game, &mut rng, now);
    assert!(game.is_alive());
    assert_eq!(game.head().unwrap().x, 0);
}

// =============================================================================
// Dash
// =============================================================================

#[test]
fn test_dash_rejections_and_cost() {
    let (mut game, _) = quiet_game(8);
    game.score = DASH_COST - 1;
    assert!(matches!(
        activate_dash(&mut game),
        Err(DashRejection::InsufficientScore { .. })
    ));
    assert_eq!(game.score, DASH_COST - 1);

    game.score = DASH_COST + 5;
    assert!(activate_dash(&mut game).is_ok());
    assert_eq!(game.score, 5);

    game.dash.active = false;
    game.score = 500;
    assert!(matches!(
        activate_dash(&mut game),
        Err(DashRejection::OnCooldown { .. })
    ));
    assert_eq!(game.score, 500);
}

// =============================================================================
// Death sequence
// =============================================================================

#[test]
fn test_obstacle_hit_dies_then_game_over_after_delay() {
    let (mut game, mut rng) = quiet_game(9);
    game.score = 75;
    game.obstacles = vec![Position::new(6, 10)];

    tick(&mut game, &mut rng, 1_000);
    assert_eq!(
        game.life,
        LifeState::Dying {
            game_over_at: 1_000 + DEATH_DELAY_MS
        }
    );
    assert!(!game_over_due(&game, 1_000 + DEATH_DELAY_MS - 1));
    assert!(game_over_due(&game, 1_000 + DEATH_DELAY_MS));

    fire_due_timers(&mut game, 1_000 + DEATH_DELAY_MS);
    let summary = finish_game_over(&mut game).unwrap();
    assert_eq!(summary.reward, 37);
    assert!(game.is_game_over());
    assert!(finish_game_over(&mut game).is_none());
}

#[test]
fn test_death_trigger_is_idempotent() {
    let (mut game, _) = quiet_game(10);
    assert!(trigger_death(&mut game, 500));
    assert!(!trigger_death(&mut game, 500));
    let deaths = game
        .drain_events()
        .iter()
        .filter(|e| **e == GameEvent::Died)
        .count();
    assert_eq!(deaths, 1);
}

#[test]
fn test_shield_absorbs_one_wall_hit() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let upgrades = Upgrades {
        shield: true,
        ..Upgrades::default()
    };
    let mut game = SnakeGame::new(GameConfig::default(), upgrades, &mut rng);
    game.enemies.clear();
    game.star = None;
    park_food(&mut game);
    process_input(&mut game, SnakeInput::Up);
    let mut now = 0;
    while game.head().unwrap().y > 0 {
        tick(&mut game, &mut rng, now);
        now += TICK;
    }
    tick(&mut game, &mut rng, now);
    assert!(game.is_alive());
    assert!(!game.shield_active);
    tick(&mut game, &mut rng, now + TICK);
    assert!(!game.is_alive());
}
