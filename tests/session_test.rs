//! Integration test: session orchestration
//!
//! Runs whole games through `Session::frame` at a fixed frame rate and checks
//! the timing contract, settlement, and restart rules from the outside.

use neon_snake::audio::{cues, Cue};
use neon_snake::core::constants::{DEATH_DELAY_MS, REALTIME_FRAME_MS};
use neon_snake::core::{GameConfig, GameLoop, Session};
use neon_snake::profile::{KeyValueStore, MemoryStore, ProfileKey};
use neon_snake::snake::{GameEvent, RunSummary};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

type TestSession = Session<MemoryStore, Vec<Cue>>;

fn new_session(seed: u64) -> (TestSession, ChaCha8Rng) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let session = Session::new(
        GameConfig::default(),
        MemoryStore::new(),
        Vec::new(),
        "2024-03-09",
        &mut rng,
    )
    .unwrap();
    (session, rng)
}

struct Played {
    events: Vec<(u64, GameEvent)>,
    summary: Option<RunSummary>,
    end_ms: u64,
    ticks: u64,
}

/// Feed frames every `REALTIME_FRAME_MS` until the run ends or `limit_ms`.
fn play_until_over(session: &mut TestSession, rng: &mut ChaCha8Rng, start_ms: u64, limit_ms: u64) -> Played {
    let mut played = Played {
        events: Vec::new(),
        summary: None,
        end_ms: start_ms,
        ticks: 0,
    };
    let mut now = start_ms;
    while now < limit_ms {
        now += REALTIME_FRAME_MS;
        let result = session.frame(now, rng);
        if result.ticked {
            played.ticks += 1;
        }
        played.events.extend(result.events.into_iter().map(|e| (now, e)));
        if result.game_over.is_some() {
            played.summary = result.game_over;
            played.end_ms = now;
            break;
        }
    }
    played
}

#[test]
fn test_unsteered_run_ends_and_settles() {
    for seed in 0..5 {
        let (mut session, mut rng) = new_session(seed);
        assert!(session.start_run(0, &mut rng));
        let played = play_until_over(&mut session, &mut rng, 0, 120_000);
        let summary = played.summary.expect("an unsteered snake always crashes");

        // Game over follows the death after the fixed delay
        let died_at = played
            .events
            .iter()
            .find(|(_, e)| *e == GameEvent::Died)
            .map(|(t, _)| *t)
            .unwrap();
        let gap = played.end_ms - died_at;
        assert!(gap >= DEATH_DELAY_MS);
        assert!(gap <= DEATH_DELAY_MS + REALTIME_FRAME_MS);

        // Every credit to the wallet is accounted for by an event
        let earned: u32 = played
            .events
            .iter()
            .map(|(_, e)| match e {
                GameEvent::AchievementUnlocked { reward, .. } => *reward,
                GameEvent::ChallengeCompleted { bonus, .. } => *bonus,
                _ => 0,
            })
            .sum();
        assert_eq!(summary.reward, summary.score / 2);
        assert_eq!(session.profile().currency, earned + summary.reward);

        assert_eq!(session.profile().leaderboard.len(), 1);
        assert_eq!(session.profile().leaderboard[0].score, summary.score);
        assert_eq!(session.profile().leaderboard[0].date, "2024-03-09");
        assert!(session
            .store()
            .get(ProfileKey::Leaderboard.as_str())
            .is_some());
    }
}

#[test]
fn test_tick_rate_matches_speed() {
    let (mut session, mut rng) = new_session(21);
    session.start_run(0, &mut rng);
    let played = play_until_over(&mut session, &mut rng, 0, 1_000);
    let speed_changed = played.events.iter().any(|(_, e)| {
        matches!(e, GameEvent::PowerUpStarted { .. } | GameEvent::Died | GameEvent::LevelUp { .. })
    });
    if !speed_changed {
        // 150ms interval, strict comparison, 16ms frames: ticks at 160, 320, ...
        assert_eq!(played.ticks, 6);
    }
}

#[test]
fn test_lerp_stays_in_unit_range() {
    let (mut session, mut rng) = new_session(22);
    session.start_run(0, &mut rng);
    let mut now = 0;
    for _ in 0..200 {
        now += 7;
        let result = session.frame(now, &mut rng);
        assert!((0.0..=1.0).contains(&result.lerp));
        if result.game_over.is_some() {
            break;
        }
    }
}

#[test]
fn test_second_run_resets_game_and_keeps_wallet() {
    let (mut session, mut rng) = new_session(23);
    session.start_run(0, &mut rng);
    assert!(!session.start_run(10, &mut rng));
    let played = play_until_over(&mut session, &mut rng, 0, 120_000);
    assert!(played.summary.is_some());
    let wallet = session.profile().currency;

    assert!(session.start_run(played.end_ms + 1, &mut rng));
    assert_eq!(session.game().score, 0);
    assert_eq!(session.game().level, 1);
    assert!(session.game().is_alive());
    assert_eq!(session.profile().currency, wallet);
}

#[test]
fn test_game_over_cue_plays_when_unmuted() {
    let (mut session, mut rng) = new_session(24);
    session.start_run(0, &mut rng);
    play_until_over(&mut session, &mut rng, 0, 120_000);
    assert!(session.audio().contains(&cues::GAME_OVER));
    assert!(session.audio().contains(&cues::DEATH));
}

#[test]
fn test_muted_session_plays_nothing() {
    let (mut session, mut rng) = new_session(25);
    session.toggle_mute(0);
    session.start_run(0, &mut rng);
    play_until_over(&mut session, &mut rng, 0, 120_000);
    assert!(session.audio().is_empty());
}
