//! The session: owns the one running game, its clock, and the persisted
//! profile, and advances them once per rendered frame.

use super::config::GameConfig;
use super::timing::{effective_interval, FrameClock};
use crate::achievements::daily::DailyChallenge;
use crate::achievements::{check_achievements, RunProgress};
use crate::audio::{cues, cues_for, AudioSink, Cue, MusicSequencer};
use crate::error::GameError;
use crate::profile::shop::{self, PurchaseError, UpgradeId};
use crate::profile::store::KeyValueStore;
use crate::profile::{HeadShape, Profile, ProfileKey, Skin};
use crate::snake::death::{finish_game_over, force_game_over, game_over_due, RunSummary};
use crate::snake::enemies::update_enemies;
use crate::snake::events::GameEvent;
use crate::snake::logic::{process_input, snapshot_previous, step, SnakeInput, StepContext};
use crate::snake::powerups::{fire_due_timers, recover_time_scale};
use crate::snake::types::SnakeGame;
use rand::Rng;
use tracing::{error, info, warn};

/// Result of one frame - everything the shell needs to present it.
#[derive(Debug, Clone, Default)]
pub struct FrameResult {
    /// A simulation step ran this frame.
    pub ticked: bool,
    /// Render interpolation fraction in `[0, 1]`.
    pub lerp: f64,
    /// Events produced during the frame, in order.
    pub events: Vec<GameEvent>,
    /// Set on the frame the run ended.
    pub game_over: Option<RunSummary>,
}

/// Frame-driven game loop, implemented by [`Session`].
pub trait GameLoop {
    /// Advance by one rendered frame at wall-clock time `now_ms`.
    fn frame(&mut self, now_ms: u64, rng: &mut impl Rng) -> FrameResult;

    /// Current game state (read-only).
    fn game(&self) -> &SnakeGame;
}

pub struct Session<S: KeyValueStore, A: AudioSink> {
    config: GameConfig,
    game: SnakeGame,
    clock: FrameClock,
    profile: Profile,
    store: S,
    audio: A,
    music: MusicSequencer,
    started: bool,
    paused: bool,
    lerp: f64,
    today: String,
    /// Kills from the current run already added to the lifetime total.
    kills_banked: u32,
}

impl<S: KeyValueStore, A: AudioSink> Session<S, A> {
    /// Load the profile, settle today's challenge, and prepare an idle game
    /// for the title screen. The clock stays disarmed until [`start_run`].
    ///
    /// [`start_run`]: Session::start_run
    pub fn new<R: Rng>(
        config: GameConfig,
        store: S,
        audio: A,
        today: &str,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let profile = Profile::load(&store);
        let game = SnakeGame::new(config, profile.upgrades, rng);
        let mut session = Self {
            config,
            game,
            clock: FrameClock::new(),
            profile,
            store,
            audio,
            music: MusicSequencer::new(),
            started: false,
            paused: false,
            lerp: 0.0,
            today: String::new(),
            kills_banked: 0,
        };
        session.refresh_date(today, rng);
        info!(
            cols = config.cols,
            rows = config.rows,
            high_score = session.profile.high_score,
            "session ready"
        );
        Ok(session)
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn daily(&self) -> Option<&DailyChallenge> {
        self.profile.daily_challenge.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn lerp(&self) -> f64 {
        self.lerp
    }

    /// Roll a new daily challenge when the calendar date has changed.
    pub fn refresh_date<R: Rng>(&mut self, today: &str, rng: &mut R) {
        if self.today == today {
            return;
        }
        self.today = today.to_string();
        let (challenge, changed) =
            DailyChallenge::for_today(self.profile.daily_challenge.take(), today, rng);
        if changed {
            info!(date = today, challenge = challenge.id.name(), "new daily challenge");
        }
        self.profile.daily_challenge = Some(challenge);
        if changed {
            self.persist(ProfileKey::DailyChallenge);
        }
    }

    /// Begin a new run. Only allowed before the first run or after game over.
    pub fn start_run<R: Rng>(&mut self, now_ms: u64, rng: &mut R) -> bool {
        if self.started && !self.game.is_game_over() {
            return false;
        }
        self.game = SnakeGame::new(self.config, self.profile.upgrades, rng);
        self.started = true;
        self.paused = false;
        self.lerp = 0.0;
        self.kills_banked = 0;
        self.clock.start(now_ms);
        if !self.profile.muted {
            self.music.start(now_ms);
        }
        info!(upgrades = ?self.profile.upgrades, "run started");
        true
    }

    /// Forward a direction or dash input. Ignored while paused.
    pub fn input(&mut self, input: SnakeInput) {
        if self.paused || !self.started {
            return;
        }
        process_input(&mut self.game, input);
    }

    pub fn request_dash(&mut self) {
        self.input(SnakeInput::Dash);
    }

    /// Freeze the run. Only a live snake can be paused.
    pub fn pause(&mut self) {
        if !self.started || self.paused || !self.game.is_alive() {
            return;
        }
        self.paused = true;
        self.clock.pause();
        self.music.stop();
    }

    /// Continue after a pause; the next interval counts from `now_ms`.
    pub fn resume(&mut self, now_ms: u64) {
        if !self.paused {
            return;
        }
        self.paused = false;
        self.clock.resume(now_ms);
        if !self.profile.muted {
            self.music.start(now_ms);
        }
    }

    pub fn toggle_pause(&mut self, now_ms: u64) {
        if self.paused {
            self.resume(now_ms);
        } else {
            self.pause();
        }
    }

    /// Flip the single mute setting for effects and music.
    pub fn toggle_mute(&mut self, now_ms: u64) {
        self.profile.muted = !self.profile.muted;
        if self.profile.muted {
            self.music.stop();
        } else if self.started && !self.paused && self.game.is_alive() {
            self.music.start(now_ms);
        }
        self.persist(ProfileKey::Muted);
    }

    pub fn buy_upgrade(&mut self, id: UpgradeId) -> Result<(), PurchaseError> {
        match shop::buy_upgrade(&mut self.profile, id) {
            Ok(()) => {
                self.persist(ProfileKey::Currency);
                self.persist(ProfileKey::Upgrades);
                self.play(&[cues::PURCHASE]);
                Ok(())
            }
            Err(e) => {
                self.play(&[cues::REJECT]);
                Err(e)
            }
        }
    }

    pub fn select_skin(&mut self, skin: Skin) {
        self.profile.skin = skin;
        self.persist(ProfileKey::Skin);
    }

    pub fn select_head(&mut self, head: HeadShape) {
        self.profile.head = head;
        self.persist(ProfileKey::Head);
    }

    fn persist(&mut self, key: ProfileKey) {
        if let Err(e) = self.profile.save(&mut self.store, key) {
            warn!(key = key.as_str(), error = %e, "could not save setting");
        }
    }

    fn play(&mut self, cues: &[Cue]) {
        if self.profile.muted {
            return;
        }
        for cue in cues {
            self.audio.play(*cue);
        }
    }

    /// Run the simulation part of a frame: timers, death delay, and at most
    /// one tick.
    fn advance<R: Rng>(&mut self, now_ms: u64, rng: &mut R) -> bool {
        fire_due_timers(&mut self.game, now_ms);
        if game_over_due(&self.game, now_ms) {
            finish_game_over(&mut self.game);
        }
        if !self.game.is_alive() {
            return false;
        }

        let interval =
            effective_interval(self.game.dash.active, self.game.speed_ms, self.game.time_scale);
        let timing = self.clock.frame(now_ms, interval);
        self.lerp = timing.lerp;
        if !timing.tick_due {
            return false;
        }

        snapshot_previous(&mut self.game);
        update_enemies(&mut self.game, now_ms);
        let ctx = StepContext {
            now_ms,
            elapsed_ms: timing.elapsed_ms,
        };
        if let Err(e) = step(&mut self.game, ctx, rng) {
            error!(error = %e, "simulation step failed, ending run");
            force_game_over(&mut self.game);
        }
        true
    }

    /// High score, lifetime kills, achievements, and the daily challenge.
    fn update_progression(&mut self) {
        if self.profile.update_high_score(self.game.score) {
            self.persist(ProfileKey::HighScore);
        }

        let new_kills = self.game.stats.enemies_killed.saturating_sub(self.kills_banked);
        if new_kills > 0 {
            self.kills_banked = self.game.stats.enemies_killed;
            self.profile.total_enemies_killed += new_kills as u64;
            self.persist(ProfileKey::TotalEnemiesKilled);
        }

        let progress = RunProgress {
            score: self.game.score,
            level: self.game.level,
            combo: self.game.combo_count,
            lifetime_kills: self.profile.total_enemies_killed,
            dash_used: self.game.stats.dash_used,
        };

        let unlocked = check_achievements(&mut self.profile.achievements, &progress);
        if !unlocked.is_empty() {
            for def in &unlocked {
                self.profile.currency += def.reward;
                self.game.events.push(GameEvent::AchievementUnlocked {
                    id: def.id,
                    reward: def.reward,
                });
                info!(achievement = def.name, reward = def.reward, "achievement unlocked");
            }
            self.persist(ProfileKey::Achievements);
            self.persist(ProfileKey::Currency);
        }

        let bonus = self
            .profile
            .daily_challenge
            .as_mut()
            .and_then(|challenge| challenge.check(&progress).map(|bonus| (challenge.id, bonus)));
        if let Some((id, bonus)) = bonus {
            self.profile.currency += bonus;
            self.game.events.push(GameEvent::ChallengeCompleted { id, bonus });
            info!(challenge = id.name(), bonus, "daily challenge completed");
            self.persist(ProfileKey::DailyChallenge);
            self.persist(ProfileKey::Currency);
        }
    }

    /// Credit the reward and record the run on the leaderboard.
    fn settle(&mut self, summary: &RunSummary) {
        self.profile.currency += summary.reward;
        let rank = self
            .profile
            .record_run(summary.score, &self.today, self.profile.skin);
        self.persist(ProfileKey::Currency);
        self.persist(ProfileKey::Leaderboard);
        self.clock.pause();
        self.music.stop();
        info!(
            score = summary.score,
            reward = summary.reward,
            rank = ?rank,
            currency = self.profile.currency,
            "run settled"
        );
    }
}

impl<S: KeyValueStore, A: AudioSink> GameLoop for Session<S, A> {
    fn frame(&mut self, now_ms: u64, rng: &mut impl Rng) -> FrameResult {
        if !self.started || self.paused {
            return FrameResult {
                lerp: self.lerp,
                ..Default::default()
            };
        }

        let ticked = self.advance(now_ms, rng);
        recover_time_scale(&mut self.game);
        self.update_progression();

        let events = self.game.drain_events();
        let mut game_over = None;
        for event in &events {
            if let GameEvent::GameOver(summary) = event {
                self.settle(summary);
                game_over = Some(*summary);
            }
            self.play(cues_for(event));
        }

        if let Some(note) = self.music.advance(now_ms) {
            if !self.profile.muted {
                self.audio.play(note);
            }
        }

        FrameResult {
            ticked,
            lerp: self.lerp,
            events,
            game_over,
        }
    }

    fn game(&self) -> &SnakeGame {
        &self.game
    }
}
