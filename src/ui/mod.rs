//! Terminal front end: screens, frame drawing, and feedback messages.

pub mod board;
pub mod hud;
pub mod input;
pub mod layout;
pub mod overlays;

use board::{render_board, BoardStyle};
use hud::{render_info_panel, render_play_status};
use layout::create_game_layout;
use neon_snake::achievements::get_achievement_def;
use neon_snake::audio::AudioSink;
use neon_snake::core::{FrameResult, GameLoop, Session};
use neon_snake::profile::KeyValueStore;
use neon_snake::snake::death::RunSummary;
use neon_snake::snake::{DashRejection, GameEvent};
use overlays::{render_game_over, render_pause, render_shop, render_title};
use ratatui::{style::Color, Frame};
use std::collections::VecDeque;

/// How long a floating message stays on the status bar.
const MESSAGE_MS: u64 = 1500;
const MAX_MESSAGES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Title,
    Playing,
    Shop,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct FloatingMessage {
    pub text: String,
    pub color: Color,
    pub expires_at: u64,
}

/// Front-end state that does not belong to the game or the profile.
#[derive(Debug, Clone)]
pub struct UiState {
    pub screen: Screen,
    /// Where Esc from the shop goes back to.
    pub shop_return: Screen,
    pub shop_cursor: usize,
    pub shop_notice: Option<String>,
    pub messages: VecDeque<FloatingMessage>,
    pub last_summary: Option<RunSummary>,
    /// High score as it stood when the current run started.
    pub best_before_run: u32,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Title,
            shop_return: Screen::Title,
            shop_cursor: 0,
            shop_notice: None,
            messages: VecDeque::new(),
            last_summary: None,
            best_before_run: 0,
        }
    }

    pub fn begin_run(&mut self, high_score: u32) {
        self.screen = Screen::Playing;
        self.messages.clear();
        self.last_summary = None;
        self.best_before_run = high_score;
    }

    pub fn open_shop(&mut self) {
        self.shop_return = self.screen;
        self.shop_notice = None;
        self.screen = Screen::Shop;
    }

    pub fn close_shop(&mut self) {
        self.screen = self.shop_return;
    }

    pub fn push_message(&mut self, text: String, color: Color, now_ms: u64) {
        if self.messages.len() == MAX_MESSAGES {
            self.messages.pop_front();
        }
        self.messages.push_back(FloatingMessage {
            text,
            color,
            expires_at: now_ms + MESSAGE_MS,
        });
    }

    /// Newest message still on screen.
    pub fn current_message(&self, now_ms: u64) -> Option<&FloatingMessage> {
        self.messages.iter().rev().find(|m| m.expires_at > now_ms)
    }

    /// Turn a frame's events into messages and screen changes.
    pub fn absorb(&mut self, result: &FrameResult, now_ms: u64) {
        for event in &result.events {
            if let Some((text, color)) = event_message(event) {
                self.push_message(text, color, now_ms);
            }
        }
        if let Some(summary) = result.game_over {
            self.last_summary = Some(summary);
            self.screen = Screen::GameOver;
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

fn event_message(event: &GameEvent) -> Option<(String, Color)> {
    let message = match event {
        GameEvent::PowerUpStarted { kind } => (format!("{}!", kind.name()), Color::Yellow),
        GameEvent::OverloadStarted => ("OVERLOAD x2".to_string(), Color::Magenta),
        GameEvent::StarCollected => ("Invincible!".to_string(), Color::Yellow),
        GameEvent::BossFoodSpawned => ("Boss food appeared!".to_string(), Color::Magenta),
        GameEvent::BossFoodEaten { points } => (format!("Boss food +{points}"), Color::Magenta),
        GameEvent::BossFoodExpired => ("Boss food escaped".to_string(), Color::DarkGray),
        GameEvent::EnemyKilled => ("Enemy crushed!".to_string(), Color::Red),
        GameEvent::ShieldBroken => ("Shield broken!".to_string(), Color::Cyan),
        GameEvent::DashRejected(DashRejection::InsufficientScore { cost, .. }) => {
            (format!("Dash needs {cost} score"), Color::DarkGray)
        }
        GameEvent::LevelUp { level } => (format!("Level {level}"), Color::Green),
        GameEvent::AchievementUnlocked { id, reward } => {
            let name = get_achievement_def(*id).map_or("Achievement", |def| def.name);
            (format!("{name} unlocked! +{reward}"), Color::Yellow)
        }
        GameEvent::ChallengeCompleted { bonus, .. } => {
            (format!("Daily challenge done! +{bonus}"), Color::Green)
        }
        _ => return None,
    };
    Some(message)
}

/// Draw the current screen.
pub fn draw<S: KeyValueStore, A: AudioSink>(
    frame: &mut Frame,
    session: &Session<S, A>,
    ui: &UiState,
    now_ms: u64,
) {
    let area = frame.size();
    let profile = session.profile();

    if ui.screen == Screen::Title || (ui.screen == Screen::Shop && ui.shop_return == Screen::Title) {
        render_title(frame, area, profile, session.daily());
    } else {
        let game = session.game();
        let border = if game.is_overloaded() {
            Color::Magenta
        } else {
            Color::Cyan
        };
        let layout = create_game_layout(frame, area, " Neon Snake ", border);
        let style = BoardStyle {
            skin: profile.skin,
            head: profile.head,
            now_ms,
        };
        render_board(frame, layout.content, game, session.lerp(), &style);
        let message = ui
            .current_message(now_ms)
            .map(|m| (m.text.as_str(), m.color));
        render_play_status(frame, layout.status_bar, game, session.is_paused(), message);
        render_info_panel(frame, layout.info_panel, game, profile, session.daily(), now_ms);

        if session.is_paused() {
            render_pause(frame, layout.content);
        }
        if ui.screen == Screen::GameOver {
            if let Some(summary) = &ui.last_summary {
                render_game_over(frame, layout.content, summary, ui.best_before_run);
            }
        }
    }

    if ui.screen == Screen::Shop {
        render_shop(frame, area, profile, ui.shop_cursor, ui.shop_notice.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neon_snake::achievements::AchievementId;

    #[test]
    fn test_messages_expire() {
        let mut ui = UiState::new();
        ui.push_message("hi".to_string(), Color::White, 1000);
        assert!(ui.current_message(1000 + MESSAGE_MS - 1).is_some());
        assert!(ui.current_message(1000 + MESSAGE_MS).is_none());
    }

    #[test]
    fn test_message_queue_is_bounded() {
        let mut ui = UiState::new();
        for i in 0..10 {
            ui.push_message(format!("m{i}"), Color::White, 0);
        }
        assert_eq!(ui.messages.len(), MAX_MESSAGES);
        assert_eq!(ui.current_message(0).map(|m| m.text.as_str()), Some("m9"));
    }

    #[test]
    fn test_absorb_game_over_switches_screen() {
        let mut ui = UiState::new();
        ui.begin_run(0);
        let summary = RunSummary {
            score: 40,
            level: 1,
            reward: 4,
            total_distance: 12,
            boosts_eaten: 0,
            frenzy_triggers: 0,
            enemies_killed: 0,
        };
        let result = FrameResult {
            events: vec![
                GameEvent::AchievementUnlocked {
                    id: AchievementId::FirstBlood,
                    reward: 50,
                },
                GameEvent::GameOver(summary),
            ],
            game_over: Some(summary),
            ..Default::default()
        };
        ui.absorb(&result, 0);
        assert_eq!(ui.screen, Screen::GameOver);
        assert_eq!(ui.last_summary, Some(summary));
        assert!(ui.current_message(0).is_some());
    }

    #[test]
    fn test_shop_returns_to_caller() {
        let mut ui = UiState::new();
        ui.screen = Screen::GameOver;
        ui.open_shop();
        assert_eq!(ui.screen, Screen::Shop);
        ui.close_shop();
        assert_eq!(ui.screen, Screen::GameOver);
    }
}
