//! Keyboard mapping. Keys mean different things on different screens.

use super::Screen;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use neon_snake::snake::SnakeInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Steer(SnakeInput),
    Dash,
    Pause,
    Mute,
    OpenShop,
    /// Start, restart, or buy the selected shop item.
    Confirm,
    CursorUp,
    CursorDown,
    Back,
    Quit,
}

pub fn map_key(key: KeyEvent, screen: Screen) -> Option<InputAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let action = match screen {
        Screen::Playing => match key.code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                InputAction::Steer(SnakeInput::Up)
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                InputAction::Steer(SnakeInput::Down)
            }
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                InputAction::Steer(SnakeInput::Left)
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                InputAction::Steer(SnakeInput::Right)
            }
            KeyCode::Char(' ') => InputAction::Dash,
            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => InputAction::Pause,
            KeyCode::Char('m') | KeyCode::Char('M') => InputAction::Mute,
            KeyCode::Char('q') | KeyCode::Char('Q') => InputAction::Quit,
            _ => return None,
        },
        Screen::Shop => match key.code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => InputAction::CursorUp,
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => InputAction::CursorDown,
            KeyCode::Enter | KeyCode::Char(' ') => InputAction::Confirm,
            KeyCode::Esc | KeyCode::Backspace => InputAction::Back,
            KeyCode::Char('m') | KeyCode::Char('M') => InputAction::Mute,
            KeyCode::Char('q') | KeyCode::Char('Q') => InputAction::Quit,
            _ => return None,
        },
        Screen::Title | Screen::GameOver => match key.code {
            KeyCode::Enter => InputAction::Confirm,
            KeyCode::Char('s') | KeyCode::Char('S') => InputAction::OpenShop,
            KeyCode::Char('m') | KeyCode::Char('M') => InputAction::Mute,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputAction::Quit,
            _ => return None,
        },
    };
    Some(action)
}
