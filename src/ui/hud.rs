//! Status bar and info panel around the board.

use super::board::{food_color, head_glyph};
use super::layout::{render_info_panel_frame, render_status_bar};
use neon_snake::achievements::daily::DailyChallenge;
use neon_snake::core::constants::DASH_COST;
use neon_snake::profile::Profile;
use neon_snake::snake::{Direction, FoodKind, SnakeGame};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const LABEL: Style = Style::new().fg(Color::DarkGray);
const VALUE: Style = Style::new().fg(Color::White);

fn stat<'a>(label: &'a str, value: String, style: Style) -> Line<'a> {
    Line::from(vec![Span::styled(label, LABEL), Span::styled(value, style)])
}

pub fn render_play_status(frame: &mut Frame, area: Rect, game: &SnakeGame, paused: bool, message: Option<(&str, Color)>) {
    let (text, color) = if paused {
        ("Paused", Color::Yellow)
    } else if !game.is_alive() {
        ("Crashed!", Color::Red)
    } else if let Some(msg) = message {
        msg
    } else if game.is_overloaded() {
        ("OVERLOAD", Color::Magenta)
    } else {
        ("Eat. Grow. Survive.", Color::Cyan)
    };
    render_status_bar(
        frame,
        area,
        text,
        color,
        &[
            ("[Arrows/WASD]", "Move"),
            ("[Space]", "Dash"),
            ("[P]", "Pause"),
            ("[M]", "Mute"),
            ("[Q]", "Quit"),
        ],
    );
}

fn dash_line(game: &SnakeGame) -> Line<'static> {
    let (text, color) = if game.dash.active {
        ("ACTIVE".to_string(), Color::Magenta)
    } else if game.dash.cooldown_ms > 0 {
        (
            format!("{:.1}s", game.dash.cooldown_ms as f64 / 1000.0),
            Color::DarkGray,
        )
    } else if game.score < DASH_COST {
        (format!("need {DASH_COST}"), Color::DarkGray)
    } else {
        ("READY".to_string(), Color::Green)
    };
    Line::from(vec![
        Span::styled("Dash: ", LABEL),
        Span::styled(text, Style::default().fg(color)),
    ])
}

pub fn render_info_panel(
    frame: &mut Frame,
    area: Rect,
    game: &SnakeGame,
    profile: &Profile,
    daily: Option<&DailyChallenge>,
    now_ms: u64,
) {
    let inner = render_info_panel_frame(frame, area, " Run ");
    let bold = VALUE.add_modifier(Modifier::BOLD);

    let mut lines = vec![
        stat("Score: ", game.score.to_string(), bold),
        stat("Best:  ", profile.high_score.max(game.score).to_string(), VALUE),
        stat("Level: ", game.level.to_string(), VALUE),
        stat("Speed: ", format!("{}ms", game.speed_ms), VALUE),
        stat(
            "Combo: ",
            format!("x{}", game.combo_count),
            if game.is_overloaded() {
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
            } else {
                VALUE
            },
        ),
        dash_line(game),
        Line::from(""),
    ];

    if let Some(active) = game.active_power_up {
        let left = active.expires_at.saturating_sub(now_ms) as f64 / 1000.0;
        let kind = match active.kind {
            neon_snake::snake::PowerUp::Fire => FoodKind::Fire,
            neon_snake::snake::PowerUp::Ice => FoodKind::Ice,
            neon_snake::snake::PowerUp::Lightning => FoodKind::Lightning,
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", active.kind.name()),
                Style::default().fg(food_color(kind)).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("{left:.1}s"), VALUE),
        ]));
    }
    if game.is_invulnerable(now_ms) && !game.dash.active {
        let left = game.invincible_until.saturating_sub(now_ms) as f64 / 1000.0;
        lines.push(Line::from(Span::styled(
            format!("Invincible {left:.1}s"),
            Style::default().fg(Color::Yellow),
        )));
    }
    if game.shield_active {
        lines.push(Line::from(Span::styled("Shield up", Style::default().fg(Color::Cyan))));
    }
    if game.boss_food.is_some() {
        lines.push(Line::from(Span::styled(
            "Boss food loose!",
            Style::default().fg(Color::Magenta),
        )));
    }

    lines.push(Line::from(""));
    lines.push(stat("Bytes: ", profile.currency.to_string(), Style::default().fg(Color::Yellow)));
    if let Some(challenge) = daily {
        lines.push(Line::from(Span::styled("Daily:", LABEL)));
        let status = if challenge.completed { " ✓" } else { "" };
        lines.push(Line::from(Span::styled(
            format!("{}{status}", challenge.id.name()),
            Style::default().fg(if challenge.completed {
                Color::Green
            } else {
                Color::White
            }),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            format!(" {} ", head_glyph(profile.head, Direction::Right)),
            Style::default().fg(Color::White),
        ),
        Span::styled(profile.skin.name(), LABEL),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}
