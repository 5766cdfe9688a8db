//! Full-screen and popup screens: title, pause, shop, game over.

use super::board::{head_glyph, snake_palette};
use super::layout::{centered_rect, render_status_bar};
use neon_snake::achievements::daily::DailyChallenge;
use neon_snake::profile::{Profile, UpgradeId};
use neon_snake::snake::death::RunSummary;
use neon_snake::snake::Direction;
use ratatui::{
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TITLE_ART: [&str; 3] = [
    "█▄ █ █▀▀ █▀█ █▄ █   █▀ █▄ █ ▄▀█ █▄▀ █▀▀",
    "█ ▀█ ██▄ █▄█ █ ▀█   ▄█ █ ▀█ █▀█ █ █ ██▄",
    "",
];

/// Rows in the shop: the three upgrades, then skin and head.
pub const SHOP_ROWS: usize = UpgradeId::ALL.len() + 2;

/// What a shop row does when confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopRow {
    Upgrade(UpgradeId),
    Skin,
    Head,
}

pub fn shop_row(cursor: usize) -> ShopRow {
    match UpgradeId::ALL.get(cursor) {
        Some(&id) => ShopRow::Upgrade(id),
        None if cursor == UpgradeId::ALL.len() => ShopRow::Skin,
        None => ShopRow::Head,
    }
}

fn popup(frame: &mut Frame, area: Rect, width: u16, height: u16, title: &str, color: Color) -> Rect {
    let rect = centered_rect(area, width, height);
    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);
    inner
}

pub fn render_title(
    frame: &mut Frame,
    area: Rect,
    profile: &Profile,
    daily: Option<&DailyChallenge>,
) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(TITLE_ART.len() as u16 + 1),
            Constraint::Min(6),
            Constraint::Length(2),
        ])
        .split(inner);

    let art: Vec<Line> = TITLE_ART
        .iter()
        .map(|l| {
            Line::from(Span::styled(
                *l,
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(art).alignment(Alignment::Center), chunks[0]);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("High score ", Style::default().fg(Color::DarkGray)),
            Span::styled(profile.high_score.to_string(), Style::default().fg(Color::White)),
            Span::styled("   Bytes ", Style::default().fg(Color::DarkGray)),
            Span::styled(profile.currency.to_string(), Style::default().fg(Color::Yellow)),
            Span::styled("   Achievements ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!(
                    "{}/{}",
                    profile.achievements.unlocked_count(),
                    profile.achievements.total_count()
                ),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
    ];

    if let Some(challenge) = daily {
        let (mark, color) = if challenge.completed {
            ("done", Color::Green)
        } else {
            ("open", Color::Yellow)
        };
        lines.push(Line::from(vec![
            Span::styled("Daily challenge: ", Style::default().fg(Color::DarkGray)),
            Span::styled(challenge.id.description(), Style::default().fg(Color::White)),
            Span::styled(format!(" [{mark}]"), Style::default().fg(color)),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Top runs",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    if profile.leaderboard.is_empty() {
        lines.push(Line::from(Span::styled(
            "No runs yet",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for (i, entry) in profile.leaderboard.iter().enumerate() {
        lines.push(Line::from(format!(
            "{}. {:>6}  {}  {}",
            i + 1,
            entry.score,
            entry.date,
            entry.skin.name()
        )));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), chunks[1]);
    render_status_bar(
        frame,
        chunks[2],
        if profile.muted { "Sound off" } else { "Sound on" },
        Color::DarkGray,
        &[("[Enter]", "Play"), ("[S]", "Shop"), ("[M]", "Mute"), ("[Q]", "Quit")],
    );
}

pub fn render_pause(frame: &mut Frame, area: Rect) {
    let inner = popup(frame, area, 24, 5, " Paused ", Color::Yellow);
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("[P] Resume", Style::default().fg(Color::White))),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}

pub fn render_shop(frame: &mut Frame, area: Rect, profile: &Profile, cursor: usize, notice: Option<&str>) {
    let inner = popup(frame, area, 52, 16, " Shop ", Color::Yellow);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Bytes: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                profile.currency.to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    for row in 0..SHOP_ROWS {
        let selected = row == cursor;
        let marker = if selected { "> " } else { "  " };
        let base = if selected {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let line = match shop_row(row) {
            ShopRow::Upgrade(id) => {
                let status = if id.is_owned(&profile.upgrades) {
                    Span::styled("OWNED", Style::default().fg(Color::Green))
                } else if profile.currency >= id.price() {
                    Span::styled(format!("{}", id.price()), Style::default().fg(Color::Yellow))
                } else {
                    Span::styled(format!("{}", id.price()), Style::default().fg(Color::DarkGray))
                };
                Line::from(vec![
                    Span::styled(format!("{marker}{:<10}", id.name()), base),
                    status,
                    Span::styled(format!("  {}", id.description()), Style::default().fg(Color::DarkGray)),
                ])
            }
            ShopRow::Skin => {
                let (r, g, b) = snake_palette(profile.skin, None).head;
                Line::from(vec![
                    Span::styled(format!("{marker}{:<10}", "Skin"), base),
                    Span::styled("■■■ ", Style::default().fg(Color::Rgb(r, g, b))),
                    Span::styled(profile.skin.name(), Style::default().fg(Color::White)),
                ])
            }
            ShopRow::Head => Line::from(vec![
                Span::styled(format!("{marker}{:<10}", "Head"), base),
                Span::styled(
                    format!("{} ", head_glyph(profile.head, Direction::Right)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(profile.head.name(), Style::default().fg(Color::White)),
            ]),
        };
        lines.push(line);
    }

    lines.push(Line::from(""));
    if let Some(text) = notice {
        lines.push(Line::from(Span::styled(text, Style::default().fg(Color::Red))));
    }
    lines.push(Line::from(Span::styled(
        "[Up/Down] Select  [Enter] Buy/Cycle  [Esc] Back",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// `previous_best` is the high score as it stood when the run began.
pub fn render_game_over(frame: &mut Frame, area: Rect, summary: &RunSummary, previous_best: u32) {
    let inner = popup(frame, area, 36, 13, " Game Over ", Color::Red);
    let new_best = summary.score > previous_best;
    let mut lines = vec![
        Line::from(Span::styled(
            format!("Score {}", summary.score),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
    ];
    if new_best {
        lines.push(Line::from(Span::styled(
            "New high score!",
            Style::default().fg(Color::Yellow),
        )));
    }
    lines.extend([
        Line::from(format!("Level {}", summary.level)),
        Line::from(format!("Distance {}", summary.total_distance)),
        Line::from(format!("Boosts {}  Frenzies {}", summary.boosts_eaten, summary.frenzy_triggers)),
        Line::from(format!("Enemies killed {}", summary.enemies_killed)),
        Line::from(Span::styled(
            format!("+{} bytes", summary.reward),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Again  [S] Shop  [Q] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
