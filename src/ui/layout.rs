//! Shared layout pieces: outer frame, status bar, info panel, centered boxes.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Width of the info panel to the right of the board.
pub const INFO_PANEL_WIDTH: u16 = 26;
/// Rows reserved for the status bar under the board.
pub const STATUS_BAR_HEIGHT: u16 = 2;

pub struct GameLayout {
    pub content: Rect,
    pub status_bar: Rect,
    pub info_panel: Rect,
}

/// Split the screen into board, status bar, and info panel inside a titled
/// border.
pub fn create_game_layout(frame: &mut Frame, area: Rect, title: &str, border_color: Color) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(12), Constraint::Length(INFO_PANEL_WIDTH)])
        .split(inner);
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(STATUS_BAR_HEIGHT)])
        .split(h_chunks[0]);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Board area available for a terminal of the given size, as
/// (columns, rows) of terminal cells inside the board's own border.
pub fn board_area(width: u16, height: u16) -> (u16, u16) {
    let inner_w = width.saturating_sub(2 + INFO_PANEL_WIDTH);
    let inner_h = height.saturating_sub(2 + STATUS_BAR_HEIGHT);
    (inner_w.saturating_sub(2), inner_h.saturating_sub(2))
}

/// Two-line status bar: a message, then the key hints.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let controls = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Bordered panel for the right-hand info column; returns its inner area.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    let block = Block::default()
        .title(title)
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// A `width` x `height` rectangle centered in `area`, clipped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_area_subtracts_chrome() {
        assert_eq!(board_area(80, 24), (80 - 2 - INFO_PANEL_WIDTH - 2, 24 - 2 - STATUS_BAR_HEIGHT - 2));
        assert_eq!(board_area(10, 3), (0, 0));
    }

    #[test]
    fn test_centered_rect_clips() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect(area, 40, 40), area);
    }
}
