//! Play field rendering.
//!
//! Uses half-block pixel rendering: each grid cell is one terminal column
//! and half a terminal row, packed in pairs with `▀` (fg = top, bg = bottom).
//! Moving things are drawn at their interpolated positions.

use neon_snake::profile::{HeadShape, Palette, Skin};
use neon_snake::snake::interpolation::{interpolated_body, interpolated_boss_food};
use neon_snake::snake::{Direction, FoodKind, PowerUp, SnakeGame};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

// ── Border characters ────────────────────────────────────────────────
const BORDER_H: char = '\u{2500}'; // ─
const BORDER_V: char = '\u{2502}'; // │
const BORDER_TL: char = '\u{250C}'; // ┌
const BORDER_TR: char = '\u{2510}'; // ┐
const BORDER_BL: char = '\u{2514}'; // └
const BORDER_BR: char = '\u{2518}'; // ┘
const HALF_TOP: char = '\u{2580}'; // ▀

const EMPTY_BG: Color = Color::Rgb(8, 8, 20);
const GRID_BORDER: Color = Color::Rgb(0, 120, 140);
const OVERLOAD_BORDER: Color = Color::Rgb(255, 0, 200);
const OBSTACLE: Color = Color::Rgb(70, 70, 110);
const ENEMY: Color = Color::Rgb(255, 40, 60);
const STAR: Color = Color::Rgb(255, 215, 0);
const BOSS_FOOD: Color = Color::Rgb(255, 0, 255);
const DYING: Color = Color::Rgb(255, 30, 30);

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

pub fn food_color(kind: FoodKind) -> Color {
    match kind {
        FoodKind::Normal => Color::Rgb(255, 0, 128),
        FoodKind::Fire => Color::Rgb(255, 77, 0),
        FoodKind::Ice => Color::Rgb(0, 242, 255),
        FoodKind::Lightning => Color::Rgb(255, 255, 0),
    }
}

/// Skin colours, overridden while a power-up is running.
pub fn snake_palette(skin: Skin, power_up: Option<PowerUp>) -> Palette {
    match power_up {
        Some(PowerUp::Fire) => Palette {
            aura: (0xff, 0x4d, 0x00),
            head: (0xff, 0xcc, 0x00),
            body: (0xb9, 0x1c, 0x1c),
        },
        Some(PowerUp::Ice) => Palette {
            aura: (0x00, 0xf2, 0xff),
            head: (0xff, 0xff, 0xff),
            body: (0x03, 0x69, 0xa1),
        },
        Some(PowerUp::Lightning) => Palette {
            aura: (0xff, 0xff, 0x00),
            head: (0xff, 0xff, 0xff),
            body: (0xa1, 0x62, 0x07),
        },
        None => skin.palette(),
    }
}

/// Body gradient from the aura colour behind the head to the body colour at
/// the tail.
fn body_color(palette: &Palette, index: usize, len: usize) -> Color {
    let t = index as f64 / (len.saturating_sub(1)).max(1) as f64;
    let mix = |a: u8, b: u8| (a as f64 * (1.0 - t) + b as f64 * t) as u8;
    Color::Rgb(
        mix(palette.aura.0, palette.body.0),
        mix(palette.aura.1, palette.body.1),
        mix(palette.aura.2, palette.body.2),
    )
}

pub fn head_glyph(shape: HeadShape, direction: Direction) -> char {
    let glyphs = shape.glyphs();
    match direction {
        Direction::Up => glyphs[0],
        Direction::Down => glyphs[1],
        Direction::Left => glyphs[2],
        Direction::Right => glyphs[3],
    }
}

/// Everything about the run's look that does not live on the game.
pub struct BoardStyle {
    pub skin: Skin,
    pub head: HeadShape,
    pub now_ms: u64,
}

struct PixelGrid {
    w: usize,
    h: usize,
    pixels: Vec<Vec<Option<Color>>>,
}

impl PixelGrid {
    fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            pixels: vec![vec![None; w]; h],
        }
    }

    /// Paint the cell nearest to a continuous position.
    fn paint(&mut self, x: f64, y: f64, color: Color) {
        let (cx, cy) = (x.round(), y.round());
        if cx < 0.0 || cy < 0.0 || !cx.is_finite() || !cy.is_finite() {
            return;
        }
        let (cx, cy) = (cx as usize, cy as usize);
        if cx < self.w && cy < self.h {
            self.pixels[cy][cx] = Some(color);
        }
    }
}

/// Render the board at interpolation fraction `lerp`.
pub fn render_board(frame: &mut Frame, area: Rect, game: &SnakeGame, lerp: f64, style: &BoardStyle) {
    if area.height < 3 || area.width < 5 {
        return;
    }
    let grid_w = game.grid.cols.max(0) as usize;
    let grid_h = game.grid.rows.max(0) as usize;
    let mut grid = PixelGrid::new(grid_w, grid_h);

    for o in &game.obstacles {
        grid.paint(o.x as f64, o.y as f64, OBSTACLE);
    }
    grid.paint(game.food.x, game.food.y, food_color(game.food.kind));
    if let Some(star) = game.star {
        // Twinkle
        if (style.now_ms / 250) % 2 == 0 {
            grid.paint(star.x as f64, star.y as f64, STAR);
        } else {
            grid.paint(star.x as f64, star.y as f64, Color::White);
        }
    }
    if let Some((bx, by)) = interpolated_boss_food(game, lerp) {
        grid.paint(bx, by, BOSS_FOOD);
    }
    for e in &game.enemies {
        grid.paint(e.x, e.y, ENEMY);
    }

    let palette = snake_palette(style.skin, game.active_power_up.map(|a| a.kind));
    let flashing = game.is_invulnerable(style.now_ms) && (style.now_ms / 100) % 2 == 0;
    let dying = !game.is_alive();
    let body = interpolated_body(game, lerp);
    // Tail first so the head wins shared cells
    for (i, &(x, y)) in body.iter().enumerate().rev() {
        let color = if dying {
            DYING
        } else if flashing {
            Color::White
        } else if i == 0 {
            rgb(palette.head)
        } else {
            body_color(&palette, i, body.len())
        };
        grid.paint(x, y, color);
    }

    // ── Layout dimensions ───────────────────────────────────────
    let content_rows = grid_h.div_ceil(2);
    let render_w = ((grid_w + 2) as u16).min(area.width);
    let inner_w = render_w as usize - 2;
    let x_off = area.x + (area.width.saturating_sub(render_w)) / 2;
    let y_off = area.y;
    let border_color = if game.is_overloaded() {
        OVERLOAD_BORDER
    } else {
        GRID_BORDER
    };
    let border = Style::default().fg(border_color);

    let horizontal: String = std::iter::repeat(BORDER_H).take(inner_w).collect();
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("{BORDER_TL}{horizontal}{BORDER_TR}"),
            border,
        ))),
        Rect::new(x_off, y_off, render_w, 1),
    );

    let empty_row: Vec<Option<Color>> = vec![None; grid_w];
    for term_row in 0..content_rows {
        let row_y = y_off + 1 + term_row as u16;
        if row_y >= area.y + area.height {
            break;
        }
        let top_row = grid.pixels.get(term_row * 2).unwrap_or(&empty_row);
        let bot_row = grid.pixels.get(term_row * 2 + 1).unwrap_or(&empty_row);

        let mut spans: Vec<Span> = vec![Span::styled(BORDER_V.to_string(), border)];
        // Batch consecutive cells with the same colours
        let mut cur_fg = Color::Reset;
        let mut cur_bg = Color::Reset;
        let mut cur_text = String::new();
        for (&top, &bot) in top_row.iter().zip(bot_row.iter()).take(inner_w) {
            let fg = top.unwrap_or(EMPTY_BG);
            let bg = bot.unwrap_or(EMPTY_BG);
            if (fg != cur_fg || bg != cur_bg) && !cur_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut cur_text),
                    Style::default().fg(cur_fg).bg(cur_bg),
                ));
            }
            cur_fg = fg;
            cur_bg = bg;
            cur_text.push(HALF_TOP);
        }
        if !cur_text.is_empty() {
            spans.push(Span::styled(cur_text, Style::default().fg(cur_fg).bg(cur_bg)));
        }
        spans.push(Span::styled(BORDER_V.to_string(), border));
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_off, row_y, render_w, 1),
        );
    }

    let bot_y = y_off + 1 + content_rows as u16;
    if bot_y < area.y + area.height {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("{BORDER_BL}{horizontal}{BORDER_BR}"),
                border,
            ))),
            Rect::new(x_off, bot_y, render_w, 1),
        );
    }

    // Head glyph over its terminal cell
    if let Some(&(hx, hy)) = body.first() {
        let (cx, cy) = (hx.round(), hy.round());
        if !dying && cx >= 0.0 && cy >= 0.0 && (cx as usize) < inner_w && (cy as usize) < grid_h {
            let term_x = x_off + 1 + cx as u16;
            let term_y = y_off + 1 + (cy as u16) / 2;
            if term_y < area.y + area.height {
                let glyph = head_glyph(style.head, game.direction);
                frame.render_widget(
                    Paragraph::new(Span::styled(
                        glyph.to_string(),
                        Style::default().fg(rgb(palette.head)).bg(EMPTY_BG),
                    )),
                    Rect::new(term_x, term_y, 1, 1),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_up_overrides_skin() {
        let fire = snake_palette(Skin::Ghost, Some(PowerUp::Fire));
        assert_eq!(fire.aura, (0xff, 0x4d, 0x00));
        assert_eq!(snake_palette(Skin::Ghost, None), Skin::Ghost.palette());
    }

    #[test]
    fn test_body_gradient_ends() {
        let palette = Skin::Lava.palette();
        assert_eq!(body_color(&palette, 0, 5), rgb(palette.aura));
        assert_eq!(body_color(&palette, 4, 5), rgb(palette.body));
    }

    #[test]
    fn test_head_glyph_follows_direction() {
        let glyphs = HeadShape::Viper.glyphs();
        assert_eq!(head_glyph(HeadShape::Viper, Direction::Up), glyphs[0]);
        assert_eq!(head_glyph(HeadShape::Viper, Direction::Right), glyphs[3]);
    }

    #[test]
    fn test_paint_ignores_out_of_range() {
        let mut grid = PixelGrid::new(3, 3);
        grid.paint(-1.0, 0.0, Color::Red);
        grid.paint(f64::NAN, 1.0, Color::Red);
        grid.paint(1.4, 2.2, Color::Red);
        grid.paint(3.0, 0.0, Color::Red);
        let painted: usize = grid.pixels.iter().flatten().filter(|p| p.is_some()).count();
        assert_eq!(painted, 1);
        assert_eq!(grid.pixels[2][1], Some(Color::Red));
    }
}
