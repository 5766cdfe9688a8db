//! Grid bounds, coordinate helpers, and the per-level obstacle layout.

use super::types::Position;
use crate::core::config::GameConfig;

/// Playfield bounds. Valid cells are `0..cols` × `0..rows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub cols: i32,
    pub rows: i32,
}

impl Grid {
    pub fn new(cols: i32, rows: i32) -> Self {
        Self { cols, rows }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.cols, config.rows)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.cols && pos.y >= 0 && pos.y < self.rows
    }

    /// Pull an out-of-range position back onto the nearest edge cell.
    pub fn clamp(&self, pos: Position) -> Position {
        Position {
            x: pos.x.clamp(0, self.cols - 1),
            y: pos.y.clamp(0, self.rows - 1),
        }
    }

    /// Wrap a position around the edges (overload mode).
    pub fn wrap(&self, pos: Position) -> Position {
        Position {
            x: pos.x.rem_euclid(self.cols),
            y: pos.y.rem_euclid(self.rows),
        }
    }

    pub fn center(&self) -> Position {
        Position {
            x: self.cols / 2,
            y: self.rows / 2,
        }
    }

    /// Replace non-finite continuous coordinates with the grid center.
    pub fn sanitize(&self, x: f64, y: f64) -> (f64, f64) {
        if x.is_finite() && y.is_finite() {
            (x, y)
        } else {
            let c = self.center();
            (c.x as f64, c.y as f64)
        }
    }

    /// Static obstacle layout for a level.
    ///
    /// Level 1 is open, level 2 places four pillars around the center, and
    /// every later level uses two six-cell walls in opposite corners.
    pub fn obstacles_for_level(&self, level: u32) -> Vec<Position> {
        let mx = self.cols / 2;
        let my = self.rows / 2;
        match level {
            0 | 1 => Vec::new(),
            2 => vec![
                Position::new(mx - 2, my - 2),
                Position::new(mx + 2, my - 2),
                Position::new(mx - 2, my + 2),
                Position::new(mx + 2, my + 2),
            ],
            _ => (0..6)
                .flat_map(|i| {
                    [
                        Position::new(4, 4 + i),
                        Position::new(self.cols - 5, self.rows - 5 - i),
                    ]
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let grid = Grid::new(20, 20);
        assert!(grid.contains(Position::new(0, 0)));
        assert!(grid.contains(Position::new(19, 19)));
        assert!(!grid.contains(Position::new(20, 5)));
        assert!(!grid.contains(Position::new(5, -1)));
    }

    #[test]
    fn test_clamp_and_wrap() {
        let grid = Grid::new(20, 15);
        assert_eq!(grid.clamp(Position::new(-1, 16)), Position::new(0, 14));
        assert_eq!(grid.wrap(Position::new(-1, 15)), Position::new(19, 0));
        assert_eq!(grid.wrap(Position::new(20, -1)), Position::new(0, 14));
    }

    #[test]
    fn test_sanitize_nan_goes_to_center() {
        let grid = Grid::new(20, 20);
        assert_eq!(grid.sanitize(f64::NAN, 3.0), (10.0, 10.0));
        assert_eq!(grid.sanitize(4.5, 3.0), (4.5, 3.0));
    }

    #[test]
    fn test_level_two_obstacles_are_symmetric() {
        let grid = Grid::new(20, 20);
        let obstacles = grid.obstacles_for_level(2);
        assert_eq!(
            obstacles,
            vec![
                Position::new(8, 8),
                Position::new(12, 8),
                Position::new(8, 12),
                Position::new(12, 12),
            ]
        );
    }

    #[test]
    fn test_level_three_walls() {
        let grid = Grid::new(20, 20);
        let obstacles = grid.obstacles_for_level(3);
        assert_eq!(obstacles.len(), 12);
        assert!(obstacles.contains(&Position::new(4, 4)));
        assert!(obstacles.contains(&Position::new(4, 9)));
        assert!(obstacles.contains(&Position::new(15, 15)));
        assert!(obstacles.contains(&Position::new(15, 10)));
        assert!(grid.obstacles_for_level(1).is_empty());
    }
}
