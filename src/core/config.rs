//! Run configuration: the grid size a new game is created with.

use super::constants::{DEFAULT_COLS, DEFAULT_ROWS, MIN_GRID_CELLS};
use crate::error::GameError;

/// Parameters fixed for the lifetime of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub cols: i32,
    pub rows: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
        }
    }
}

impl GameConfig {
    /// Derive a square grid from a terminal play area.
    ///
    /// Each cell is one column wide and half a row tall (half-block rendering),
    /// so the usable cell count is `min(width, height * 2)`. Both axes are
    /// floored at the minimum grid size.
    pub fn for_terminal(width: u16, height: u16) -> Self {
        let cells = (width as i32).min(height as i32 * 2).max(MIN_GRID_CELLS);
        Self {
            cols: cells,
            rows: cells,
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.cols < MIN_GRID_CELLS || self.rows < MIN_GRID_CELLS {
            return Err(GameError::InvalidGrid {
                cols: self.cols,
                rows: self.rows,
                min: MIN_GRID_CELLS,
            });
        }
        Ok(())
    }
}
