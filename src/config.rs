use crate::error::GameError;

/// Logical grid dimensions passed through the game as a named type.
///
/// Rows come first everywhere: a position is `(row, col)` and a grid is
/// `rows × cols`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub rows: u16,
    pub cols: u16,
}

impl GridSize {
    /// Validates and creates a grid size. Both dimensions must be non-zero.
    pub fn new(rows: u16, cols: u16) -> Result<Self, GameError> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidDimensions { rows, cols });
        }

        Ok(Self { rows, cols })
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.rows) * usize::from(self.cols)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID_ROWS,
            cols: DEFAULT_GRID_COLS,
        }
    }
}

/// Default board height.
pub const DEFAULT_GRID_ROWS: u16 = 6;

/// Default board width.
pub const DEFAULT_GRID_COLS: u16 = 6;

/// Food locations consumed in order before random placement takes over.
pub const PREDETERMINED_FOOD: [(i32, i32); 5] = [(1, 0), (2, 2), (3, 4), (5, 2), (4, 5)];

pub const GLYPH_EMPTY: char = '■';
pub const GLYPH_SNAKE_BODY: char = '.';
pub const GLYPH_SNAKE_HEAD_UP: char = '^';
pub const GLYPH_SNAKE_HEAD_DOWN: char = 'v';
pub const GLYPH_SNAKE_HEAD_LEFT: char = '<';
pub const GLYPH_SNAKE_HEAD_RIGHT: char = '>';
pub const GLYPH_FOOD: char = 'X';

/// Separator written after every rendered cell.
pub const CELL_DELIMITER: &str = " ";

pub const PROMPT_MOVE: &str = "Enter move (U, D, L, R): ";
pub const MESSAGE_INVALID_MOVE: &str = "Invalid move! Use U, D, L, R.";
pub const MESSAGE_GAME_OVER: &str = "Game Over!";

#[cfg(test)]
mod tests {
    use super::GridSize;
    use crate::error::GameError;

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            GridSize::new(0, 5),
            Err(GameError::InvalidDimensions { rows: 0, cols: 5 })
        ));
        assert!(matches!(
            GridSize::new(5, 0),
            Err(GameError::InvalidDimensions { rows: 5, cols: 0 })
        ));
    }

    #[test]
    fn total_cells_multiplies_dimensions() {
        let size = GridSize::new(3, 7).expect("3x7 is a valid size");
        assert_eq!(size.total_cells(), 21);
    }
}
