use crate::config::{
    GLYPH_EMPTY, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT,
    GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GridSize,
};
use crate::input::Direction;
use crate::snake::Position;

/// Marker stored in one board cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Body,
    HeadUp,
    HeadDown,
    HeadLeft,
    HeadRight,
    Food,
}

impl Cell {
    /// Returns the head marker facing `direction`.
    #[must_use]
    pub fn head(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::HeadUp,
            Direction::Down => Self::HeadDown,
            Direction::Left => Self::HeadLeft,
            Direction::Right => Self::HeadRight,
        }
    }

    /// Returns true for body and head markers.
    #[must_use]
    pub fn is_snake(self) -> bool {
        !matches!(self, Self::Empty | Self::Food)
    }

    #[must_use]
    pub fn is_head(self) -> bool {
        matches!(
            self,
            Self::HeadUp | Self::HeadDown | Self::HeadLeft | Self::HeadRight
        )
    }

    /// Returns the console glyph for this marker.
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Self::Empty => GLYPH_EMPTY,
            Self::Body => GLYPH_SNAKE_BODY,
            Self::HeadUp => GLYPH_SNAKE_HEAD_UP,
            Self::HeadDown => GLYPH_SNAKE_HEAD_DOWN,
            Self::HeadLeft => GLYPH_SNAKE_HEAD_LEFT,
            Self::HeadRight => GLYPH_SNAKE_HEAD_RIGHT,
            Self::Food => GLYPH_FOOD,
        }
    }
}

/// Fixed-size board of cell markers, stored row-major.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    size: GridSize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-empty grid.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.total_cells()],
        }
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the marker at `position`, or `None` when it lies off the grid.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<Cell> {
        self.index_of(position).map(|index| self.cells[index])
    }

    /// Overwrites the marker at `position`. Off-grid positions are ignored.
    pub(crate) fn set(&mut self, position: Position, cell: Cell) {
        if let Some(index) = self.index_of(position) {
            self.cells[index] = cell;
        }
    }

    /// Iterates over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(usize::from(self.size.cols).max(1))
    }

    /// Counts cells holding `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|candidate| **candidate == cell).count()
    }

    /// Counts cells holding any head marker.
    #[must_use]
    pub fn count_heads(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_head()).count()
    }

    fn index_of(&self, position: Position) -> Option<usize> {
        if !position.is_within_bounds(self.size) {
            return None;
        }

        let row = usize::try_from(position.row).ok()?;
        let col = usize::try_from(position.col).ok()?;
        Some(row * usize::from(self.size.cols) + col)
    }
}
