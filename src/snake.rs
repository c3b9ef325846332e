use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in `(row, col)` cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    #[must_use]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.row >= 0
            && self.col >= 0
            && self.row < i32::from(bounds.rows)
            && self.col < i32::from(bounds.cols)
    }

    /// Returns the neighbouring position one step in `direction`.
    ///
    /// The result may lie outside the grid; callers check bounds.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

/// Occupied snake cells in movement order, tail first and head last.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        Self {
            body: VecDeque::from([start]),
        }
    }

    /// Adds a new head and keeps the tail.
    pub fn grow_to(&mut self, head: Position) {
        self.body.push_back(head);
    }

    /// Adds a new head and drops the tail, returning the vacated cell.
    pub fn advance_to(&mut self, head: Position) -> Option<Position> {
        self.body.push_back(head);
        self.body.pop_front()
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        // The body is never empty: `new` seeds one segment and
        // `advance_to` pushes before it pops.
        self.body[self.body.len() - 1]
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        self.body[0]
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from tail to head.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    #[test]
    fn bounds_check_covers_all_edges() {
        let bounds = GridSize { rows: 4, cols: 3 };

        assert!(Position::new(0, 0).is_within_bounds(bounds));
        assert!(Position::new(3, 2).is_within_bounds(bounds));
        assert!(!Position::new(-1, 0).is_within_bounds(bounds));
        assert!(!Position::new(0, -1).is_within_bounds(bounds));
        assert!(!Position::new(4, 0).is_within_bounds(bounds));
        assert!(!Position::new(0, 3).is_within_bounds(bounds));
    }

    #[test]
    fn stepping_moves_one_cell() {
        let origin = Position::new(2, 2);

        assert_eq!(origin.stepped(Direction::Up), Position::new(1, 2));
        assert_eq!(origin.stepped(Direction::Down), Position::new(3, 2));
        assert_eq!(origin.stepped(Direction::Left), Position::new(2, 1));
        assert_eq!(origin.stepped(Direction::Right), Position::new(2, 3));
    }

    #[test]
    fn advancing_keeps_length_and_returns_tail() {
        let mut snake = Snake::new(Position::new(0, 0));
        snake.grow_to(Position::new(0, 1));

        let vacated = snake.advance_to(Position::new(0, 2));

        assert_eq!(vacated, Some(Position::new(0, 0)));
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.tail(), Position::new(0, 1));
        assert_eq!(snake.head(), Position::new(0, 2));
    }

    #[test]
    fn growing_keeps_previous_tail() {
        let mut snake = Snake::new(Position::new(1, 1));

        snake.grow_to(Position::new(2, 1));

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.tail(), Position::new(1, 1));
        assert!(snake.occupies(Position::new(2, 1)));
    }
}
