use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GridSize;
use crate::error::GameError;
use crate::food::FoodSupply;
use crate::grid::{Cell, Grid};
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Why a game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndReason {
    WallCollision,
    SelfCollision,
    /// The snake covers every cell, so no food can be placed.
    BoardFilled,
}

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    /// Constructed, no move accepted yet.
    Initialized,
    Running,
    Over(EndReason),
}

/// Result of submitting one move.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MoveOutcome {
    /// The snake advanced one cell.
    Continued,
    /// The token was not a direction. Nothing changed; ask again.
    Invalid,
    /// The game has ended. Further moves are refused.
    GameOver(EndReason),
}

/// Complete mutable state for one game session.
#[derive(Debug, Clone)]
pub struct GameEngine {
    grid: Grid,
    snake: Snake,
    food: FoodSupply,
    direction: Direction,
    status: GameStatus,
    turns: u64,
}

impl GameEngine {
    /// Creates a game on a `rows × cols` board with entropy-seeded fallback food.
    pub fn new(rows: u16, cols: u16) -> Result<Self, GameError> {
        let size = GridSize::new(rows, cols)?;
        Ok(Self::with_food_supply(
            size,
            FoodSupply::predetermined(StdRng::from_entropy()),
        ))
    }

    /// Creates a deterministic game for tests and reproducible sessions.
    pub fn with_seed(rows: u16, cols: u16, seed: u64) -> Result<Self, GameError> {
        let size = GridSize::new(rows, cols)?;
        Ok(Self::with_food_supply(
            size,
            FoodSupply::predetermined(StdRng::seed_from_u64(seed)),
        ))
    }

    /// Creates a game that draws food from `food`.
    ///
    /// The snake starts as a single head at `(0, 0)` facing right and the
    /// first food item is placed immediately.
    #[must_use]
    pub fn with_food_supply(size: GridSize, mut food: FoodSupply) -> Self {
        let start = Position::new(0, 0);
        let direction = Direction::Right;

        let mut grid = Grid::new(size);
        grid.set(start, Cell::head(direction));
        let first_food = food.place_next(&mut grid);
        log::debug!(
            "new {}x{} game, first food at {first_food:?}",
            size.rows,
            size.cols
        );

        Self {
            grid,
            snake: Snake::new(start),
            food,
            direction,
            status: GameStatus::Initialized,
            turns: 0,
        }
    }

    /// Parses a raw console token and applies it as a move.
    pub fn apply_token(&mut self, token: &str) -> MoveOutcome {
        if let GameStatus::Over(reason) = self.status {
            return MoveOutcome::GameOver(reason);
        }

        match Direction::from_token(token) {
            Some(direction) => self.apply_move(direction),
            None => {
                log::debug!("rejected move token {token:?}");
                MoveOutcome::Invalid
            }
        }
    }

    /// Advances the snake one cell in `direction`.
    ///
    /// Collisions leave the board untouched and end the game. Moving onto food
    /// grows the snake and places the next food item.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if let GameStatus::Over(reason) = self.status {
            return MoveOutcome::GameOver(reason);
        }

        let old_head = self.snake.head();
        let new_head = old_head.stepped(direction);

        let target = match self.grid.get(new_head) {
            None => return self.finish(EndReason::WallCollision),
            Some(cell) if cell.is_snake() => return self.finish(EndReason::SelfCollision),
            Some(cell) => cell,
        };
        let ate_food = target == Cell::Food;

        // Mark the old head before the tail moves so a one-cell snake
        // leaves an empty cell behind.
        self.grid.set(old_head, Cell::Body);
        if ate_food {
            self.snake.grow_to(new_head);
        } else if let Some(tail) = self.snake.advance_to(new_head) {
            self.grid.set(tail, Cell::Empty);
        }
        self.grid.set(new_head, Cell::head(direction));

        self.direction = direction;
        self.turns += 1;
        self.status = GameStatus::Running;
        log::debug!(
            "turn {}: {direction:?} to {new_head:?}, length {}",
            self.turns,
            self.snake.len()
        );

        if ate_food && self.food.place_next(&mut self.grid).is_none() {
            return self.finish(EndReason::BoardFilled);
        }

        MoveOutcome::Continued
    }

    fn finish(&mut self, reason: EndReason) -> MoveOutcome {
        log::debug!("game over after {} turns: {reason:?}", self.turns);
        self.status = GameStatus::Over(reason);
        MoveOutcome::GameOver(reason)
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn head(&self) -> Position {
        self.snake.head()
    }

    /// Returns the direction the head currently faces.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the food cell on the board, if one could be placed.
    #[must_use]
    pub fn food(&self) -> Option<Position> {
        self.food.current()
    }

    #[must_use]
    pub fn food_supply(&self) -> &FoodSupply {
        &self.food
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the number of accepted moves.
    #[must_use]
    pub fn turns(&self) -> u64 {
        self.turns
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.grid.size()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Over(_))
    }
}
