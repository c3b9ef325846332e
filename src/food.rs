use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::StdRng;

use crate::config::PREDETERMINED_FOOD;
use crate::grid::{Cell, Grid};
use crate::snake::Position;

/// Where the most recent food item came from.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FoodSource {
    Predetermined,
    Random,
}

/// Ordered food locations with a random fallback once the queue runs dry.
#[derive(Debug, Clone)]
pub struct FoodSupply {
    queue: VecDeque<Position>,
    rng: StdRng,
    current: Option<Position>,
    last_source: Option<FoodSource>,
}

impl FoodSupply {
    /// Creates a supply that drains `queue` before sampling from `rng`.
    #[must_use]
    pub fn new(queue: impl IntoIterator<Item = Position>, rng: StdRng) -> Self {
        Self {
            queue: queue.into_iter().collect(),
            rng,
            current: None,
            last_source: None,
        }
    }

    /// Creates a supply loaded with the built-in food locations.
    #[must_use]
    pub fn predetermined(rng: StdRng) -> Self {
        Self::new(
            PREDETERMINED_FOOD
                .iter()
                .map(|&(row, col)| Position::new(row, col)),
            rng,
        )
    }

    /// Picks the next food cell and marks it on `grid`.
    ///
    /// Queue entries that are off the grid or not empty are skipped. Once the
    /// queue is exhausted, positions are sampled uniformly over the whole grid
    /// until an empty cell is hit. Returns `None` when the grid has no empty
    /// cell left, in which case nothing is marked.
    pub fn place_next(&mut self, grid: &mut Grid) -> Option<Position> {
        self.current = None;
        self.last_source = None;

        while let Some(position) = self.queue.pop_front() {
            match grid.get(position) {
                Some(Cell::Empty) => {
                    return Some(self.mark(grid, position, FoodSource::Predetermined));
                }
                Some(cell) => {
                    log::warn!("skipping queued food at {position:?}: cell holds {cell:?}");
                }
                None => {
                    log::warn!("skipping queued food at {position:?}: outside the board");
                }
            }
        }

        if grid.count(Cell::Empty) == 0 {
            log::debug!("no empty cell left for food");
            return None;
        }

        let size = grid.size();
        loop {
            let candidate = Position::new(
                self.rng.gen_range(0..i32::from(size.rows)),
                self.rng.gen_range(0..i32::from(size.cols)),
            );

            if grid.get(candidate) == Some(Cell::Empty) {
                return Some(self.mark(grid, candidate, FoodSource::Random));
            }
        }
    }

    /// Returns the food cell currently on the board, if any.
    #[must_use]
    pub fn current(&self) -> Option<Position> {
        self.current
    }

    /// Returns how the current food was chosen.
    #[must_use]
    pub fn last_source(&self) -> Option<FoodSource> {
        self.last_source
    }

    /// Returns how many queued locations have not been used yet.
    #[must_use]
    pub fn remaining_predetermined(&self) -> usize {
        self.queue.len()
    }

    fn mark(&mut self, grid: &mut Grid, position: Position, source: FoodSource) -> Position {
        grid.set(position, Cell::Food);
        self.current = Some(position);
        self.last_source = Some(source);
        log::debug!("placed {source:?} food at {position:?}");
        position
    }
}
