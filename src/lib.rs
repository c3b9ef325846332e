pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod snake;

pub use engine::{EndReason, GameEngine, GameStatus, MoveOutcome};
pub use error::GameError;
pub use grid::{Cell, Grid};
pub use input::Direction;
pub use snake::Position;
