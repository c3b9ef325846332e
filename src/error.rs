use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a game before or outside of normal play.
///
/// Collisions and unrecognized move tokens are not errors; they are reported
/// through [`crate::engine::MoveOutcome`].
#[derive(Error, Debug)]
pub enum GameError {
    #[error("invalid board dimensions {rows}x{cols}: rows and cols must be greater than zero")]
    InvalidDimensions { rows: u16, cols: u16 },

    #[error("failed to parse settings file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}
