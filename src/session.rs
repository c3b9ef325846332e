use std::io::Write;

use crate::config::{MESSAGE_GAME_OVER, MESSAGE_INVALID_MOVE, PROMPT_MOVE};
use crate::engine::{EndReason, GameEngine, MoveOutcome};
use crate::error::GameError;
use crate::input::InputSource;
use crate::renderer::Renderer;

/// How a console session stopped.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SessionEnd {
    GameOver(EndReason),
    /// The input source ran out of tokens before the game ended.
    InputClosed,
}

/// Totals reported once a session stops.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SessionSummary {
    pub turns: u64,
    pub length: usize,
    pub end: SessionEnd,
}

/// Runs the prompt/move/render loop until the game ends or input runs out.
///
/// The board is drawn once up front and again after every accepted or
/// rejected token. Nothing is drawn after the game-over message.
pub fn run<I, R, W>(
    engine: &mut GameEngine,
    input: &mut I,
    renderer: &R,
    out: &mut W,
) -> Result<SessionSummary, GameError>
where
    I: InputSource,
    R: Renderer,
    W: Write,
{
    renderer.render(engine.grid(), out)?;

    loop {
        write!(out, "{PROMPT_MOVE}")?;
        out.flush()?;

        let Some(token) = input.next_token()? else {
            writeln!(out)?;
            log::info!("input closed after {} turns", engine.turns());
            return Ok(summary(engine, SessionEnd::InputClosed));
        };

        match engine.apply_token(&token) {
            MoveOutcome::Continued => renderer.render(engine.grid(), out)?,
            MoveOutcome::Invalid => {
                writeln!(out, "{MESSAGE_INVALID_MOVE}")?;
                renderer.render(engine.grid(), out)?;
            }
            MoveOutcome::GameOver(reason) => {
                writeln!(out, "{MESSAGE_GAME_OVER}")?;
                out.flush()?;
                log::info!("game over after {} turns: {reason:?}", engine.turns());
                return Ok(summary(engine, SessionEnd::GameOver(reason)));
            }
        }
    }
}

fn summary(engine: &GameEngine, end: SessionEnd) -> SessionSummary {
    SessionSummary {
        turns: engine.turns(),
        length: engine.snake().len(),
        end,
    }
}
