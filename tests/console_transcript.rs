use std::io::Cursor;

use console_snake::GameEngine;
use console_snake::engine::EndReason;
use console_snake::input::LineInput;
use console_snake::renderer::TextRenderer;
use console_snake::session::{self, SessionEnd};

const EMPTY_ROW: &str = "■ ■ ■ ■ ■ ■ ";
const PROMPT: &str = "Enter move (U, D, L, R): ";

fn board(rows: &[&str]) -> String {
    let mut rendered: String = rows.iter().map(|row| format!("{row}\n")).collect();
    rendered.push('\n');
    rendered
}

#[test]
fn transcript_matches_console_contract() {
    let mut engine = GameEngine::with_seed(6, 6, 1).expect("6x6 is valid");
    let mut input = LineInput::new(Cursor::new("d\nx\nU\n"));
    let mut out = Vec::new();

    let summary = session::run(&mut engine, &mut input, &TextRenderer::new(false), &mut out)
        .expect("in-memory session succeeds");

    let start = board(&[
        "> ■ ■ ■ ■ ■ ",
        "X ■ ■ ■ ■ ■ ",
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
    ]);
    let after_down = board(&[
        ". ■ ■ ■ ■ ■ ",
        "v ■ ■ ■ ■ ■ ",
        "■ ■ X ■ ■ ■ ",
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
    ]);
    let expected = format!(
        "{start}{PROMPT}{after_down}{PROMPT}Invalid move! Use U, D, L, R.\n{after_down}{PROMPT}Game Over!\n"
    );

    assert_eq!(String::from_utf8(out).expect("transcript is utf-8"), expected);
    assert_eq!(summary.end, SessionEnd::GameOver(EndReason::SelfCollision));
    assert_eq!(summary.turns, 1);
    assert_eq!(summary.length, 2);
}
