use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Parses a console token by its first character, ignoring case.
    ///
    /// Returns `None` for empty tokens and anything outside `U`, `D`, `L`, `R`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.chars().next()?.to_ascii_uppercase() {
            'U' => Some(Self::Up),
            'D' => Some(Self::Down),
            'L' => Some(Self::Left),
            'R' => Some(Self::Right),
            _ => None,
        }
    }

    /// Returns the unit `(row, col)` step for this direction.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// Blocking supplier of one move token per turn.
pub trait InputSource {
    /// Blocks until the next token is available. `Ok(None)` signals end of input.
    fn next_token(&mut self) -> io::Result<Option<String>>;
}

/// Whitespace-delimited token reader over any buffered line source.
///
/// Several tokens typed on one line are handed out one per call; blank lines
/// are skipped.
#[derive(Debug)]
pub struct LineInput<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> LineInput<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{Direction, InputSource, LineInput};

    #[test]
    fn tokens_parse_case_insensitively_by_first_character() {
        assert_eq!(Direction::from_token("u"), Some(Direction::Up));
        assert_eq!(Direction::from_token("D"), Some(Direction::Down));
        assert_eq!(Direction::from_token("left"), Some(Direction::Left));
        assert_eq!(Direction::from_token("Right"), Some(Direction::Right));
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert_eq!(Direction::from_token(""), None);
        assert_eq!(Direction::from_token("x"), None);
        assert_eq!(Direction::from_token("?U"), None);
        assert_eq!(Direction::from_token("1"), None);
    }

    #[test]
    fn deltas_are_unit_steps() {
        assert_eq!(Direction::Up.delta(), (-1, 0));
        assert_eq!(Direction::Down.delta(), (1, 0));
        assert_eq!(Direction::Left.delta(), (0, -1));
        assert_eq!(Direction::Right.delta(), (0, 1));
    }

    #[test]
    fn line_input_splits_tokens_and_skips_blank_lines() {
        let mut input = LineInput::new(Cursor::new("d r\n\n   \nU\n"));

        assert_eq!(input.next_token().unwrap().as_deref(), Some("d"));
        assert_eq!(input.next_token().unwrap().as_deref(), Some("r"));
        assert_eq!(input.next_token().unwrap().as_deref(), Some("U"));
        assert_eq!(input.next_token().unwrap(), None);
    }
}
