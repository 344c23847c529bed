//! Human contestant answering at the console.

use super::{Contestant, Prompt, Turn};
use anyhow::Result;
use parlour_tictactoe::{Cell, GameEngine};
use tracing::{debug, instrument};

const HELP: &str = "Enter a square 1-9, a row and column like '0 2', a name like 'center', or 'q' to quit.";

/// A person typing moves.
pub struct Human {
    name: String,
}

impl Human {
    /// Creates a human contestant.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Contestant for Human {
    #[instrument(skip(self, engine, prompt), fields(player = %self.name))]
    fn choose(&mut self, engine: &GameEngine, prompt: &mut dyn Prompt) -> Result<Turn> {
        let mark = engine
            .to_move()
            .map(|m| m.to_string())
            .unwrap_or_default();
        let question = format!("{} ({}), your move: ", self.name, mark);

        loop {
            let Some(line) = prompt.ask(&question)? else {
                debug!("Input closed");
                return Ok(Turn::Abandon);
            };
            match parse_turn(&line) {
                Some(turn) => return Ok(turn),
                None => prompt.tell(HELP)?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Reads a turn from one line of input.
///
/// Accepts a keypad number `1`-`9`, two 0-based numbers `row col`
/// (separated by whitespace or a comma, not range-checked), a cell label,
/// or `q`/`quit`.
#[instrument]
pub fn parse_turn(line: &str) -> Option<Turn> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Some(Turn::Abandon);
    }

    let numbers: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();
    match numbers.as_slice() {
        [row, col] => {
            if let (Ok(row), Ok(col)) = (row.parse(), col.parse()) {
                return Some(Turn::Play { row, col });
            }
        }
        [single] => {
            if let Some(cell) = single.parse().ok().and_then(Cell::from_keypad) {
                return Some(Turn::Play {
                    row: cell.row(),
                    col: cell.col(),
                });
            }
        }
        _ => {}
    }

    Cell::from_label(line).map(|cell| Turn::Play {
        row: cell.row(),
        col: cell.col(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_digits() {
        assert_eq!(parse_turn("1"), Some(Turn::Play { row: 0, col: 0 }));
        assert_eq!(parse_turn(" 5 "), Some(Turn::Play { row: 1, col: 1 }));
        assert_eq!(parse_turn("9"), Some(Turn::Play { row: 2, col: 2 }));
        assert_eq!(parse_turn("0"), None);
        assert_eq!(parse_turn("10"), None);
    }

    #[test]
    fn test_row_col_pairs_pass_through_unchecked() {
        assert_eq!(parse_turn("0 2"), Some(Turn::Play { row: 0, col: 2 }));
        assert_eq!(parse_turn("2,1"), Some(Turn::Play { row: 2, col: 1 }));
        assert_eq!(parse_turn("3 3"), Some(Turn::Play { row: 3, col: 3 }));
    }

    #[test]
    fn test_labels_and_quit() {
        assert_eq!(parse_turn("Center"), Some(Turn::Play { row: 1, col: 1 }));
        assert_eq!(parse_turn("bottom-left"), Some(Turn::Play { row: 2, col: 0 }));
        assert_eq!(parse_turn("Q"), Some(Turn::Abandon));
        assert_eq!(parse_turn("quit"), Some(Turn::Abandon));
    }

    #[test]
    fn test_garbage_is_not_a_turn() {
        assert_eq!(parse_turn(""), None);
        assert_eq!(parse_turn("left"), None);
        assert_eq!(parse_turn("a b"), None);
    }
}
