//! Core domain types for tic-tac-toe.

use crate::cell::Cell;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// X always moves first.
    X,
    /// O moves second.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// The mark due to play after `moves_played` moves: X on even counts, O on odd.
    pub fn for_move(moves_played: usize) -> Self {
        if moves_played % 2 == 0 { Mark::X } else { Mark::O }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Taken by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given cell.
    pub fn get(&self, cell: Cell) -> Square {
        self.squares[cell.index()]
    }

    /// Sets the square at the given cell.
    ///
    /// The board itself does not enforce play order; [`GameEngine`](crate::GameEngine)
    /// is the only path that guarantees legal positions.
    pub fn set(&mut self, cell: Cell, square: Square) {
        self.squares[cell.index()] = square;
    }

    /// Returns a copy of this board with `mark` placed at `cell`.
    pub fn with(&self, cell: Cell, mark: Mark) -> Self {
        let mut next = *self;
        next.set(cell, Square::Occupied(mark));
        next
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::ALL
            .into_iter()
            .filter(|cell| self.is_empty(*cell))
            .collect()
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }
}

/// Renders the board as three `a|b|c` rows separated by `-+-+-`.
///
/// Empty cells show their keypad number so a player can read off which
/// key to press.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let cell = Cell::ALL[row * 3 + col];
                match self.get(cell) {
                    Square::Empty => write!(f, "{}", cell.keypad())?,
                    Square::Occupied(mark) => write!(f, "{mark}")?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error returned when a board diagram cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// A character that is neither a mark nor an empty marker.
    #[display("Unexpected character {:?} in board diagram", _0)]
    UnexpectedChar(char),
    /// The diagram did not describe exactly nine cells.
    #[display("Board diagram has {} cells, expected 9", _0)]
    WrongCellCount(usize),
}

impl std::error::Error for BoardParseError {}

/// Parses a board diagram such as `"XO. / .X. / ..O"`.
///
/// `X`/`O` (any case) are marks; `.`, `_` and digits are empty cells;
/// whitespace, `|`, `/`, `-` and `+` are ignored, so the [`Display`](std::fmt::Display)
/// output parses back to the same board.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for ch in s.chars() {
            match ch {
                'X' | 'x' => squares.push(Square::Occupied(Mark::X)),
                'O' | 'o' => squares.push(Square::Occupied(Mark::O)),
                '.' | '_' => squares.push(Square::Empty),
                c if c.is_ascii_digit() => squares.push(Square::Empty),
                c if c.is_whitespace() || matches!(c, '|' | '/' | '-' | '+') => {}
                other => return Err(BoardParseError::UnexpectedChar(other)),
            }
        }

        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|v: Vec<Square>| BoardParseError::WrongCellCount(v.len()))?;
        Ok(Self { squares })
    }
}

/// Outcome of a position, recomputed from the board on every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Moves remain and nobody has three in a row.
    InProgress,
    /// X completed a line.
    XWins,
    /// O completed a line.
    OWins,
    /// Board full with no line.
    Tie,
}

impl GameResult {
    /// The result for a win by `mark`.
    pub fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::X => GameResult::XWins,
            Mark::O => GameResult::OWins,
        }
    }

    /// Whether no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        self != GameResult::InProgress
    }

    /// The winning mark, if the game was won.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameResult::XWins => Some(Mark::X),
            GameResult::OWins => Some(Mark::O),
            GameResult::InProgress | GameResult::Tie => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "In progress"),
            GameResult::XWins => write!(f, "X wins"),
            GameResult::OWins => write!(f, "O wins"),
            GameResult::Tie => write!(f, "Tie"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_parity() {
        assert_eq!(Mark::for_move(0), Mark::X);
        assert_eq!(Mark::for_move(1), Mark::O);
        assert_eq!(Mark::for_move(8), Mark::X);
    }

    #[test]
    fn test_display_shows_keypad_numbers_for_empty_cells() {
        let board = Board::new().with(Cell::TopLeft, Mark::X).with(Cell::Center, Mark::O);
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_parse_diagram() {
        let board: Board = "XO. / .X. / ..O".parse().unwrap();
        assert_eq!(board.get(Cell::TopLeft), Square::Occupied(Mark::X));
        assert_eq!(board.get(Cell::TopCenter), Square::Occupied(Mark::O));
        assert_eq!(board.get(Cell::Center), Square::Occupied(Mark::X));
        assert_eq!(board.get(Cell::BottomRight), Square::Occupied(Mark::O));
        assert_eq!(board.occupied_count(), 4);
    }

    #[test]
    fn test_display_output_parses_back() {
        let board = Board::new().with(Cell::TopRight, Mark::O).with(Cell::BottomLeft, Mark::X);
        let parsed: Board = board.to_string().parse().unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn test_parse_rejects_bad_diagrams() {
        assert_eq!("XO".parse::<Board>(), Err(BoardParseError::WrongCellCount(2)));
        assert_eq!(
            "XOZ......".parse::<Board>(),
            Err(BoardParseError::UnexpectedChar('Z'))
        );
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board: Board = "XOX OXO X..".parse().unwrap();
        assert_eq!(board.empty_cells(), vec![Cell::BottomCenter, Cell::BottomRight]);
        assert_eq!(board.count(Mark::X), 4);
        assert_eq!(board.count(Mark::O), 3);
    }

    #[test]
    fn test_result_helpers() {
        assert!(!GameResult::InProgress.is_terminal());
        assert!(GameResult::Tie.is_terminal());
        assert_eq!(GameResult::won_by(Mark::O), GameResult::OWins);
        assert_eq!(GameResult::XWins.winner(), Some(Mark::X));
        assert_eq!(GameResult::Tie.winner(), None);
    }
}
