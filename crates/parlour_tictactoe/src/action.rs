//! Moves and the reasons a move can be turned away.

use crate::cell::Cell;
use crate::types::{GameResult, Mark};
use serde::{Deserialize, Serialize};

/// A mark placed on a cell.
///
/// The engine records one of these per accepted move, in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub cell: Cell,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, cell: Cell) -> Self {
        Self { mark, cell }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.cell.label())
    }
}

/// Why the engine ignored a move request.
///
/// Rejections never change engine state. They are reported so callers can
/// log them; a front-end that simply re-renders may drop them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// Row or column outside `0..3`.
    #[display("({row}, {col}) is outside the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Cell),

    /// The game has already been decided.
    #[display("Game is already over ({})", _0)]
    GameOver(GameResult),
}

impl std::error::Error for MoveRejection {}
