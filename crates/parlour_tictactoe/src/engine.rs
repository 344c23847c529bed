//! The game engine: one board, one move counter, one session.

use crate::action::{Move, MoveRejection};
use crate::cell::Cell;
use crate::rules::evaluate;
use crate::strategy::choose_computer_move;
use crate::types::{Board, GameResult, Mark, Square};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// What happened to a move request.
///
/// Both variants carry the [`GameResult`] as it stands after the request,
/// so a caller can re-render without asking the engine again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The mark was placed.
    Placed {
        /// The move that was recorded.
        mv: Move,
        /// Result after the move.
        result: GameResult,
    },
    /// The request was ignored and the engine is unchanged.
    Ignored {
        /// Why it was ignored.
        reason: MoveRejection,
        /// Result, unchanged by the request.
        result: GameResult,
    },
}

impl MoveOutcome {
    /// Result of the game after this request.
    pub fn result(&self) -> GameResult {
        match self {
            MoveOutcome::Placed { result, .. } | MoveOutcome::Ignored { result, .. } => *result,
        }
    }

    /// The recorded move, when the request was accepted.
    pub fn placed(&self) -> Option<Move> {
        match self {
            MoveOutcome::Placed { mv, .. } => Some(*mv),
            MoveOutcome::Ignored { .. } => None,
        }
    }

    /// The rejection reason, when the request was ignored.
    pub fn rejection(&self) -> Option<MoveRejection> {
        match self {
            MoveOutcome::Placed { .. } => None,
            MoveOutcome::Ignored { reason, .. } => Some(*reason),
        }
    }
}

/// Tic-tac-toe engine for a single game.
///
/// Whose turn it is and whether the game is over are never stored; both are
/// derived from the board whenever they are asked for.
///
/// A deserialized engine is rebuilt by replaying its history, and the
/// snapshot is rejected unless that reproduces the stored board exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EngineSnapshot", into = "EngineSnapshot")]
pub struct GameEngine {
    board: Board,
    history: Vec<Move>,
}

/// Serialized form of a [`GameEngine`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EngineSnapshot {
    board: Board,
    history: Vec<Move>,
}

impl From<GameEngine> for EngineSnapshot {
    fn from(engine: GameEngine) -> Self {
        Self {
            board: engine.board,
            history: engine.history,
        }
    }
}

impl TryFrom<EngineSnapshot> for GameEngine {
    type Error = SnapshotError;

    #[instrument(skip(snapshot), fields(moves = snapshot.history.len()))]
    fn try_from(snapshot: EngineSnapshot) -> Result<Self, Self::Error> {
        let mut engine = Self::new();
        for (index, mv) in snapshot.history.iter().enumerate() {
            let expected = Mark::for_move(index);
            if mv.mark != expected {
                return Err(SnapshotError::WrongMark {
                    index,
                    expected,
                    found: mv.mark,
                });
            }
            if let MoveOutcome::Ignored { reason, .. } = engine.play(mv.cell) {
                return Err(SnapshotError::RejectedMove { index, reason });
            }
        }
        if engine.board != snapshot.board {
            return Err(SnapshotError::BoardMismatch);
        }
        debug!(moves = engine.history.len(), "Snapshot restored");
        Ok(engine)
    }
}

/// Why a serialized engine could not be restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SnapshotError {
    /// A history entry carries the wrong mark for its position.
    #[display("Move {index} should be {expected}, found {found}")]
    WrongMark {
        /// Position in the history.
        index: usize,
        /// Mark due at that position.
        expected: Mark,
        /// Mark recorded.
        found: Mark,
    },

    /// A history entry would not be accepted by the engine.
    #[display("Move {index} is not playable: {reason}")]
    RejectedMove {
        /// Position in the history.
        index: usize,
        /// Why the engine refuses it.
        reason: MoveRejection,
    },

    /// Replaying the history does not produce the stored board.
    #[display("Board does not match move history")]
    BoardMismatch,
}

impl std::error::Error for SnapshotError {}

impl GameEngine {
    /// Creates an engine with an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds an engine by playing `cells` in order.
    ///
    /// Cells that would be rejected live (occupied, or after the game ended)
    /// are skipped the same way.
    #[instrument(skip(cells))]
    pub fn replay(cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut engine = Self::new();
        for cell in cells {
            engine.play(cell);
        }
        debug!(moves = engine.history.len(), result = %engine.result(), "Replayed game");
        engine
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of accepted moves.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Accepted moves in play order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Whether at least one move has been played.
    pub fn has_started(&self) -> bool {
        !self.history.is_empty()
    }

    /// Result of the game, computed from the board.
    pub fn result(&self) -> GameResult {
        evaluate(&self.board)
    }

    /// Whether the game has reached a terminal state.
    pub fn is_over(&self) -> bool {
        self.result().is_terminal()
    }

    /// The mark due to play, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Mark> {
        if self.is_over() {
            None
        } else {
            Some(Mark::for_move(self.board.occupied_count()))
        }
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        self.board.empty_cells()
    }

    /// Plays the current turn's mark at `(row, col)`.
    ///
    /// Out-of-range coordinates, occupied cells and moves after the game is
    /// decided leave the engine untouched and come back as
    /// [`MoveOutcome::Ignored`].
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> MoveOutcome {
        match Cell::from_coords(row, col) {
            Some(cell) => self.play(cell),
            None => self.ignore(MoveRejection::OutOfBounds { row, col }),
        }
    }

    /// Plays the current turn's mark at `cell`.
    #[instrument(skip(self), fields(move_count = self.history.len()))]
    pub fn play(&mut self, cell: Cell) -> MoveOutcome {
        let before = self.result();
        if before.is_terminal() {
            return self.ignore(MoveRejection::GameOver(before));
        }
        if !self.board.is_empty(cell) {
            return self.ignore(MoveRejection::Occupied(cell));
        }

        let mark = Mark::for_move(self.board.occupied_count());
        self.board.set(cell, Square::Occupied(mark));
        let mv = Move::new(mark, cell);
        self.history.push(mv);

        let result = self.result();
        debug!(%mv, %result, "Move placed");
        MoveOutcome::Placed { mv, result }
    }

    /// Lets the heuristic opponent play for whichever side is to move.
    ///
    /// Returns `None` when the game is already over.
    #[instrument(skip(self, rng))]
    pub fn play_computer_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<MoveOutcome> {
        let mark = self.to_move()?;
        let cell = choose_computer_move(&self.board, mark, mark.opponent(), rng)?;
        Some(self.play(cell))
    }

    fn ignore(&self, reason: MoveRejection) -> MoveOutcome {
        debug!(%reason, "Move ignored");
        MoveOutcome::Ignored {
            reason,
            result: self.result(),
        }
    }
}
