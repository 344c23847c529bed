//! Named cells of the 3x3 board.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the nine positions on the board.
///
/// Cells are addressed either by name, by `(row, col)` with both in
/// `0..3`, or by their row-major index `0..9`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Cell {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    TopCenter,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    MiddleRight,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    BottomCenter,
    /// Row 2, column 2.
    BottomRight,
}

impl Cell {
    /// All nine cells in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// The center cell, (1, 1).
    pub const CENTER: Cell = Cell::Center;

    /// The four corners in row-major order.
    pub const CORNERS: [Cell; 4] = [
        Cell::TopLeft,
        Cell::TopRight,
        Cell::BottomLeft,
        Cell::BottomRight,
    ];

    /// The four edge cells in row-major order.
    pub const EDGES: [Cell; 4] = [
        Cell::TopCenter,
        Cell::MiddleLeft,
        Cell::MiddleRight,
        Cell::BottomCenter,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Cell::TopLeft => "Top-left",
            Cell::TopCenter => "Top-center",
            Cell::TopRight => "Top-right",
            Cell::MiddleLeft => "Middle-left",
            Cell::Center => "Center",
            Cell::MiddleRight => "Middle-right",
            Cell::BottomLeft => "Bottom-left",
            Cell::BottomCenter => "Bottom-center",
            Cell::BottomRight => "Bottom-right",
        }
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Row of this cell (0-2).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Column of this cell (0-2).
    pub fn col(self) -> usize {
        self.index() % 3
    }

    /// Keypad number shown to players (1-9).
    pub fn keypad(self) -> usize {
        self.index() + 1
    }

    /// Creates a cell from its row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a cell from `(row, col)`; `None` when either is out of range.
    #[instrument]
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Creates a cell from its keypad number (1-9).
    pub fn from_keypad(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(Self::from_index)
    }

    /// Looks a cell up by label, ignoring case and surrounding whitespace.
    #[instrument]
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim().to_lowercase();
        Self::iter().find(|cell| cell.label().to_lowercase() == wanted)
    }

    /// Whether this cell is one of the four corners.
    pub fn is_corner(self) -> bool {
        Self::CORNERS.contains(&self)
    }

    /// Whether this cell is one of the four edges.
    pub fn is_edge(self) -> bool {
        Self::EDGES.contains(&self)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
