//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Number of rows (and columns) on the board.
pub const SIDE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first, owns the home mask).
    X,
    /// Player O (goes second, owns the away mask).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Content of one cell in the row-wise view of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// A (row, col) coordinate on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Cell {
    row: usize,
    col: usize,
}

impl Cell {
    /// Creates a cell without checking bounds.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a cell if both coordinates are on the board.
    pub fn try_from_row_col(row: usize, col: usize) -> Option<Self> {
        (row < SIDE && col < SIDE).then_some(Self { row, col })
    }

    /// Decodes a row-major cell index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELLS).then_some(Self {
            row: index / SIDE,
            col: index % SIDE,
        })
    }

    /// Row-major index of this cell.
    pub const fn index(self) -> usize {
        self.row * SIDE + self.col
    }

    /// Row of the cell.
    pub const fn row(self) -> usize {
        self.row
    }

    /// Column of the cell.
    pub const fn col(self) -> usize {
        self.col
    }
}

/// A winning line, described by its two endpoint cells.
///
/// Every winning line is straight, so the middle cell is implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{from}-{to}")]
pub struct Line {
    from: Cell,
    to: Cell,
}

impl Line {
    /// Creates a line from its endpoints.
    pub const fn new(from: Cell, to: Cell) -> Self {
        Self { from, to }
    }

    /// First endpoint (lowest cell index).
    pub const fn start(self) -> Cell {
        self.from
    }

    /// Last endpoint (highest cell index).
    pub const fn end(self) -> Cell {
        self.to
    }
}
