//! Errors returned by strict placement.

use super::types::Cell;

/// Why a placement was rejected.
///
/// The lenient [`place_mark`](crate::BitwiseBoard::place_mark) path turns
/// every one of these into a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The targeted cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Cell),

    /// The game has already been won or tied.
    #[display("Game is already finished")]
    GameAlreadyFinished,

    /// Index outside 0-8.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    InvalidCellIndex(usize),

    /// Row or column outside 0-2.
    #[display("Cell ({row}, {col}) is out of bounds (must be 0-2)")]
    InvalidCell {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl std::error::Error for PlaceError {}
