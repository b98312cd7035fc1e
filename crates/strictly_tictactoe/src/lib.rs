//! Bit-packed tic-tac-toe engine.
//!
//! The game state is two nine-bit masks, one per player. Placing a mark
//! checks the mover's mask against the eight winning lines, then checks the
//! union for a full board, and reports the result as a [`GameOutcome`]
//! instead of printing it.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{BitwiseBoard, Cell, GameOutcome, Line, Player};
//!
//! let mut board = BitwiseBoard::new();
//! for (row, col) in [(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)] {
//!     board.play(row, col);
//! }
//! assert_eq!(
//!     board.outcome(),
//!     GameOutcome::Won {
//!         player: Player::X,
//!         line: Line::new(Cell::new(0, 0), Cell::new(2, 2)),
//!     }
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
pub mod invariants;
mod mask;
mod outcome;
pub mod rules;
mod traits;
mod types;

pub use board::BitwiseBoard;
pub use error::PlaceError;
pub use mask::{Mask, SetBits, WINNING_LINES};
pub use outcome::GameOutcome;
pub use traits::MutableBoard;
pub use types::{CELLS, Cell, Line, Player, SIDE, Square};
