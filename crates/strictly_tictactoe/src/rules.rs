//! Game rules for tic-tac-toe.
//!
//! Pure functions over occupancy masks. They hold no state, so the board
//! and the invariant checks share one definition of a win and a tie.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{has_won, winning_line};
