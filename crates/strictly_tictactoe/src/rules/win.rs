//! Win detection over a single player's mask.

use crate::mask::{Mask, WINNING_LINES};
use tracing::instrument;

/// Returns the first winning line fully contained in `moves`.
///
/// Lines are tried in table order, so a move completing two lines at once
/// reports the earlier one.
#[instrument(level = "trace")]
pub fn winning_line(moves: Mask) -> Option<Mask> {
    WINNING_LINES
        .iter()
        .copied()
        .find(|&line| moves.contains_all(line))
}

/// Checks whether `moves` contains any winning line.
pub fn has_won(moves: Mask) -> bool {
    winning_line(moves).is_some()
}
