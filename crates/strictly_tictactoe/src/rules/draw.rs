//! Tie detection.

use super::win::has_won;
use crate::mask::Mask;
use tracing::instrument;

/// Checks if every cell is occupied.
#[instrument(level = "trace")]
pub fn is_full(occupied: Mask) -> bool {
    occupied.is_full()
}

/// A full board where neither side holds a line.
pub fn is_tie(home: Mask, away: Mask) -> bool {
    is_full(home | away) && !has_won(home) && !has_won(away)
}
