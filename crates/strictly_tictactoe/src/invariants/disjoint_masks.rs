//! Disjoint masks invariant: a cell belongs to at most one player.

use super::Invariant;
use crate::board::BitwiseBoard;

/// Invariant: `home & away == 0`.
pub struct DisjointMasksInvariant;

impl Invariant<BitwiseBoard> for DisjointMasksInvariant {
    fn holds(board: &BitwiseBoard) -> bool {
        board.home_mask().is_disjoint(board.away_mask())
    }

    fn description() -> &'static str {
        "No cell is held by both players"
    }
}
