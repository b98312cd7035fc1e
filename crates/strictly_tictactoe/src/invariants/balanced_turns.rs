//! Balanced turns invariant: mark counts agree with whose turn it is.

use super::Invariant;
use crate::board::BitwiseBoard;
use crate::types::Player;

/// Invariant: X moves first and turns alternate.
///
/// While the game runs, X is to move exactly when both players hold the
/// same number of cells. On a finished board `current` names the player who
/// made the last move, so the relation flips.
pub struct BalancedTurnsInvariant;

impl Invariant<BitwiseBoard> for BalancedTurnsInvariant {
    fn holds(board: &BitwiseBoard) -> bool {
        let x = board.home_mask().count();
        let o = board.away_mask().count();
        match (board.is_finished(), board.current_player()) {
            (false, Player::X) | (true, Player::O) => x == o,
            (false, Player::O) | (true, Player::X) => x == o + 1,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
