//! Outcome consistency: the recorded outcome matches the masks.

use super::Invariant;
use crate::board::BitwiseBoard;
use crate::outcome::GameOutcome;
use crate::rules;

/// Invariant: the finished flag and recorded outcome agree with the masks.
pub struct OutcomeConsistentInvariant;

impl Invariant<BitwiseBoard> for OutcomeConsistentInvariant {
    fn holds(board: &BitwiseBoard) -> bool {
        let home = board.home_mask();
        let away = board.away_mask();
        match board.outcome() {
            GameOutcome::InProgress => {
                !board.is_finished()
                    && !rules::has_won(home)
                    && !rules::has_won(away)
                    && !rules::is_full(home | away)
            }
            GameOutcome::Won { player, line } => {
                let moves = board.moves(player);
                board.is_finished()
                    && board.current_player() == player
                    && rules::winning_line(moves).and_then(|m| m.endpoints()) == Some(line)
                    && !rules::has_won(board.moves(player.opponent()))
            }
            GameOutcome::Tied => board.is_finished() && rules::is_tie(home, away),
        }
    }

    fn description() -> &'static str {
        "Recorded outcome matches the board"
    }
}
