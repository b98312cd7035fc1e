//! Board interface consumed by front ends.

use super::board::BitwiseBoard;
use super::outcome::GameOutcome;
use super::types::{Cell, Line, Player, Square};

/// A tic-tac-toe board that accepts moves and answers queries.
///
/// Renderers and input loops depend on this trait rather than on a concrete
/// board, so they never see how the state is stored.
pub trait MutableBoard {
    /// Places the current player's mark at a row-major index (0-8).
    ///
    /// Invalid moves are ignored: a finished game, an occupied cell, or an
    /// index off the board leaves the board as it was. The return value is
    /// the outcome after the call, so a front end can report a win or tie
    /// without asking again.
    fn place_mark(&mut self, index: usize) -> GameOutcome;

    /// Places the current player's mark at (`row`, `col`).
    ///
    /// This is the entry point for coordinate input. Rows and columns
    /// outside 0-2 are ignored rather than folded into another cell.
    fn play(&mut self, row: usize, col: usize) -> GameOutcome;

    /// Cells held by X, in row-major order.
    ///
    /// Renderers use this together with [`Self::away_moves`] to draw marks
    /// without touching the underlying masks.
    fn home_moves(&self) -> Vec<Cell>;

    /// Cells held by O, in row-major order.
    fn away_moves(&self) -> Vec<Cell>;

    /// Empty cells, in row-major order.
    ///
    /// Always the complement of the two players' cells. On a finished game
    /// the list may still be non-empty; check [`Self::is_finished`] before
    /// offering moves.
    fn playable_cells(&self) -> Vec<Cell>;

    /// Winning line endpoints; empty unless the game was won.
    fn winning_lines(&self) -> Vec<Line>;

    /// All nine squares in row-major order.
    ///
    /// Index `i` of the result is the square at row `i / 3`, column `i % 3`.
    fn row_wise_content(&self) -> Vec<Square>;

    /// Player to move.
    ///
    /// Once the game is over this stays on the player who made the final
    /// move.
    fn current_player(&self) -> Player;

    /// Returns true once the game has been won or tied.
    fn is_finished(&self) -> bool;

    /// Current outcome.
    fn outcome(&self) -> GameOutcome;
}

impl MutableBoard for BitwiseBoard {
    fn place_mark(&mut self, index: usize) -> GameOutcome {
        BitwiseBoard::place_mark(self, index)
    }

    fn play(&mut self, row: usize, col: usize) -> GameOutcome {
        BitwiseBoard::play(self, row, col)
    }

    fn home_moves(&self) -> Vec<Cell> {
        BitwiseBoard::home_moves(self).collect()
    }

    fn away_moves(&self) -> Vec<Cell> {
        BitwiseBoard::away_moves(self).collect()
    }

    fn playable_cells(&self) -> Vec<Cell> {
        BitwiseBoard::playable_cells(self).collect()
    }

    fn winning_lines(&self) -> Vec<Line> {
        BitwiseBoard::winning_lines(self).collect()
    }

    fn row_wise_content(&self) -> Vec<Square> {
        BitwiseBoard::row_wise_content(self).collect()
    }

    fn current_player(&self) -> Player {
        BitwiseBoard::current_player(self)
    }

    fn is_finished(&self) -> bool {
        BitwiseBoard::is_finished(self)
    }

    fn outcome(&self) -> GameOutcome {
        BitwiseBoard::outcome(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_object_plays_a_game() {
        let mut board: Box<dyn MutableBoard> = Box::new(BitwiseBoard::new());
        board.play(1, 1);
        board.play(0, 0);
        assert_eq!(board.home_moves(), vec![Cell::new(1, 1)]);
        assert_eq!(board.away_moves(), vec![Cell::new(0, 0)]);
        assert_eq!(board.playable_cells().len(), 7);
        assert_eq!(board.current_player(), Player::X);
        assert!(board.winning_lines().is_empty());
    }

    #[test]
    fn test_trait_object_after_win() {
        let mut board: Box<dyn MutableBoard> = Box::new(BitwiseBoard::new());
        // X: 0 1 2, O: 3 4
        for index in [0, 3, 1, 4] {
            board.place_mark(index);
        }
        assert_eq!(board.play(3, 0), GameOutcome::InProgress);
        assert_eq!(board.row_wise_content().len(), 9);
        let outcome = board.place_mark(2);

        assert!(board.is_finished());
        assert_eq!(outcome, board.outcome());
        assert_eq!(board.current_player(), Player::X);
        assert_eq!(board.playable_cells().len(), 4);
        assert_eq!(board.place_mark(8), outcome);
        assert_eq!(board.playable_cells().len(), 4);
        let line = Line::new(Cell::new(0, 0), Cell::new(0, 2));
        assert_eq!(board.winning_lines(), vec![line]);
    }
}
