//! Bit-packed tic-tac-toe board.
//!
//! The whole game lives in two nine-bit masks, one per player, plus the
//! player to move and a finished flag. A cell belongs to at most one mask,
//! and once the game is finished neither mask changes again.

use super::error::PlaceError;
use super::invariants::assert_invariants;
use super::mask::Mask;
use super::outcome::GameOutcome;
use super::rules;
use super::types::{CELLS, Cell, Line, Player, SIDE, Square};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, instrument};

/// Tic-tac-toe board storing each player's marks as a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BitwiseBoard {
    /// Cells held by X.
    home: Mask,
    /// Cells held by O.
    away: Mask,
    /// Player to move (or the player who ended the game).
    current: Player,
    finished: bool,
    outcome: GameOutcome,
}

impl BitwiseBoard {
    /// Creates an empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            home: Mask::EMPTY,
            away: Mask::EMPTY,
            current: Player::X,
            finished: false,
            outcome: GameOutcome::InProgress,
        }
    }

    /// Places the current player's mark at `index` (0-8, row-major).
    ///
    /// Moves on a finished game, on an occupied cell, or off the board are
    /// ignored and leave the board untouched. The returned outcome is the
    /// board's outcome after the call either way.
    pub fn place_mark(&mut self, index: usize) -> GameOutcome {
        match self.try_place_mark(index) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!(index, %err, "Ignoring placement");
                self.outcome
            }
        }
    }

    /// Places a mark at (`row`, `col`); same leniency as [`Self::place_mark`].
    ///
    /// A coordinate of 3 or more is ignored. It is never folded into
    /// `row * 3 + col`, which would land on a different cell.
    pub fn play(&mut self, row: usize, col: usize) -> GameOutcome {
        match self.try_play(row, col) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!(row, col, %err, "Ignoring placement");
                self.outcome
            }
        }
    }

    /// Places the current player's mark at `index`, rejecting invalid moves.
    ///
    /// # Errors
    ///
    /// - [`PlaceError::GameAlreadyFinished`] once the game is won or tied.
    /// - [`PlaceError::InvalidCellIndex`] if `index` is not in 0-8.
    /// - [`PlaceError::CellOccupied`] if either player already holds the cell.
    ///
    /// The board is unchanged whenever an error is returned.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn try_place_mark(&mut self, index: usize) -> Result<GameOutcome, PlaceError> {
        if self.finished {
            return Err(PlaceError::GameAlreadyFinished);
        }
        let bit = Mask::cell(index).ok_or(PlaceError::InvalidCellIndex(index))?;
        if !self.occupied().is_disjoint(bit) {
            return Err(PlaceError::CellOccupied(Cell::new(index / SIDE, index % SIDE)));
        }

        let mover = self.current;
        match mover {
            Player::X => self.home |= bit,
            Player::O => self.away |= bit,
        }

        // Only the mover's mask can have gained a line.
        if let Some(line) = rules::winning_line(self.moves(mover)).and_then(Mask::endpoints) {
            self.finish(GameOutcome::Won {
                player: mover,
                line,
            });
        } else if rules::is_full(self.occupied()) {
            self.finish(GameOutcome::Tied);
        } else {
            self.current = mover.opponent();
        }

        assert_invariants(self);
        debug!(index, outcome = %self.outcome, "Mark placed");
        Ok(self.outcome)
    }

    /// Places a mark at (`row`, `col`), rejecting invalid moves.
    ///
    /// # Errors
    ///
    /// [`PlaceError::InvalidCell`] if either coordinate is outside 0-2, and
    /// otherwise the errors of [`Self::try_place_mark`].
    pub fn try_play(&mut self, row: usize, col: usize) -> Result<GameOutcome, PlaceError> {
        let cell = Cell::try_from_row_col(row, col).ok_or(PlaceError::InvalidCell { row, col })?;
        self.try_place_mark(cell.index())
    }

    fn finish(&mut self, outcome: GameOutcome) {
        info!(%outcome, "Game finished");
        self.finished = true;
        self.outcome = outcome;
    }

    /// Cells occupied by X.
    ///
    /// Decoded from the home mask in row-major order. The iterator owns a
    /// copy of the mask, so it does not borrow the board.
    pub fn home_moves(&self) -> impl Iterator<Item = Cell> + use<> {
        self.home.cells()
    }

    /// Cells occupied by O.
    pub fn away_moves(&self) -> impl Iterator<Item = Cell> + use<> {
        self.away.cells()
    }

    /// Cells occupied by neither player.
    ///
    /// The complement of the union mask within the nine cells. This is not
    /// gated on the game state: a won board can still report empty cells,
    /// and placing on them is ignored.
    pub fn playable_cells(&self) -> impl Iterator<Item = Cell> + use<> {
        (!self.occupied()).cells()
    }

    /// The completed line, as its two endpoints, if the game was won.
    ///
    /// Yields at most one line.
    pub fn winning_lines(&self) -> impl Iterator<Item = Line> + use<> {
        self.outcome.line().into_iter()
    }

    /// Every square in row-major order.
    ///
    /// Yields exactly nine items, computed lazily from the two masks. This is
    /// the view renderers walk when drawing the grid.
    pub fn row_wise_content(&self) -> impl Iterator<Item = Square> + use<> {
        let (home, away) = (self.home, self.away);
        (0..CELLS).map(move |index| square_at(home, away, index))
    }

    /// Square at `cell`, or `None` if the cell is off the board.
    pub fn square(&self, cell: Cell) -> Option<Square> {
        if cell.row() >= SIDE || cell.col() >= SIDE {
            return None;
        }
        Some(square_at(self.home, self.away, cell.index()))
    }

    /// Player to move next; after the game ends, the player who ended it.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Returns true once the game has been won or tied.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Current outcome.
    ///
    /// `InProgress` until a placement completes a line or fills the board,
    /// then fixed for the rest of the board's life.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// The winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.outcome.winner()
    }

    /// Mask of X's cells.
    pub fn home_mask(&self) -> Mask {
        self.home
    }

    /// Mask of O's cells.
    pub fn away_mask(&self) -> Mask {
        self.away
    }

    /// Mask of a given player's cells.
    ///
    /// X always owns the home mask and O the away mask.
    pub fn moves(&self, player: Player) -> Mask {
        match player {
            Player::X => self.home,
            Player::O => self.away,
        }
    }

    /// Union of both masks.
    pub fn occupied(&self) -> Mask {
        self.home | self.away
    }

    /// Number of marks on the board.
    pub fn move_count(&self) -> usize {
        self.occupied().count()
    }

    /// Assembles a board from raw parts without any checks.
    #[cfg(test)]
    pub(crate) fn from_parts(
        home: Mask,
        away: Mask,
        current: Player,
        finished: bool,
        outcome: GameOutcome,
    ) -> Self {
        Self {
            home,
            away,
            current,
            finished,
            outcome,
        }
    }
}

fn square_at(home: Mask, away: Mask, index: usize) -> Square {
    if home.contains(index) {
        Square::Occupied(Player::X)
    } else if away.contains(index) {
        Square::Occupied(Player::O)
    } else {
        Square::Empty
    }
}

impl Default for BitwiseBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders `1|X|3` rows separated by `-+-+-`; empty squares show their
/// 1-based number.
impl fmt::Display for BitwiseBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, square) in self.row_wise_content().enumerate() {
            match square {
                Square::Empty => write!(f, "{}", pos + 1)?,
                Square::Occupied(player) => write!(f, "{}", player)?,
            }
            let col = pos % SIDE;
            if col + 1 < SIDE {
                write!(f, "|")?;
            } else if pos + 1 < CELLS {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
