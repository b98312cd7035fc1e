//! Result of the latest placement, surfaced to callers instead of printed.

use super::types::{Line, Player};
use serde::{Deserialize, Serialize};

/// Where the game stands after a move.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum GameOutcome {
    /// Game is ongoing.
    #[default]
    #[display("in progress")]
    InProgress,
    /// A player completed a line.
    #[display("{player} won {line}")]
    Won {
        /// The winner.
        player: Player,
        /// Endpoints of the completed line.
        line: Line,
    },
    /// The board filled up with no line completed.
    #[display("tie")]
    Tied,
}

impl GameOutcome {
    /// Returns true once the game has been won or tied.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            GameOutcome::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn test_display() {
        let won = GameOutcome::Won {
            player: Player::O,
            line: Line::new(Cell::new(0, 2), Cell::new(2, 0)),
        };
        assert_eq!(won.to_string(), "O won (0, 2)-(2, 0)");
        assert_eq!(GameOutcome::Tied.to_string(), "tie");
        assert_eq!(GameOutcome::InProgress.to_string(), "in progress");
    }

    #[test]
    fn test_terminal_states() {
        assert!(!GameOutcome::InProgress.is_terminal());
        assert!(GameOutcome::Tied.is_terminal());
        assert_eq!(GameOutcome::Tied.winner(), None);
        assert_eq!(GameOutcome::Tied.line(), None);
    }
}
