//! Plain-text board rendering.

use strictly_tictactoe::{GameOutcome, MutableBoard, Player, Square};

/// Renders the board with row and column headers.
pub fn render_board(board: &dyn MutableBoard) -> String {
    let mut out = String::from("   0 1 2\n");
    for (pos, square) in board.row_wise_content().into_iter().enumerate() {
        if pos % 3 == 0 {
            out.push_str(&format!("{}  ", pos / 3));
        }
        out.push(match square {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        });
        out.push(if pos % 3 == 2 { '\n' } else { ' ' });
    }
    out
}

/// One-line status message for the current outcome.
pub fn render_status(board: &dyn MutableBoard) -> String {
    match board.outcome() {
        GameOutcome::InProgress => format!("{} to move", board.current_player()),
        GameOutcome::Won { player, .. } => {
            let lines: Vec<String> = board.winning_lines().iter().map(|l| l.to_string()).collect();
            format!("{} won along {}", player, lines.join(", "))
        }
        GameOutcome::Tied => "Tie".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::BitwiseBoard;

    #[test]
    fn test_render_board() {
        let mut board = BitwiseBoard::new();
        board.play(0, 0);
        board.play(1, 1);
        assert_eq!(
            render_board(&board),
            "   0 1 2\n0  X . .\n1  . O .\n2  . . .\n"
        );
    }

    #[test]
    fn test_render_status() {
        let mut board = BitwiseBoard::new();
        assert_eq!(render_status(&board), "X to move");
        for (row, col) in [(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)] {
            board.play(row, col);
        }
        assert_eq!(render_status(&board), "X won along (0, 0)-(2, 2)");
    }
}
