//! Tests for the bitwise tic-tac-toe board.

use strictly_tictactoe::{
    BitwiseBoard, Cell, GameOutcome, Line, MutableBoard, PlaceError, Player, Square,
};

fn play_all(board: &mut BitwiseBoard, cells: &[(usize, usize)]) -> GameOutcome {
    let mut outcome = board.outcome();
    for &(row, col) in cells {
        outcome = board.play(row, col);
    }
    outcome
}

#[test]
fn test_main_diagonal_win() {
    let mut board = BitwiseBoard::new();
    let outcome = play_all(&mut board, &[(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)]);

    let expected = Line::new(Cell::new(0, 0), Cell::new(2, 2));
    assert_eq!(
        outcome,
        GameOutcome::Won {
            player: Player::X,
            line: expected,
        }
    );
    assert!(board.is_finished());
    assert_eq!(board.winning_lines().collect::<Vec<_>>(), vec![expected]);
}

#[test]
fn test_tie_without_line() {
    // X O X / X O O / O X X
    let mut board = BitwiseBoard::new();
    let outcome = play_all(
        &mut board,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    );
    assert_eq!(outcome, GameOutcome::Tied);
    assert_eq!(board.playable_cells().count(), 0);
    assert_eq!(board.winning_lines().count(), 0);
}

#[test]
fn test_occupied_cell_leaves_board_unchanged() {
    let mut board = BitwiseBoard::new();
    board.play(1, 1);
    let before = board;

    assert_eq!(board.play(1, 1), GameOutcome::InProgress);
    assert_eq!(board, before);
    assert_eq!(board.current_player(), Player::O);

    let err = board.try_play(1, 1).unwrap_err();
    assert_eq!(err, PlaceError::CellOccupied(Cell::new(1, 1)));
    assert!(err.to_string().contains("occupied"));
}

#[test]
fn test_terminal_board_rejects_everything() {
    let mut board = BitwiseBoard::new();
    play_all(&mut board, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(board.winner(), Some(Player::X));
    let before = board;

    for index in 0..9 {
        board.place_mark(index);
        assert_eq!(
            board.try_place_mark(index),
            Err(PlaceError::GameAlreadyFinished)
        );
    }
    assert_eq!(board, before);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        PlaceError::InvalidCellIndex(12).to_string(),
        "Cell index 12 is out of bounds (must be 0-8)"
    );
    assert_eq!(
        PlaceError::InvalidCell { row: 3, col: 1 }.to_string(),
        "Cell (3, 1) is out of bounds (must be 0-2)"
    );
    assert_eq!(
        PlaceError::GameAlreadyFinished.to_string(),
        "Game is already finished"
    );
}

#[test]
fn test_home_and_away_moves() {
    let mut board = BitwiseBoard::new();
    play_all(&mut board, &[(2, 2), (0, 1), (1, 0)]);
    assert_eq!(
        board.home_moves().collect::<Vec<_>>(),
        vec![Cell::new(1, 0), Cell::new(2, 2)]
    );
    assert_eq!(board.away_moves().collect::<Vec<_>>(), vec![Cell::new(0, 1)]);
}

#[test]
fn test_row_wise_content_matches_moves() {
    let mut board = BitwiseBoard::new();
    play_all(&mut board, &[(0, 2), (2, 0)]);
    let content: Vec<_> = board.row_wise_content().collect();
    let mut expected = vec![Square::Empty; 9];
    expected[2] = Square::Occupied(Player::X);
    expected[6] = Square::Occupied(Player::O);
    assert_eq!(content, expected);
}

#[test]
fn test_trait_and_inherent_agree() {
    let mut board = BitwiseBoard::new();
    MutableBoard::place_mark(&mut board, 4);
    MutableBoard::place_mark(&mut board, 0);
    assert_eq!(
        MutableBoard::home_moves(&board),
        board.home_moves().collect::<Vec<_>>()
    );
    assert_eq!(
        MutableBoard::row_wise_content(&board),
        board.row_wise_content().collect::<Vec<_>>()
    );
    assert_eq!(MutableBoard::outcome(&board), board.outcome());
}

#[test]
fn test_snapshot_serializes() {
    let mut board = BitwiseBoard::new();
    play_all(&mut board, &[(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)]);
    let json = serde_json::to_value(board).unwrap();
    assert_eq!(json["home"], 0b100_010_001);
    assert_eq!(json["away"], 0b001_001_000);
    assert_eq!(json["current"], "X");
    assert_eq!(json["finished"], true);
    assert_eq!(json["outcome"]["Won"]["player"], "X");
}
