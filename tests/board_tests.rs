use othello::{Board, Cell, MoveError, Outcome, Player, Score, BOARD_SIZE};

#[test]
fn test_initial_position() {
    let board = Board::new();
    assert_eq!(board.cell(3, 3), Some(Cell::White));
    assert_eq!(board.cell(4, 4), Some(Cell::White));
    assert_eq!(board.cell(3, 4), Some(Cell::Black));
    assert_eq!(board.cell(4, 3), Some(Cell::Black));

    let score = board.score();
    assert_eq!(score, Score { black: 2, white: 2 });
    assert_eq!(score.empty(), 60);
}

#[test]
fn test_initial_legal_moves() {
    let board = Board::new();
    assert_eq!(
        board.legal_moves(Player::Black),
        vec![(2, 3), (3, 2), (4, 5), (5, 4)]
    );
    assert_eq!(
        board.legal_moves(Player::White),
        vec![(2, 4), (3, 5), (4, 2), (5, 3)]
    );
}

#[test]
fn test_apply_move_flips_bracketed_run() {
    let mut board = Board::new();
    let flipped = board.apply_move(2, 3, Player::Black).unwrap();
    assert_eq!(flipped, 1);
    assert_eq!(board.cell(2, 3), Some(Cell::Black));
    assert_eq!(board.cell(3, 3), Some(Cell::Black));
    assert_eq!(board.score(), Score { black: 4, white: 1 });
}

#[test]
fn test_apply_move_rejections() {
    let mut board = Board::new();
    assert_eq!(
        board.apply_move(3, 3, Player::Black).unwrap_err(),
        MoveError::Occupied
    );
    assert_eq!(
        board.apply_move(BOARD_SIZE, 0, Player::Black).unwrap_err(),
        MoveError::OutOfBounds
    );
    assert_eq!(
        board.apply_move(0, 0, Player::Black).unwrap_err(),
        MoveError::Illegal
    );
    // rejected calls leave the board untouched
    assert_eq!(board.score(), Score { black: 2, white: 2 });
}

#[test]
fn test_no_wraparound_at_board_edge() {
    // Opponent run reaches the edge with no bracketing disc beyond it.
    let mut board = Board::empty();
    board.set_cell(0, 0, Cell::White).unwrap();
    board.set_cell(0, 1, Cell::White).unwrap();
    assert!(!board.is_legal_move(0, 2, Player::Black));
}

#[test]
fn test_multi_direction_flip() {
    let mut board = Board::empty();
    board.set_cell(2, 2, Cell::Black).unwrap();
    board.set_cell(2, 3, Cell::White).unwrap();
    board.set_cell(3, 4, Cell::White).unwrap();
    board.set_cell(4, 4, Cell::Black).unwrap();

    // (2,4) brackets leftwards and downwards at once
    let flipped = board.apply_move(2, 4, Player::Black).unwrap();
    assert_eq!(flipped, 2);
    assert_eq!(board.cell(2, 3), Some(Cell::Black));
    assert_eq!(board.cell(3, 4), Some(Cell::Black));
    assert_eq!(board.score(), Score { black: 5, white: 0 });
}

#[test]
fn test_legality_is_per_player() {
    let mut board = Board::empty();
    board.set_cell(3, 3, Cell::White).unwrap();
    board.set_cell(3, 4, Cell::Black).unwrap();
    board.set_cell(4, 2, Cell::Black).unwrap();
    board.set_cell(5, 2, Cell::White).unwrap();

    // (3,2) brackets a white run for Black and a black run for White
    assert!(board.is_legal_move(3, 2, Player::Black));
    assert!(board.is_legal_move(3, 2, Player::White));

    // (3,5) only works for White
    assert!(board.is_legal_move(3, 5, Player::White));
    assert!(!board.is_legal_move(3, 5, Player::Black));
}

#[test]
fn test_terminal_is_not_board_full() {
    // Two isolated discs: plenty of empty cells, but nobody can bracket.
    let mut board = Board::empty();
    board.set_cell(0, 0, Cell::Black).unwrap();
    board.set_cell(7, 7, Cell::White).unwrap();
    assert!(!board.has_legal_move(Player::Black));
    assert!(!board.has_legal_move(Player::White));
    assert!(board.is_terminal());
}

#[test]
fn test_score_outcomes() {
    assert_eq!(Score { black: 37, white: 27 }.outcome(), Outcome::BlackWin);
    assert_eq!(Score { black: 27, white: 37 }.outcome(), Outcome::WhiteWin);
    assert_eq!(Score { black: 32, white: 32 }.outcome(), Outcome::Tie);
}
