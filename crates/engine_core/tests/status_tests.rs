//! End-of-game classification tests: check, checkmate, stalemate, and the
//! classifier's behavior over a full played-out sequence.

use engine_core::{classify, Board, Color, GameStatus, Move, Square};

fn mv(from: &str, to: &str) -> Move {
    Move::new(
        Square::from_coord(from).unwrap(),
        Square::from_coord(to).unwrap(),
    )
}

#[test]
fn test_startpos_is_normal() {
    let board = Board::start();
    assert_eq!(classify(&board, Color::White), GameStatus::Normal);
    assert_eq!(classify(&board, Color::Black), GameStatus::Normal);
}

#[test]
fn test_open_file_queen_gives_check() {
    // Queen on e8, king on e1, nothing between: check, but the king can
    // step aside.
    let board = Board::from_codes(
        [
            ["", "", "", "", "bq", "", "", "bk"],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "wk", "", "", ""],
        ],
        Color::White,
    )
    .unwrap();
    assert_eq!(classify(&board, Color::White), GameStatus::Check);
}

#[test]
fn test_boxed_in_king_is_checkmated() {
    // Same queen check, but the king is boxed in: own pawns hold d2 and
    // f2, e2 is covered by the queen, and black knights on b2 and g3
    // cover d1 and f1 without giving check themselves.
    let board = Board::from_codes(
        [
            ["", "", "", "", "bq", "", "", "bk"],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "bn", ""],
            ["", "bn", "", "wp", "", "wp", "", ""],
            ["", "", "", "", "wk", "", "", ""],
        ],
        Color::White,
    )
    .unwrap();
    assert_eq!(classify(&board, Color::White), GameStatus::Checkmate);
}

#[test]
fn test_back_rank_mate() {
    let board = Board::from_codes(
        [
            ["", "", "", "", "", "", "bk", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "wp", "wp", "wp"],
            ["br", "", "", "", "", "", "wk", ""],
        ],
        Color::White,
    )
    .unwrap();
    assert_eq!(classify(&board, Color::White), GameStatus::Checkmate);
}

#[test]
fn test_corner_stalemate_is_not_checkmate() {
    // Lone black king on a8; white queen on b6 covers every escape but
    // gives no check.
    let board = Board::from_codes(
        [
            ["bk", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "wq", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "wk", "", ""],
        ],
        Color::Black,
    )
    .unwrap();
    assert!(!board.in_check(Color::Black));
    assert_eq!(classify(&board, Color::Black), GameStatus::Stalemate);
}

#[test]
fn test_fools_mate_sequence() {
    // 1. f3 e5 2. g4 Qh4# played through apply_move, classifying after
    // every half-move the way a game loop would.
    let mut board = Board::start();

    board.apply_move(mv("f2", "f3"));
    assert_eq!(classify(&board, board.turn()), GameStatus::Normal);

    board.apply_move(mv("e7", "e5"));
    assert_eq!(classify(&board, board.turn()), GameStatus::Normal);

    board.apply_move(mv("g2", "g4"));
    assert_eq!(classify(&board, board.turn()), GameStatus::Normal);

    board.apply_move(mv("d8", "h4"));
    assert_eq!(board.turn(), Color::White);
    assert_eq!(classify(&board, Color::White), GameStatus::Checkmate);
}

#[test]
fn test_check_is_not_mate_when_block_exists() {
    // The boxed-in position again: the e8 queen is the only checker, the
    // knights only cover the d1 and f1 escapes. A rook stuck on h1 cannot
    // reach the e-file below the queen, so this is still mate.
    let board = Board::from_codes(
        [
            ["", "", "", "", "bq", "", "", "bk"],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "bn", ""],
            ["", "bn", "", "wp", "", "wp", "", ""],
            ["", "", "", "", "wk", "", "", "wr"],
        ],
        Color::White,
    )
    .unwrap();
    assert_eq!(classify(&board, Color::White), GameStatus::Checkmate);

    // Move the rook to h4 and it can interpose on e4, blocking the queen:
    // the same check is now escapable.
    let board = Board::from_codes(
        [
            ["", "", "", "", "bq", "", "", "bk"],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", "wr"],
            ["", "", "", "", "", "", "bn", ""],
            ["", "bn", "", "wp", "", "wp", "", ""],
            ["", "", "", "", "wk", "", "", ""],
        ],
        Color::White,
    )
    .unwrap();
    assert_eq!(classify(&board, Color::White), GameStatus::Check);
}

#[test]
fn test_status_is_over() {
    assert!(!GameStatus::Normal.is_over());
    assert!(!GameStatus::Check.is_over());
    assert!(GameStatus::Checkmate.is_over());
    assert!(GameStatus::Stalemate.is_over());
}
