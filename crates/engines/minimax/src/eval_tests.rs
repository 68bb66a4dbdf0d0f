use super::*;
use engine_core::Board;

#[test]
fn test_material_startpos_is_balanced() {
    let mut eval = MaterialEvaluator::seeded(1);
    let board = Board::start();
    for pov in [Color::White, Color::Black] {
        let score = eval.evaluate(&board, pov);
        assert!(score.abs() < 0.5, "startpos scored {score} for {pov:?}");
    }
}

#[test]
fn test_material_counts_a_spare_queen() {
    let board = Board::from_codes(
        [
            ["", "", "", "", "bk", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "wq", "wk", "", "", ""],
        ],
        Color::White,
    )
    .unwrap();

    let mut eval = MaterialEvaluator::seeded(1);
    let white = eval.evaluate(&board, Color::White);
    let black = eval.evaluate(&board, Color::Black);
    assert!((white - 90.0).abs() < 0.5, "white pov scored {white}");
    assert!((black + 90.0).abs() < 0.5, "black pov scored {black}");
}

#[test]
fn test_material_jitter_is_seed_deterministic() {
    let board = Board::start();
    let mut a = MaterialEvaluator::seeded(42);
    let mut b = MaterialEvaluator::seeded(42);
    for _ in 0..16 {
        assert_eq!(
            a.evaluate(&board, Color::White),
            b.evaluate(&board, Color::White)
        );
    }
}

#[test]
fn test_material_jitter_varies_across_calls() {
    let board = Board::start();
    let mut eval = MaterialEvaluator::seeded(42);
    let first = eval.evaluate(&board, Color::White);
    let second = eval.evaluate(&board, Color::White);
    assert_ne!(first, second);
}

#[test]
fn test_material_without_jitter_is_exact() {
    let mut eval = MaterialEvaluator::without_jitter();
    assert_eq!(eval.evaluate(&Board::start(), Color::White), 0.0);
    assert_eq!(eval.evaluate(&Board::start(), Color::Black), 0.0);

    // Black queen takes white's queen: white is down exactly one queen.
    let mut board = Board::start();
    board.apply_move(engine_core::Move::new(
        engine_core::Square::from_coord("d8").unwrap(),
        engine_core::Square::from_coord("d1").unwrap(),
    ));
    assert_eq!(eval.evaluate(&board, Color::White), -90.0);
    assert_eq!(eval.evaluate(&board, Color::Black), 90.0);
}

#[test]
fn test_piece_square_startpos_is_symmetric() {
    let mut eval = PieceSquareEvaluator::new();
    let board = Board::start();
    assert_eq!(eval.evaluate(&board, Color::White), 0.0);
    assert_eq!(eval.evaluate(&board, Color::Black), 0.0);
}

#[test]
fn test_piece_square_prefers_centered_king_in_endgame() {
    let centered = Board::from_codes(
        [
            ["", "", "", "", "", "", "", "bk"],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "wk", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
        ],
        Color::White,
    )
    .unwrap();
    let cornered = Board::from_codes(
        [
            ["", "", "", "", "", "", "", "bk"],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["wk", "", "", "", "", "", "", ""],
        ],
        Color::White,
    )
    .unwrap();

    let mut eval = PieceSquareEvaluator::new();
    assert!(
        eval.evaluate(&centered, Color::White) > eval.evaluate(&cornered, Color::White),
        "endgame king table should reward centralization"
    );
}

#[test]
fn test_piece_square_counts_material_difference() {
    // White is a rook up; the score should land near the rook weight.
    let board = Board::from_codes(
        [
            ["", "", "", "", "bk", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", ""],
            ["wr", "", "", "", "wk", "", "", ""],
        ],
        Color::White,
    )
    .unwrap();
    let mut eval = PieceSquareEvaluator::new();
    let score = eval.evaluate(&board, Color::White);
    assert!((score - 479.0).abs() < 120.0, "scored {score}");
}
