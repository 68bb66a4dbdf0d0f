use crate::board::Board;
use crate::movegen::has_any_legal_move;
use crate::types::{Color, GameStatus};

/// Classify the position for `color`, the side about to move.
///
/// Checkmate is check with no legal escape; stalemate is no legal move
/// while not in check. Callers run this after every applied move.
pub fn classify(board: &Board, color: Color) -> GameStatus {
    let in_check = board.in_check(color);
    let can_move = has_any_legal_move(board, color);
    match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Normal,
    }
}
