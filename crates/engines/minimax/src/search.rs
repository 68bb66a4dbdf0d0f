//! Minimax search with alpha-beta pruning.
//!
//! The search explores on a private clone of the caller's board,
//! mutating it with trial moves and restoring both cells on every exit
//! from a node. The cutoff applies to the full move list of a ply, so
//! pruning is textbook alpha-beta.

use engine_core::{all_legal_moves_into, Board, Color, Move};

use crate::eval::Evaluate;

/// Pick the best move for `ai_color` at the given depth.
///
/// Scores each root move by one ply of minimax from the opponent's
/// perspective and keeps the strictly greatest; the first-found move wins
/// exact ties. Returns `None` iff `ai_color` has no legal moves — the
/// caller then classifies checkmate vs stalemate.
pub fn search(
    board: &Board,
    depth: u8,
    ai_color: Color,
    eval: &mut dyn Evaluate,
    nodes: &mut u64,
) -> Option<(Move, f64)> {
    let mut tmp = board.clone();
    let mut moves = Vec::with_capacity(64);
    all_legal_moves_into(&mut tmp, ai_color, &mut moves);
    if moves.is_empty() {
        return None;
    }

    let mut best = moves[0];
    let mut best_score = f64::NEG_INFINITY;

    for mv in moves {
        let trial = tmp.trial_move(mv);
        *nodes += 1;
        let score = minimax(
            &mut tmp,
            depth.saturating_sub(1),
            false,
            f64::NEG_INFINITY,
            f64::INFINITY,
            ai_color,
            eval,
            nodes,
        );
        tmp.undo_trial(trial);

        if score > best_score {
            best_score = score;
            best = mv;
        }
    }
    Some((best, best_score))
}

/// Recursive minimax. The maximizing side is always `ai_color`; the
/// acting side at each ply follows the `maximizing` flag rather than the
/// board's turn, which trial moves never touch.
///
/// A side with no legal moves folds to -inf (maximizing) or +inf
/// (minimizing), so mating lines dominate every material score.
#[allow(clippy::too_many_arguments)]
fn minimax(
    board: &mut Board,
    depth: u8,
    maximizing: bool,
    mut alpha: f64,
    mut beta: f64,
    ai_color: Color,
    eval: &mut dyn Evaluate,
    nodes: &mut u64,
) -> f64 {
    if depth == 0 {
        return eval.evaluate(board, ai_color);
    }

    let side = if maximizing { ai_color } else { ai_color.other() };
    let mut moves = Vec::with_capacity(64);
    all_legal_moves_into(board, side, &mut moves);

    if maximizing {
        let mut best = f64::NEG_INFINITY;
        for mv in moves {
            let trial = board.trial_move(mv);
            *nodes += 1;
            let score = minimax(board, depth - 1, false, alpha, beta, ai_color, eval, nodes);
            board.undo_trial(trial);

            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = f64::INFINITY;
        for mv in moves {
            let trial = board.trial_move(mv);
            *nodes += 1;
            let score = minimax(board, depth - 1, true, alpha, beta, ai_color, eval, nodes);
            board.undo_trial(trial);

            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
