use crate::board::Board;
use crate::types::*;

const ORTHO: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAG: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Destinations reachable by the piece on `from` under movement and
/// occupancy rules only. May leave the mover's own king in check.
/// An empty square yields an empty list.
pub fn pseudo_moves(board: &Board, from: Square) -> Vec<Square> {
    let pc = match board.piece_at(from) {
        Some(pc) => pc,
        None => return Vec::new(),
    };
    let mut out = Vec::new();
    match pc.kind {
        PieceKind::Pawn => pawn_moves(board, from, pc.color, &mut out),
        PieceKind::Knight => step_moves(board, from, pc.color, &KNIGHT_DELTAS, &mut out),
        PieceKind::Bishop => ray_moves(board, from, pc.color, &DIAG, &mut out),
        PieceKind::Rook => ray_moves(board, from, pc.color, &ORTHO, &mut out),
        PieceKind::Queen => {
            ray_moves(board, from, pc.color, &ORTHO, &mut out);
            ray_moves(board, from, pc.color, &DIAG, &mut out);
        }
        PieceKind::King => step_moves(board, from, pc.color, &KING_DELTAS, &mut out),
    }
    out
}

/// Pseudo moves for `from`, minus any destination that would leave the
/// mover's own king attacked. Allocates a scratch copy of the board;
/// use [`legal_moves_on`] to reuse a mutable board across calls.
pub fn legal_moves(board: &Board, from: Square) -> Vec<Square> {
    let mut tmp = board.clone();
    legal_moves_on(&mut tmp, from)
}

/// Legality-filtered destinations, computed by playing each pseudo move
/// on the given board and restoring it before returning.
pub fn legal_moves_on(board: &mut Board, from: Square) -> Vec<Square> {
    let pc = match board.piece_at(from) {
        Some(pc) => pc,
        None => return Vec::new(),
    };
    let mut dests = pseudo_moves(board, from);
    dests.retain(|&to| {
        let trial = board.trial_move(Move::new(from, to));
        let exposed = board.in_check(pc.color);
        board.undo_trial(trial);
        !exposed
    });
    dests
}

/// Every legal move for `color`, regardless of whose turn it is.
/// Search uses this for both sides while exploring.
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut tmp = board.clone();
    let mut out = Vec::with_capacity(64);
    all_legal_moves_into(&mut tmp, color, &mut out);
    out
}

/// As [`all_legal_moves`], but reusing the caller's board and buffer.
pub fn all_legal_moves_into(board: &mut Board, color: Color, out: &mut Vec<Move>) {
    out.clear();
    for sq in all_squares() {
        match board.piece_at(sq) {
            Some(pc) if pc.color == color => {}
            _ => continue,
        }
        for to in legal_moves_on(board, sq) {
            out.push(Move::new(sq, to));
        }
    }
}

/// Legal moves for `color` gated on the turn flag: empty unless it is
/// `color`'s turn. This is the entry point for interactive callers.
pub fn moves_available(board: &Board, color: Color) -> Vec<Move> {
    if color != board.turn() {
        return Vec::new();
    }
    all_legal_moves(board, color)
}

/// True iff `color` has at least one legal move. Early-exits without
/// collecting the full move list.
pub(crate) fn has_any_legal_move(board: &Board, color: Color) -> bool {
    let mut tmp = board.clone();
    for sq in all_squares() {
        match tmp.piece_at(sq) {
            Some(pc) if pc.color == color => {}
            _ => continue,
        }
        if !legal_moves_on(&mut tmp, sq).is_empty() {
            return true;
        }
    }
    false
}

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

fn pawn_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    // White pawns walk toward row 0, black toward row 7.
    let dir: i8 = match color {
        Color::White => -1,
        Color::Black => 1,
    };
    let start_row: u8 = match color {
        Color::White => 6,
        Color::Black => 1,
    };

    if let Some(one) = from.offset(dir, 0) {
        if board.piece_at(one).is_none() {
            out.push(one);
            if from.row == start_row {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.piece_at(two).is_none() {
                        out.push(two);
                    }
                }
            }
        }
    }

    // Diagonal captures only; no en-passant.
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc) {
            if let Some(target) = board.piece_at(to) {
                if target.color != color {
                    out.push(to);
                }
            }
        }
    }
}

fn step_moves(
    board: &Board,
    from: Square,
    color: Color,
    deltas: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc) {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != color => out.push(to),
                _ => {}
            }
        }
    }
}

fn ray_moves(
    board: &Board,
    from: Square,
    color: Color,
    dirs: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(dr, dc) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc) {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) => {
                    if pc.color != color {
                        out.push(to);
                    }
                    break;
                }
            }
            cur = to;
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
