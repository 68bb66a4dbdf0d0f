use crate::movegen::pseudo_moves;
use crate::types::*;

/// The full game state: an 8x8 grid of pieces plus the side to move.
///
/// The board is an explicit value passed into every operation; nothing in
/// this crate keeps board state in globals. Callers mutate it through
/// [`Board::apply_move`]; search and legality filtering use the scoped
/// [`Board::trial_move`] / [`Board::undo_trial`] pair instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
    turn: Color,
}

/// Saved contents of the two cells touched by a trial move.
///
/// Undoing restores both cells exactly, so a trial followed by
/// [`Board::undo_trial`] reproduces the prior grid on every exit path.
#[derive(Debug)]
pub struct TrialMove {
    mv: Move,
    from_cell: Option<Piece>,
    to_cell: Option<Piece>,
}

impl Board {
    /// Standard initial position, White to move.
    pub fn start() -> Board {
        let mut board = Board {
            grid: [[None; 8]; 8],
            turn: Color::White,
        };

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            board.grid[0][col] = Some(Piece::new(Color::Black, kind));
            board.grid[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board.grid[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board.grid[7][col] = Some(Piece::new(Color::White, kind));
        }
        board
    }

    pub(crate) fn empty(turn: Color) -> Board {
        Board {
            grid: [[None; 8]; 8],
            turn,
        }
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.row as usize][sq.col as usize]
    }

    pub(crate) fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.grid[sq.row as usize][sq.col as usize] = pc;
    }

    /// Every occupied square with its piece.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        all_squares().filter_map(|sq| self.piece_at(sq).map(|pc| (sq, pc)))
    }

    /// Occupied squares belonging to one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, pc)| pc.color == color)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.occupied()
            .find(|(_, pc)| pc.color == color && pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Whether `color`'s king is attacked by any enemy piece.
    ///
    /// Scans the enemy's pseudo-legal destinations (never legality-filtered,
    /// which would recurse back into this function) for a hit on the king
    /// square. A board missing the king reports "not in check"; validated
    /// constructors rule that state out.
    pub fn in_check(&self, color: Color) -> bool {
        let king = match self.king_square(color) {
            Some(sq) => sq,
            None => return false,
        };
        self.pieces_of(color.other())
            .any(|(sq, _)| pseudo_moves(self, sq).contains(&king))
    }

    /// Apply a move permanently: relocate the piece, queen-promote a pawn
    /// reaching the opponent's back rank, and pass the turn.
    ///
    /// Precondition: the move is legal for the side to move. Legality is not
    /// re-checked here; callers reject illegal moves before calling in.
    pub fn apply_move(&mut self, mv: Move) {
        let moved = self
            .piece_at(mv.from)
            .expect("apply_move: no piece on origin square");
        self.set_piece(mv.from, None);

        let promote = moved.kind == PieceKind::Pawn
            && match moved.color {
                Color::White => mv.to.row == 0,
                Color::Black => mv.to.row == 7,
            };
        if promote {
            self.set_piece(mv.to, Some(Piece::new(moved.color, PieceKind::Queen)));
        } else {
            self.set_piece(mv.to, Some(moved));
        }

        self.turn = self.turn.other();
    }

    /// Play a move for exploration only: the piece slides from `from` to
    /// `to` and nothing else changes (no promotion, no turn flip).
    pub fn trial_move(&mut self, mv: Move) -> TrialMove {
        let trial = TrialMove {
            mv,
            from_cell: self.piece_at(mv.from),
            to_cell: self.piece_at(mv.to),
        };
        self.set_piece(mv.to, trial.from_cell);
        self.set_piece(mv.from, None);
        trial
    }

    /// Restore both cells touched by a [`Board::trial_move`].
    pub fn undo_trial(&mut self, trial: TrialMove) {
        self.set_piece(trial.mv.from, trial.from_cell);
        self.set_piece(trial.mv.to, trial.to_cell);
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
