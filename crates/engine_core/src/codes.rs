//! Grid-of-codes serialization.
//!
//! A board persists as an 8x8 grid of two-character piece codes: a color
//! letter (`w`/`b`) followed by a kind letter (`p n b r q k`), with the
//! empty string for empty squares. Row 0 is rank 8, as everywhere else.
//! Constructors here validate codes and the one-king-per-color invariant.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::errors::BoardError;
use crate::types::{all_squares, Color, Piece, PieceKind, Square};

impl Piece {
    /// Two-character code, e.g. "wp" for a white pawn.
    pub fn code(self) -> String {
        let color = match self.color {
            Color::White => 'w',
            Color::Black => 'b',
        };
        let kind = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        format!("{color}{kind}")
    }

    pub fn from_code(code: &str) -> Result<Piece, BoardError> {
        let invalid = || BoardError::InvalidCode(code.to_string());
        let mut chars = code.chars();
        let (c, k) = match (chars.next(), chars.next(), chars.next()) {
            (Some(c), Some(k), None) => (c, k),
            _ => return Err(invalid()),
        };
        let color = match c {
            'w' => Color::White,
            'b' => Color::Black,
            _ => return Err(invalid()),
        };
        let kind = match k {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return Err(invalid()),
        };
        Ok(Piece::new(color, kind))
    }
}

/// Persistable snapshot of a game: the code grid plus the side to move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub grid: Vec<Vec<String>>,
    pub turn: Color,
}

impl Board {
    /// Build a board from string-literal rows, row 0 (rank 8) first.
    /// Mostly useful for fixtures:
    ///
    /// ```
    /// use engine_core::{Board, Color};
    /// let board = Board::from_codes(
    ///     [
    ///         ["", "", "", "", "bk", "", "", ""],
    ///         ["", "", "", "", "", "", "", ""],
    ///         ["", "", "", "", "", "", "", ""],
    ///         ["", "", "", "", "", "", "", ""],
    ///         ["", "", "", "", "", "", "", ""],
    ///         ["", "", "", "", "", "", "", ""],
    ///         ["", "", "", "", "", "", "", ""],
    ///         ["", "", "", "", "wk", "", "", ""],
    ///     ],
    ///     Color::White,
    /// )
    /// .unwrap();
    /// assert!(!board.in_check(Color::White));
    /// ```
    pub fn from_codes(rows: [[&str; 8]; 8], turn: Color) -> Result<Board, BoardError> {
        let mut board = Board::empty(turn);
        for (row, row_codes) in rows.iter().enumerate() {
            for (col, code) in row_codes.iter().enumerate() {
                if code.is_empty() {
                    continue;
                }
                let sq = Square::new(row as u8, col as u8);
                board.set_piece(sq, Some(Piece::from_code(code)?));
            }
        }
        validate_kings(&board)?;
        Ok(board)
    }

    pub fn to_saved(&self) -> SavedGame {
        let grid = (0..8u8)
            .map(|row| {
                (0..8u8)
                    .map(|col| {
                        self.piece_at(Square::new(row, col))
                            .map(Piece::code)
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();
        SavedGame {
            grid,
            turn: self.turn(),
        }
    }

    pub fn from_saved(saved: &SavedGame) -> Result<Board, BoardError> {
        if saved.grid.len() != 8 || saved.grid.iter().any(|row| row.len() != 8) {
            return Err(BoardError::BadGridShape);
        }
        let mut board = Board::empty(saved.turn);
        for (row, row_codes) in saved.grid.iter().enumerate() {
            for (col, code) in row_codes.iter().enumerate() {
                if code.is_empty() {
                    continue;
                }
                let sq = Square::new(row as u8, col as u8);
                board.set_piece(sq, Some(Piece::from_code(code)?));
            }
        }
        validate_kings(&board)?;
        Ok(board)
    }
}

fn validate_kings(board: &Board) -> Result<(), BoardError> {
    for color in [Color::White, Color::Black] {
        let kings = all_squares()
            .filter_map(|sq| board.piece_at(sq))
            .filter(|pc| pc.color == color && pc.kind == PieceKind::King)
            .count();
        match kings {
            0 => return Err(BoardError::MissingKing(color)),
            1 => {}
            _ => return Err(BoardError::DuplicateKing(color)),
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "codes_tests.rs"]
mod codes_tests;
