use thiserror::Error;

use crate::types::Color;

/// Errors raised while building a board from external data.
///
/// A validated constructor either yields a board satisfying the
/// one-king-per-color invariant or fails with one of these; nothing else
/// in the crate has a runtime error path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("unrecognized piece code {0:?}")]
    InvalidCode(String),
    #[error("expected an 8x8 grid of piece codes")]
    BadGridShape,
    #[error("no {0:?} king on the board")]
    MissingKing(Color),
    #[error("more than one {0:?} king on the board")]
    DuplicateKing(Color),
}
