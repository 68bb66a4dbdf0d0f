pub mod board;
pub mod codes;
pub mod errors;
pub mod movegen;
pub mod status;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::{Board, TrialMove};
pub use codes::SavedGame;
pub use errors::BoardError;
pub use movegen::{
    all_legal_moves, all_legal_moves_into, legal_moves, legal_moves_on, moves_available,
    pseudo_moves,
};
pub use status::classify;
pub use types::*;

// =============================================================================
// Engine trait — implemented by all engines (minimax, random, ...)
// =============================================================================

/// Result of asking an engine for a move.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (`None` means the side to move has no legal
    /// moves; the caller classifies checkmate vs stalemate and must not
    /// ask again).
    pub best_move: Option<Move>,
    /// Score of the chosen move from the engine's perspective.
    pub score: f64,
    /// Search depth used, in plies.
    pub depth: u8,
    /// Number of moves explored, for stats.
    pub nodes: u64,
}

/// Trait implemented by every engine. Engines act for the board's side
/// to move and never mutate the caller's board; search runs on a private
/// copy, synchronously and to completion.
pub trait Engine: Send {
    /// Pick a move for the side to move. `depth` is the caller-supplied
    /// difficulty in plies, a small positive integer.
    fn choose_move(&mut self, board: &Board, depth: u8) -> SearchResult;

    /// Engine name for reporting.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
