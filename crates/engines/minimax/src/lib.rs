//! Minimax Chess Engine
//!
//! Depth-limited minimax with alpha-beta pruning over the core move
//! generator, with the evaluation strategy chosen at construction:
//! material counting with random tie-breaking jitter, or deterministic
//! piece-square tables.

mod eval;
mod search;

use engine_core::{Board, Engine, SearchResult};

pub use eval::{Evaluate, MaterialEvaluator, PieceSquareEvaluator};
pub use search::search;

/// A chess engine driving [`search`] with a fixed evaluation strategy.
pub struct MinimaxEngine<E: Evaluate> {
    eval: E,
    name: String,
    nodes: u64,
}

impl MinimaxEngine<MaterialEvaluator> {
    /// Material evaluation, entropy-seeded jitter.
    pub fn new() -> Self {
        Self::with_evaluator(MaterialEvaluator::new())
    }

    /// Material evaluation with a fixed jitter seed, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self::with_evaluator(MaterialEvaluator::seeded(seed))
    }
}

impl Default for MinimaxEngine<MaterialEvaluator> {
    fn default() -> Self {
        Self::new()
    }
}

impl MinimaxEngine<PieceSquareEvaluator> {
    /// Piece-square-table evaluation.
    pub fn positional() -> Self {
        Self::with_evaluator(PieceSquareEvaluator::new())
    }
}

impl<E: Evaluate> MinimaxEngine<E> {
    pub fn with_evaluator(eval: E) -> Self {
        let name = format!("Minimax ({})", eval.name());
        Self {
            eval,
            name,
            nodes: 0,
        }
    }
}

impl<E: Evaluate> Engine for MinimaxEngine<E> {
    fn choose_move(&mut self, board: &Board, depth: u8) -> SearchResult {
        self.nodes = 0;
        let result = search(board, depth, board.turn(), &mut self.eval, &mut self.nodes);

        SearchResult {
            best_move: result.map(|(mv, _)| mv),
            score: result.map(|(_, s)| s).unwrap_or(0.0),
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
