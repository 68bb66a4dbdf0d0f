//! Random Move Engine
//!
//! Picks uniformly from the legal moves of the side to move. Useful as a
//! weakest-possible opponent and for stress-testing move generation in
//! bounded selfplay games.

use engine_core::{moves_available, Board, Engine, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn choose_move(&mut self, board: &Board, depth: u8) -> SearchResult {
        let moves = moves_available(board, board.turn());
        let best_move = moves.choose(&mut self.rng).copied();

        SearchResult {
            best_move,
            score: 0.0,
            depth,
            nodes: moves.len() as u64,
        }
    }

    fn name(&self) -> &str {
        "Random"
    }
}
