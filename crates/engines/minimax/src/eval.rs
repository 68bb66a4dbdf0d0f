//! Evaluation strategies.
//!
//! Two interchangeable evaluators live here: a material counter with a
//! small random perturbation, and a deterministic piece-square-table
//! evaluator. The search is generic over [`Evaluate`], so picking one is
//! a construction-time choice.

use engine_core::{Board, Color, PieceKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A board-scoring strategy. Scores are from `pov`'s perspective:
/// positive means `pov` is better off.
pub trait Evaluate: Send {
    fn evaluate(&mut self, board: &Board, pov: Color) -> f64;

    /// Short strategy name for reporting.
    fn name(&self) -> &'static str;
}

/// Plain material count on a ten-point scale, plus a uniform perturbation
/// in [-0.5, +0.5) on every call. The jitter breaks ties between equal
/// moves and keeps play from cycling through the same line.
pub struct MaterialEvaluator {
    rng: StdRng,
    jitter: bool,
}

impl MaterialEvaluator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            jitter: true,
        }
    }

    /// Fixed RNG seed, for reproducible games and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            jitter: true,
        }
    }

    /// No perturbation at all. Scores become exact material sums, which
    /// lets tests compare search results against a reference search.
    pub fn without_jitter() -> Self {
        Self {
            rng: StdRng::seed_from_u64(0),
            jitter: false,
        }
    }
}

impl Default for MaterialEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

fn material_value(kind: PieceKind) -> f64 {
    match kind {
        PieceKind::Pawn => 10.0,
        PieceKind::Knight => 30.0,
        PieceKind::Bishop => 30.0,
        PieceKind::Rook => 50.0,
        PieceKind::Queen => 90.0,
        PieceKind::King => 900.0,
    }
}

impl Evaluate for MaterialEvaluator {
    fn evaluate(&mut self, board: &Board, pov: Color) -> f64 {
        let mut score = 0.0;
        for (_, pc) in board.occupied() {
            let v = material_value(pc.kind);
            score += if pc.color == pov { v } else { -v };
        }
        if self.jitter {
            score += self.rng.gen::<f64>() - 0.5;
        }
        score
    }

    fn name(&self) -> &'static str {
        "material"
    }
}

/// Centipawn-scale evaluator with per-square bonuses.
///
/// Tables are written from White's side (row 0 = rank 8); Black reads
/// them row-mirrored. Once both queens are off the board the king table
/// switches to the endgame variant, which pulls the king to the center.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceSquareEvaluator;

impl PieceSquareEvaluator {
    pub fn new() -> Self {
        Self
    }
}

fn weight(kind: PieceKind) -> f64 {
    match kind {
        PieceKind::Pawn => 100.0,
        PieceKind::Knight => 280.0,
        PieceKind::Bishop => 320.0,
        PieceKind::Rook => 479.0,
        PieceKind::Queen => 929.0,
        PieceKind::King => 60_000.0,
    }
}

impl Evaluate for PieceSquareEvaluator {
    fn evaluate(&mut self, board: &Board, pov: Color) -> f64 {
        let endgame = board
            .occupied()
            .all(|(_, pc)| pc.kind != PieceKind::Queen);

        let mut score = 0.0;
        for (sq, pc) in board.occupied() {
            let table = match pc.kind {
                PieceKind::Pawn => &PST_PAWN,
                PieceKind::Knight => &PST_KNIGHT,
                PieceKind::Bishop => &PST_BISHOP,
                PieceKind::Rook => &PST_ROOK,
                PieceKind::Queen => &PST_QUEEN,
                PieceKind::King if endgame => &PST_KING_END,
                PieceKind::King => &PST_KING,
            };
            let row = match pc.color {
                Color::White => sq.row,
                Color::Black => 7 - sq.row,
            };
            let v = weight(pc.kind) + f64::from(table[row as usize][sq.col as usize]);
            score += if pc.color == pov { v } else { -v };
        }
        score
    }

    fn name(&self) -> &'static str {
        "piece-square"
    }
}

const PST_PAWN: [[i32; 8]; 8] = [
    [100, 100, 100, 100, 105, 100, 100, 100],
    [78, 83, 86, 73, 102, 82, 85, 90],
    [7, 29, 21, 44, 40, 31, 44, 7],
    [-17, 16, -2, 15, 14, 0, 15, -13],
    [-26, 3, 10, 9, 6, 1, 0, -23],
    [-22, 9, 5, -11, -10, -2, 3, -19],
    [-31, 8, -7, -37, -36, -14, 3, -31],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const PST_KNIGHT: [[i32; 8]; 8] = [
    [-66, -53, -75, -75, -10, -55, -58, -70],
    [-3, -6, 100, -36, 4, 62, -4, -14],
    [10, 67, 1, 74, 73, 27, 62, -2],
    [24, 24, 45, 37, 33, 41, 25, 17],
    [-1, 5, 31, 21, 22, 35, 2, 0],
    [-18, 10, 13, 22, 18, 15, 11, -14],
    [-23, -15, 2, 0, 2, 0, -23, -20],
    [-74, -23, -26, -24, -19, -35, -22, -69],
];

const PST_BISHOP: [[i32; 8]; 8] = [
    [-59, -78, -82, -76, -23, -107, -37, -50],
    [-11, 20, 35, -42, -39, 31, 2, -22],
    [-9, 39, -32, 41, 52, -10, 28, -14],
    [25, 17, 20, 34, 26, 25, 15, 10],
    [13, 10, 17, 23, 17, 16, 0, 7],
    [14, 25, 24, 15, 8, 25, 20, 15],
    [19, 20, 11, 6, 7, 6, 20, 16],
    [-7, 2, -15, -12, -14, -15, -10, -10],
];

const PST_ROOK: [[i32; 8]; 8] = [
    [35, 29, 33, 4, 37, 33, 56, 50],
    [55, 29, 56, 67, 55, 62, 34, 60],
    [19, 35, 28, 33, 45, 27, 25, 15],
    [0, 5, 16, 13, 18, -4, -9, -6],
    [-28, -35, -16, -21, -13, -29, -46, -30],
    [-42, -28, -42, -25, -25, -35, -26, -46],
    [-53, -38, -31, -26, -29, -43, -44, -53],
    [-30, -24, -18, 5, -2, -18, -31, -32],
];

const PST_QUEEN: [[i32; 8]; 8] = [
    [6, 1, -8, -104, 69, 24, 88, 26],
    [14, 32, 60, -10, 20, 76, 57, 24],
    [-2, 43, 32, 60, 72, 63, 43, 2],
    [1, -16, 22, 17, 25, 20, -13, -6],
    [-14, -15, -2, -5, -1, -10, -20, -22],
    [-30, -6, -13, -11, -16, -11, -16, -27],
    [-36, -18, 0, -19, -15, -15, -21, -38],
    [-39, -30, -31, -13, -31, -36, -34, -42],
];

const PST_KING: [[i32; 8]; 8] = [
    [4, 54, 47, -99, -99, 60, 83, -62],
    [-32, 10, 55, 56, 56, 55, 10, 3],
    [-62, 12, -57, 44, -67, 28, 37, -31],
    [-55, 50, 11, -4, -19, 13, 0, -49],
    [-55, -43, -52, -28, -51, -47, -8, -50],
    [-47, -42, -43, -79, -64, -32, -29, -32],
    [-4, 3, -14, -50, -57, -18, 13, 4],
    [17, 30, -3, -14, 6, -1, 40, 18],
];

const PST_KING_END: [[i32; 8]; 8] = [
    [-50, -40, -30, -20, -20, -30, -40, -50],
    [-30, -20, -10, 0, 0, -10, -20, -30],
    [-30, -10, 20, 30, 30, 20, -10, -30],
    [-30, -10, 30, 40, 40, 30, -10, -30],
    [-30, -10, 30, 40, 40, 30, -10, -30],
    [-30, -10, 20, 30, 30, 20, -10, -30],
    [-30, -30, 0, 0, 0, 0, -30, -30],
    [-50, -30, -30, -30, -30, -30, -30, -50],
];

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
