//! Move generation benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example movegen_bench -p engine_core

use engine_core::{all_legal_moves_into, Board, Color};
use std::time::Instant;

const ITERATIONS: usize = 50_000;

fn positions() -> Vec<(&'static str, Board)> {
    vec![
        ("Start", Board::start()),
        (
            "Open middlegame",
            Board::from_codes(
                [
                    ["br", "", "bb", "bq", "bk", "", "", "br"],
                    ["bp", "bp", "bp", "", "", "bp", "bp", "bp"],
                    ["", "", "bn", "", "", "bn", "", ""],
                    ["", "", "", "", "bp", "", "", ""],
                    ["", "", "wb", "", "wp", "", "", ""],
                    ["", "", "", "", "", "wn", "", ""],
                    ["wp", "wp", "wp", "wp", "", "wp", "wp", "wp"],
                    ["wr", "wn", "wb", "wq", "wk", "", "", "wr"],
                ],
                Color::White,
            )
            .expect("valid fixture"),
        ),
        (
            "Queen endgame",
            Board::from_codes(
                [
                    ["", "", "", "", "", "", "bk", ""],
                    ["", "", "", "", "", "bp", "bp", ""],
                    ["", "", "", "", "", "", "", ""],
                    ["", "", "bq", "", "", "", "", ""],
                    ["", "", "", "", "", "wq", "", ""],
                    ["", "", "", "", "", "", "", ""],
                    ["", "", "", "", "", "wp", "wp", ""],
                    ["", "", "", "", "", "", "wk", ""],
                ],
                Color::White,
            )
            .expect("valid fixture"),
        ),
    ]
}

fn main() {
    println!("=== Move Generation Benchmark ===");
    println!("Iterations per position: {ITERATIONS}");
    println!();

    let mut move_buf = Vec::with_capacity(64);
    let mut total_moves = 0usize;
    let mut total_time = std::time::Duration::ZERO;

    for (name, board) in positions() {
        let side = board.turn();
        let mut probe = board.clone();

        print!("{name:.<20}");

        let start = Instant::now();
        let mut moves_generated = 0usize;

        for _ in 0..ITERATIONS {
            all_legal_moves_into(&mut probe, side, &mut move_buf);
            moves_generated += move_buf.len();
        }

        let elapsed = start.elapsed();
        total_moves += moves_generated;
        total_time += elapsed;

        let moves_per_pos = moves_generated as f64 / ITERATIONS as f64;
        let mps = if elapsed.as_secs_f64() > 0.0 {
            ITERATIONS as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {moves_per_pos:>5.1} moves/pos, {mps:>10.0} pos/sec ({elapsed:>8.3?})");
    }

    println!();
    let avg_mps = if total_time.as_secs_f64() > 0.0 {
        (ITERATIONS * 3) as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_moves} moves in {total_time:.3?} ({avg_mps:.0} positions/sec)");
}
