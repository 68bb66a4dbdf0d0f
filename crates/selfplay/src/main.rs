//! Selfplay CLI
//!
//! Plays two engines against each other and reports the result.
//!
//! Usage:
//!   selfplay [config.toml]
//!
//! Without a config file the defaults play random vs minimax at depth 2.

mod runner;

use std::env;
use std::fs;
use std::process;

use runner::{create_engine, run_game, GameConfig};

fn load_config() -> GameConfig {
    let mut args = env::args().skip(1);
    let path = match args.next() {
        Some(p) => p,
        None => return GameConfig::default(),
    };

    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Cannot read {path}: {e}");
            process::exit(2);
        }
    };
    match toml::from_str(&text) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid config {path}: {e}");
            process::exit(2);
        }
    }
}

fn main() {
    let config = load_config();

    println!(
        "=== {} (white, depth {}) vs {} (black, depth {}) ===",
        config.white, config.depth_white, config.black, config.depth_black
    );

    let mut white = create_engine(&config.white, config.seed);
    let mut black = create_engine(&config.black, config.seed.map(|s| s.wrapping_add(1)));

    let report = run_game(white.as_mut(), black.as_mut(), &config);

    println!(
        "Result: {} after {} half-moves",
        report.outcome.notation(),
        report.half_moves
    );

    if let Some(path) = &config.save_path {
        let saved = report.board.to_saved();
        match serde_json::to_string_pretty(&saved) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    eprintln!("Cannot write {path}: {e}");
                    process::exit(1);
                }
                println!("Final position saved to {path}");
            }
            Err(e) => {
                eprintln!("Cannot serialize final position: {e}");
                process::exit(1);
            }
        }
    }
}
