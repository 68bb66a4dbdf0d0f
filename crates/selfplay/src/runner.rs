//! The game loop: drive two engines against each other from the starting
//! position, classifying the position after every applied move.

use engine_core::{classify, Board, Color, Engine, GameStatus};
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use serde::Deserialize;

/// Runner configuration, loadable from a TOML file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Engine playing white: "minimax", "positional", or "random".
    pub white: String,
    /// Engine playing black.
    pub black: String,
    /// Search depth (difficulty) per side, in plies.
    pub depth_white: u8,
    pub depth_black: u8,
    /// Half-move bound before the game is called unfinished.
    pub max_moves: u32,
    /// Fixed RNG seed for reproducible games.
    pub seed: Option<u64>,
    /// Where to write the final position as JSON.
    pub save_path: Option<String>,
    /// Print each move as it is played.
    pub verbose: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            white: "random".to_string(),
            black: "minimax".to_string(),
            depth_white: 2,
            depth_black: 2,
            max_moves: 200,
            seed: None,
            save_path: None,
            verbose: true,
        }
    }
}

/// Result of a finished (or cut-off) game, from white's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    WhiteWins,
    BlackWins,
    Draw,
    Unfinished,
}

impl GameOutcome {
    pub fn notation(self) -> &'static str {
        match self {
            GameOutcome::WhiteWins => "1-0",
            GameOutcome::BlackWins => "0-1",
            GameOutcome::Draw => "1/2-1/2",
            GameOutcome::Unfinished => "*",
        }
    }
}

/// Everything a caller needs after a game: outcome, length, final board.
#[derive(Debug)]
pub struct GameReport {
    pub outcome: GameOutcome,
    pub half_moves: u32,
    pub board: Board,
}

/// Build an engine from its config name. Unknown names fall back to the
/// material minimax engine with a warning.
pub fn create_engine(name: &str, seed: Option<u64>) -> Box<dyn Engine> {
    match name.to_lowercase().as_str() {
        "minimax" | "material" => match seed {
            Some(s) => Box::new(MinimaxEngine::seeded(s)),
            None => Box::new(MinimaxEngine::new()),
        },
        "positional" | "pst" => Box::new(MinimaxEngine::positional()),
        "random" => match seed {
            Some(s) => Box::new(RandomEngine::seeded(s)),
            None => Box::new(RandomEngine::new()),
        },
        other => {
            eprintln!("Unknown engine '{other}', using minimax");
            Box::new(MinimaxEngine::new())
        }
    }
}

fn win_for(color: Color) -> GameOutcome {
    match color {
        Color::White => GameOutcome::WhiteWins,
        Color::Black => GameOutcome::BlackWins,
    }
}

/// Play one game between two engines.
///
/// Both engines share one lifetime so the match arms below unify to a
/// single `&mut dyn Engine` type.
pub fn run_game<'a>(
    white: &'a mut dyn Engine,
    black: &'a mut dyn Engine,
    config: &GameConfig,
) -> GameReport {
    let mut board = Board::start();
    white.new_game();
    black.new_game();

    for half_move in 1..=config.max_moves {
        let mover = board.turn();
        let (engine, depth) = match mover {
            Color::White => (&mut *white, config.depth_white),
            Color::Black => (&mut *black, config.depth_black),
        };

        let result = engine.choose_move(&board, depth);
        let mv = match result.best_move {
            Some(mv) => mv,
            None => {
                // No legal moves: the mover is mated or stalemated.
                let outcome = match classify(&board, mover) {
                    GameStatus::Checkmate => win_for(mover.other()),
                    _ => GameOutcome::Draw,
                };
                return GameReport {
                    outcome,
                    half_moves: half_move - 1,
                    board,
                };
            }
        };

        board.apply_move(mv);
        let status = classify(&board, board.turn());

        if config.verbose {
            let side = match mover {
                Color::White => "w",
                Color::Black => "b",
            };
            let note = match status {
                GameStatus::Check => " +",
                GameStatus::Checkmate => " #",
                GameStatus::Stalemate => " =",
                GameStatus::Normal => "",
            };
            println!(
                "{half_move:>3}. {side} {}{}{note} ({} nodes)",
                mv.from.coord(),
                mv.to.coord(),
                result.nodes
            );
        }

        if status.is_over() {
            let outcome = match status {
                GameStatus::Checkmate => win_for(mover),
                _ => GameOutcome::Draw,
            };
            return GameReport {
                outcome,
                half_moves: half_move,
                board,
            };
        }
    }

    GameReport {
        outcome: GameOutcome::Unfinished,
        half_moves: config.max_moves,
        board,
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
