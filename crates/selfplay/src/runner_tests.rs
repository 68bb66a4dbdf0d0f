use super::*;
use engine_core::Board;

fn quiet_config() -> GameConfig {
    GameConfig {
        verbose: false,
        max_moves: 60,
        ..GameConfig::default()
    }
}

#[test]
fn test_random_vs_random_terminates() {
    let config = quiet_config();
    let mut white = create_engine("random", Some(11));
    let mut black = create_engine("random", Some(12));

    let report = run_game(white.as_mut(), black.as_mut(), &config);
    assert!(report.half_moves <= config.max_moves);
    // Whatever happened, the final board still satisfies the king
    // invariant and round-trips through the saved form.
    assert_eq!(
        Board::from_saved(&report.board.to_saved()).unwrap(),
        report.board
    );
}

#[test]
fn test_minimax_vs_random_plays_a_valid_game() {
    let config = GameConfig {
        verbose: false,
        max_moves: 40,
        depth_white: 1,
        depth_black: 2,
        ..GameConfig::default()
    };
    let mut white = create_engine("random", Some(3));
    let mut black = create_engine("minimax", Some(4));

    let report = run_game(white.as_mut(), black.as_mut(), &config);
    assert!(report.half_moves >= 1);
    assert!(report.half_moves <= config.max_moves);
    assert_eq!(
        Board::from_saved(&report.board.to_saved()).unwrap(),
        report.board
    );
}

#[test]
fn test_config_defaults_from_empty_toml() {
    let config: GameConfig = toml::from_str("").unwrap();
    assert_eq!(config.white, "random");
    assert_eq!(config.black, "minimax");
    assert_eq!(config.max_moves, 200);
    assert!(config.seed.is_none());
}

#[test]
fn test_config_parses_full_toml() {
    let config: GameConfig = toml::from_str(
        r#"
            white = "minimax"
            black = "positional"
            depth_white = 3
            depth_black = 1
            max_moves = 80
            seed = 99
            save_path = "game.json"
            verbose = false
        "#,
    )
    .unwrap();
    assert_eq!(config.white, "minimax");
    assert_eq!(config.black, "positional");
    assert_eq!(config.depth_white, 3);
    assert_eq!(config.seed, Some(99));
    assert_eq!(config.save_path.as_deref(), Some("game.json"));
    assert!(!config.verbose);
}

#[test]
fn test_outcome_notation() {
    assert_eq!(GameOutcome::WhiteWins.notation(), "1-0");
    assert_eq!(GameOutcome::BlackWins.notation(), "0-1");
    assert_eq!(GameOutcome::Draw.notation(), "1/2-1/2");
    assert_eq!(GameOutcome::Unfinished.notation(), "*");
}
