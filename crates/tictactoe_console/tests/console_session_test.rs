//! Scripted terminal sessions against the public console API.

use std::io::Cursor;
use tictactoe_console::{Console, ConsoleConfig, replay};
use tictactoe_engine::{Outcome, Phase};

fn run_script(script: &str, config: &ConsoleConfig) -> (tictactoe_engine::Match, String) {
    let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    console
        .run(config.player_x(), config.player_o())
        .expect("in-memory io");
    let game = console.game().clone();
    (game, String::from_utf8(console.into_output()).expect("utf8"))
}

#[test]
fn test_default_names_play_to_a_tie() {
    let config = ConsoleConfig::default();
    // Keypad numbers for indices 0, 1, 3, 4, 2, 5, 7, 6, 8.
    let (game, output) = run_script("1\n2\n4\n5\n3\n6\n8\n7\n9\n", &config);

    assert!(output.contains("Game started! Player 1 (X) vs Player 2 (O)"));
    assert!(output.contains("It's a tie!"));
    assert_eq!(game.phase(), Phase::Over(Outcome::Tie));
}

#[test]
fn test_labels_and_restart_across_games() {
    let config = ConsoleConfig::from_toml("player_x = \"Ada\"\nplayer_o = \"Grace\"").unwrap();
    let script = "top-left\nmiddle-left\ntop-center\ncenter\ntop-right\nrestart\ncenter\n";
    let (game, output) = run_script(script, &config);

    assert!(output.contains("X wins!"));
    assert!(output.contains("Game reset!"));
    assert_eq!(game.history(), &[4]);
    assert_eq!(game.current_player().unwrap().name(), "Grace");
}

#[test]
fn test_replay_matches_interactive_play() {
    let report = replay("Player 1", "Player 2", &[0, 1, 3, 4, 2, 5, 7, 6, 8]);
    let (game, _) = run_script("1\n2\n4\n5\n3\n6\n8\n7\n9\n", &ConsoleConfig::default());
    assert_eq!(report.snapshot, game.snapshot());
}
