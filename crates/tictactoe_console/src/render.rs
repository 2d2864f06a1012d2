//! Text rendering of a match.

use tictactoe_engine::MatchSnapshot;

/// Board grid followed by the status line.
pub fn render(snapshot: &MatchSnapshot) -> String {
    format!("\n{}\n\n{}\n", snapshot.board, snapshot.status_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::Match;

    #[test]
    fn test_render_in_progress() {
        let mut game = Match::new();
        game.start_game("Ada", "Grace");
        game.play_round(0);

        let text = render(&game.snapshot());
        assert_eq!(text, "\nX|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9\n\nGrace's turn (O)\n");
    }

    #[test]
    fn test_render_idle() {
        let text = render(&Match::new().snapshot());
        assert!(text.ends_with("Waiting for players\n"));
    }
}
