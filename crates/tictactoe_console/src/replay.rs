//! Non-interactive play from a list of cell indices.

use serde::Serialize;
use tictactoe_engine::{Match, MatchSnapshot};
use tracing::{info, instrument, warn};

/// A move the engine refused during a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// Zero-based position of the move in the input list.
    pub ordinal: usize,
    /// Cell index that was requested.
    pub index: usize,
    /// Why the engine refused it.
    pub reason: String,
}

/// Result of a replay.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Final state of the match.
    pub snapshot: MatchSnapshot,
    /// Moves that did not apply.
    pub rejected: Vec<Rejection>,
}

/// Starts a game between the players and feeds it every index in order.
///
/// Refused moves are recorded and skipped, so later moves still apply.
#[instrument(skip(moves), fields(move_count = moves.len()))]
pub fn replay(player_x: &str, player_o: &str, moves: &[usize]) -> ReplayReport {
    let mut game = Match::new();
    game.start_game(player_x, player_o);

    let mut rejected = Vec::new();
    for (ordinal, &index) in moves.iter().enumerate() {
        if let Err(e) = game.try_play_round(index) {
            warn!(ordinal, index, error = %e, "Replay move refused");
            rejected.push(Rejection {
                ordinal,
                index,
                reason: e.to_string(),
            });
        }
    }

    let snapshot = game.snapshot();
    info!(status = %snapshot.status_string(), rejected = rejected.len(), "Replay finished");
    ReplayReport { snapshot, rejected }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{Mark, Outcome, Phase};

    #[test]
    fn test_replay_to_win() {
        let report = replay("Ada", "Grace", &[0, 3, 1, 4, 2]);
        assert!(report.rejected.is_empty());
        assert_eq!(report.snapshot.phase, Phase::Over(Outcome::Winner(Mark::X)));
    }

    #[test]
    fn test_replay_to_tie() {
        let report = replay("Ada", "Grace", &[0, 1, 3, 4, 2, 5, 7, 6, 8]);
        assert_eq!(report.snapshot.phase, Phase::Over(Outcome::Tie));
    }

    #[test]
    fn test_rejections_are_recorded_and_skipped() {
        let report = replay("Ada", "Grace", &[4, 4, 11, 0]);
        assert_eq!(report.snapshot.history, vec![4, 0]);
        let ordinals: Vec<usize> = report.rejected.iter().map(|r| r.ordinal).collect();
        assert_eq!(ordinals, vec![1, 2]);
        assert_eq!(report.rejected[1].index, 11);
    }

    #[test]
    fn test_moves_after_game_over_are_rejected() {
        let report = replay("Ada", "Grace", &[0, 3, 1, 4, 2, 8]);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].reason, "Game over! Start a new game.");
    }

    #[test]
    fn test_report_serializes() {
        let report = replay("Ada", "Grace", &[4, 4]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["rejected"][0]["index"], 4);
        assert_eq!(json["snapshot"]["to_move"], "O");
    }
}
