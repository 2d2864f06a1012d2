//! Serializable view of a match for presentation layers.

use crate::board::Board;
use crate::game::Match;
use crate::phases::Phase;
use crate::types::{Mark, Player};
use serde::{Deserialize, Serialize};

/// Everything a front end needs to draw a match, detached from the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    /// The board.
    pub board: Board,
    /// Seated players, X first.
    pub players: Option<[Player; 2]>,
    /// Mark to move, only while the game is in progress.
    pub to_move: Option<Mark>,
    /// Lifecycle phase.
    pub phase: Phase,
    /// Indices played, in order.
    pub history: Vec<usize>,
}

impl From<&Match> for MatchSnapshot {
    fn from(game: &Match) -> Self {
        Self {
            board: game.board().clone(),
            players: game.players().cloned(),
            to_move: (game.phase() == Phase::InProgress).then(|| game.turn()),
            phase: game.phase(),
            history: game.history().to_vec(),
        }
    }
}

impl MatchSnapshot {
    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    /// Returns the winner, if the game is won.
    pub fn winner(&self) -> Option<Mark> {
        self.phase.outcome().and_then(|outcome| outcome.winner())
    }

    /// The player to move, while the game is in progress.
    pub fn player_to_move(&self) -> Option<&Player> {
        let mark = self.to_move?;
        self.players.as_ref().map(|players| &players[mark.seat()])
    }

    /// One-line status for display.
    pub fn status_string(&self) -> String {
        match self.phase {
            Phase::Idle => "Waiting for players".to_string(),
            Phase::Over(outcome) => outcome.to_string(),
            Phase::InProgress => match self.player_to_move() {
                Some(player) => format!("{}'s turn ({})", player.name(), player.mark()),
                None => "Waiting for players".to_string(),
            },
        }
    }
}
