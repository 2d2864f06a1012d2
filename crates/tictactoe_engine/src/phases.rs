//! Lifecycle of a match.

use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// How a finished match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark completed a line.
    Winner(Mark),
    /// Board filled with no line.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Tie => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "{} wins!", mark),
            Outcome::Tie => write!(f, "It's a tie!"),
        }
    }
}

/// Where a match is in its lifecycle.
///
/// `Idle` until players are seated, `InProgress` while moves are accepted,
/// `Over` until the board is reset or a new game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// No players seated.
    #[default]
    Idle,
    /// Accepting moves.
    InProgress,
    /// Terminal.
    Over(Outcome),
}

impl Phase {
    /// Returns true once the match has an outcome.
    pub fn is_over(&self) -> bool {
        matches!(self, Phase::Over(_))
    }

    /// Returns the outcome of a finished match.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Phase::Over(outcome) => Some(*outcome),
            _ => None,
        }
    }
}
