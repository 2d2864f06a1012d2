//! Errors reported by the match engine.

use derive_more::{Display, Error};

/// Why a match refused an operation.
///
/// None of these leave the match changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MatchError {
    /// No players have been seated yet.
    #[display("No game has been started")]
    NotStarted,

    /// The match already has an outcome.
    #[display("Game over! Start a new game.")]
    GameOver,

    /// The cell is occupied or not on the board.
    #[display("Position {} already taken or invalid", _0)]
    CellUnavailable(#[error(not(source))] usize),
}
