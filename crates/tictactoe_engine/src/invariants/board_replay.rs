//! The board is exactly what the move history produces.

use super::Invariant;
use crate::{Board, Mark, Match};

/// Invariant: replaying the history onto an empty board reproduces it.
///
/// Fails if a cell was overwritten, marked out of turn, or changed
/// without a recorded move.
pub struct BoardReplaysFromHistoryInvariant;

impl BoardReplaysFromHistoryInvariant {
    /// Rebuilds a board from move indices, X first. `None` if a move
    /// would land on an occupied or invalid cell.
    pub fn replay(history: &[usize]) -> Option<Board> {
        let mut board = Board::new();
        for (ordinal, &index) in history.iter().enumerate() {
            if !board.set_mark(index, Mark::for_ordinal(ordinal)) {
                return None;
            }
        }
        Some(board)
    }
}

impl Invariant<Match> for BoardReplaysFromHistoryInvariant {
    fn holds(game: &Match) -> bool {
        Self::replay(game.history()).is_some_and(|board| &board == game.board())
    }

    fn description() -> &'static str {
        "Board is reproduced by replaying the move history"
    }
}
