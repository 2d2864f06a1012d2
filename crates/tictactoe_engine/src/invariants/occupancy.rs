//! Occupied cells correspond one-to-one with moves played.

use super::Invariant;
use crate::Match;

/// Invariant: the number of occupied cells equals the number of moves played.
///
/// In particular the board never holds more marks than moves were accepted.
pub struct OccupancyMatchesHistoryInvariant;

impl Invariant<Match> for OccupancyMatchesHistoryInvariant {
    fn holds(game: &Match) -> bool {
        game.board().occupied_count() == game.history().len()
    }

    fn description() -> &'static str {
        "Occupied cells match the number of moves played"
    }
}
