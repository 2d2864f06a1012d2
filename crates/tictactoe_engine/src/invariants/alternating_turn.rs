//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::{Mark, Match, Phase};

/// Invariant: the turn follows the number of moves played.
///
/// While the game runs, X is to move after an even number of moves. Once it
/// is over, the turn stays with whoever made the final move.
pub struct AlternatingTurnInvariant;

impl Invariant<Match> for AlternatingTurnInvariant {
    fn holds(game: &Match) -> bool {
        let played = game.history().len();
        match game.phase() {
            Phase::Idle => played == 0 && game.turn() == Mark::X,
            Phase::InProgress => game.turn() == Mark::for_ordinal(played),
            Phase::Over(_) => played > 0 && game.turn() == Mark::for_ordinal(played - 1),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
