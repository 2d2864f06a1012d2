//! Win detection.

use crate::board::{Board, WINNING_PATTERNS};
use crate::types::{Cell, Mark};
use tracing::instrument;

/// Returns the mark holding three in a row, if any.
///
/// Lines are scanned in [`WINNING_PATTERNS`] order and the first complete
/// line decides the result.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    let cells = board.cells();
    WINNING_PATTERNS.iter().find_map(|&[a, b, c]| match cells[a] {
        Cell::Occupied(mark) if cells[b] == cells[a] && cells[c] == cells[a] => Some(mark),
        _ => None,
    })
}
