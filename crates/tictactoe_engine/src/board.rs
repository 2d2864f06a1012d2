//! The 3x3 grid and its winning lines.

use crate::position::Position;
use crate::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Every row, column and diagonal, in the order they are checked.
#[rustfmt::skip]
pub const WINNING_PATTERNS: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// 3x3 tic-tac-toe board.
///
/// Cells change only through [`Board::set_mark`], which refuses
/// out-of-range indices and occupied cells, or all at once through
/// [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Gets the cell at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Writes `mark` at `index`.
    ///
    /// Returns `false` and leaves the board untouched if the index is out
    /// of range or the cell is already occupied.
    #[instrument(skip(self))]
    pub fn set_mark(&mut self, index: usize, mark: Mark) -> bool {
        match self.cells.get_mut(index) {
            Some(cell @ Cell::Empty) => {
                *cell = Cell::Occupied(mark);
                true
            }
            Some(Cell::Occupied(existing)) => {
                debug!(index, ?existing, "Refusing to overwrite occupied cell");
                false
            }
            None => {
                debug!(index, "Refusing out-of-range cell");
                false
            }
        }
    }

    /// Empties every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// True if `index` is on the board and empty. Out-of-range is `false`.
    pub fn is_position_available(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// The fixed catalogue of winning lines.
    pub fn winning_patterns(&self) -> &'static [[usize; 3]; 8] {
        &WINNING_PATTERNS
    }

    /// Empty cells in index order.
    pub fn available_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_position_available(pos.index()))
            .collect()
    }

    /// Number of cells holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid; empty cells show their keypad number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for pos in Position::ALL {
            match self.cells[pos.index()] {
                Cell::Empty => write!(f, "{}", pos.keypad())?,
                Cell::Occupied(mark) => write!(f, "{}", mark)?,
            }
            if pos.index() % 3 < 2 {
                write!(f, "|")?;
            } else if pos.index() < CELL_COUNT - 1 {
                writeln!(f, "\n-+-+-")?;
            }
        }
        Ok(())
    }
}
