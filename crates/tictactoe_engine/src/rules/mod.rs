//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules know nothing about
//! players or turns; the match interprets their answers.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::check_winner;
