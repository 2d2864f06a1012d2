//! Tic-tac-toe engine.
//!
//! Two components make up the engine:
//!
//! - [`Board`]: the 3x3 grid and the catalogue of winning lines.
//! - [`Match`]: seats two players, sequences turns and detects the end
//!   of the game by interpreting the board through the [`rules`].
//!
//! Presentation layers hold a [`Match`], forward moves into it and draw
//! its [`MatchSnapshot`].
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Mark, Match, Outcome, Phase};
//!
//! let mut game = Match::new();
//! game.start_game("Ada", "Grace");
//! for index in [0, 3, 1, 4] {
//!     assert!(game.play_round(index));
//! }
//! assert_eq!(game.try_play_round(2), Ok(Phase::Over(Outcome::Winner(Mark::X))));
//! assert!(!game.play_round(8));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod snapshot;
mod types;

pub use board::{Board, CELL_COUNT, WINNING_PATTERNS};
pub use error::MatchError;
pub use game::Match;
pub use phases::{Outcome, Phase};
pub use position::Position;
pub use snapshot::MatchSnapshot;
pub use types::{Cell, Mark, Player};
