//! Terminal front end for the tic-tac-toe engine.
//!
//! The console is the presentation layer: it collects player names,
//! turns typed input into cell indices, forwards moves to a
//! [`tictactoe_engine::Match`] and redraws the board. All game rules stay
//! in the engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod console;
pub mod input;
pub mod names;
pub mod render;
pub mod replay;

pub use cli::{Cli, Command};
pub use config::{ConfigError, ConsoleConfig};
pub use console::Console;
pub use input::{Input, InputError};
pub use names::{NameError, parse_name};
pub use replay::{Rejection, ReplayReport, replay};
