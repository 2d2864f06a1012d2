//! Parsing of lines typed during a game.

use derive_more::{Display, Error};
use tictactoe_engine::Position;
use tracing::instrument;

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place the current mark at a cell.
    Play(Position),
    /// Same players, fresh board.
    Restart,
    /// Forget the players and ask for names again.
    Reset,
    /// Show the command summary.
    Help,
    /// Leave the program.
    Quit,
}

/// A line that is neither a command nor a cell.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input '{}', type 'help' for commands", input)]
pub struct InputError {
    /// The offending text.
    pub input: String,
}

/// Command summary printed by `help`.
pub const HELP: &str = "\
Enter 1-9 or a cell name (e.g. 'center', 'top-left') to place your mark.
Commands:
  restart  new game with the same players
  reset    new game with new players
  help     show this message
  quit     leave";

impl Input {
    /// Parses a line of user input.
    #[instrument]
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "restart" => Ok(Input::Restart),
            "reset" => Ok(Input::Reset),
            "help" | "?" => Ok(Input::Help),
            "quit" | "exit" | "q" => Ok(Input::Quit),
            _ => Position::parse(trimmed).map(Input::Play).ok_or_else(|| InputError {
                input: trimmed.to_string(),
            }),
        }
    }
}
