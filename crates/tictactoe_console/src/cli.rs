//! Command-line interface for the tic-tac-toe console.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively
    Play {
        /// Name for the player using X
        #[arg(long)]
        player_x: Option<String>,

        /// Name for the player using O
        #[arg(long)]
        player_o: Option<String>,
    },

    /// Play a fixed list of cell indices (0-8) and print the result
    Replay {
        /// Cell indices, alternating X and O
        #[arg(required = true)]
        moves: Vec<usize>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// The requested command, falling back to an interactive game.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play {
            player_x: None,
            player_o: None,
        })
    }
}
