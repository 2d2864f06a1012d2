//! Interactive terminal session.

use crate::input::{HELP, Input};
use crate::names::parse_name;
use crate::render::render;
use std::io::{self, BufRead, Write};
use tictactoe_engine::{Match, MatchError, Position};
use tracing::{debug, info, instrument};

/// Drives one [`Match`] from lines of input, writing the board after each change.
///
/// Generic over its streams so tests can script a whole session.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    game: Match,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console with an idle match.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            game: Match::new(),
        }
    }

    /// The match being played.
    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Consumes the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Starts a game between the given players and plays until `quit` or end of input.
    #[instrument(skip(self))]
    pub fn run(&mut self, player_x: &str, player_o: &str) -> io::Result<()> {
        self.start(player_x, player_o)?;

        while let Some(line) = self.prompt("> ")? {
            match Input::parse(&line) {
                Ok(Input::Play(position)) => self.play(position)?,
                Ok(Input::Restart) => {
                    self.game.reset();
                    writeln!(self.output, "Game reset!")?;
                    self.draw()?;
                }
                Ok(Input::Reset) => {
                    self.game.clear();
                    match self.collect_names()? {
                        Some((x, o)) => self.start(&x, &o)?,
                        None => break,
                    }
                }
                Ok(Input::Help) => writeln!(self.output, "{}", HELP)?,
                Ok(Input::Quit) => break,
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }

        info!("Console session finished");
        Ok(())
    }

    fn start(&mut self, player_x: &str, player_o: &str) -> io::Result<()> {
        self.game.start_game(player_x, player_o);
        writeln!(
            self.output,
            "Game started! {} (X) vs {} (O)",
            player_x, player_o
        )?;
        self.draw()
    }

    fn play(&mut self, position: Position) -> io::Result<()> {
        match self.game.try_play_round(position.index()) {
            Ok(phase) => {
                debug!(?phase, "Move accepted");
                self.draw()
            }
            Err(MatchError::CellUnavailable(_)) => {
                let free: Vec<String> = self
                    .game
                    .board()
                    .available_positions()
                    .iter()
                    .map(|pos| pos.keypad().to_string())
                    .collect();
                writeln!(
                    self.output,
                    "{} is already taken. Free cells: {}",
                    position,
                    free.join(", ")
                )
            }
            Err(MatchError::GameOver) => writeln!(
                self.output,
                "Game over! Type 'restart' or 'reset' to play again."
            ),
            Err(e @ MatchError::NotStarted) => writeln!(self.output, "{}", e),
        }
    }

    fn draw(&mut self) -> io::Result<()> {
        write!(self.output, "{}", render(&self.game.snapshot()))
    }

    /// Asks for both names; `None` if input ends first.
    fn collect_names(&mut self) -> io::Result<Option<(String, String)>> {
        let Some(player_x) = self.ask_name(1)? else {
            return Ok(None);
        };
        let Some(player_o) = self.ask_name(2)? else {
            return Ok(None);
        };
        Ok(Some((player_x, player_o)))
    }

    fn ask_name(&mut self, seat: usize) -> io::Result<Option<String>> {
        loop {
            let Some(line) = self.prompt(&format!("Player {} name: ", seat))? else {
                return Ok(None);
            };
            match parse_name(&line) {
                Ok(name) => return Ok(Some(name)),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    /// Reads one line; bytes that are not UTF-8 are replaced, not fatal.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
