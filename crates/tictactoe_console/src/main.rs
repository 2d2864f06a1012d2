//! Tic-tac-toe - terminal front end
//!
//! Two players share one terminal and take turns typing cells.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tictactoe_console::{Cli, Command, Console, ConsoleConfig, parse_name, render::render, replay};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ConsoleConfig::load(cli.config.as_deref())?;

    match cli.command() {
        Command::Play { player_x, player_o } => run_play(&config, player_x, player_o),
        Command::Replay { moves, json } => run_replay(&config, &moves, json),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(
    config: &ConsoleConfig,
    player_x: Option<String>,
    player_o: Option<String>,
) -> Result<()> {
    let player_x = resolve_name(player_x, config.player_x())?;
    let player_o = resolve_name(player_o, config.player_o())?;
    info!(%player_x, %player_o, "Starting interactive game");

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    console
        .run(&player_x, &player_o)
        .context("Terminal session failed")?;
    Ok(())
}

/// Play a scripted list of moves and print the outcome
#[instrument(skip(config))]
fn run_replay(config: &ConsoleConfig, moves: &[usize], json: bool) -> Result<()> {
    let report = replay(config.player_x(), config.player_o(), moves);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for rejection in &report.rejected {
        println!(
            "Move {} at index {} refused: {}",
            rejection.ordinal + 1,
            rejection.index,
            rejection.reason
        );
    }
    print!("{}", render(&report.snapshot));
    Ok(())
}

/// Command-line name if given, else the configured one, trimmed and non-empty
fn resolve_name(flag: Option<String>, configured: &str) -> Result<String> {
    let raw = flag.as_deref().unwrap_or(configured);
    parse_name(raw).with_context(|| format!("Invalid player name {:?}", raw))
}
