//! Tic-tac-toe - terminal front-end
//!
//! Two players share one keyboard; the scoreboard lasts until the process
//! exits or `reset` is entered.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_core::GameSession;
use tictactoe_term::{Cli, CliCommand, Settings, replay_to, run};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    init_tracing(settings.log_filter());

    match cli.command {
        CliCommand::Play { no_hints } => play(settings.with_hints(!no_hints)),
        CliCommand::Replay { moves, json } => run_replay(&settings, &moves, json),
    }
}

/// Logs go to stderr so stdout carries only the board.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the interactive loop on stdin/stdout.
#[instrument(skip_all)]
fn play(settings: Settings) -> Result<()> {
    info!("Starting interactive play");
    let mut session = GameSession::new();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run(&mut session, &settings, stdin.lock(), &mut stdout)
}

/// Applies scripted moves and prints the final state.
///
/// A refused move is returned after the state is printed, so the process
/// exits non-zero.
#[instrument(skip(settings))]
fn run_replay(settings: &Settings, moves: &[usize], json: bool) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    replay_to(moves, settings, json, &mut stdout)
}
