//! Command-line interface for the terminal front-end.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe for two players at one keyboard, with a running scoreboard
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with session statistics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML). Defaults to ./tictactoe.toml when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play {
        /// Hide cell numbers on empty cells
        #[arg(long)]
        no_hints: bool,
    },

    /// Apply a sequence of 0-based cell indices and print the result
    Replay {
        /// Cell indices (0-8), in play order
        #[arg(value_delimiter = ',', num_args = 1..)]
        moves: Vec<usize>,

        /// Print the final snapshot as JSON instead of the board
        #[arg(long)]
        json: bool,
    },
}
