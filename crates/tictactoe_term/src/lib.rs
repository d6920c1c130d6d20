//! Terminal front-end for the tic-tac-toe session core.
//!
//! Holds no game state of its own: every screen is rendered from a
//! [`tictactoe_core::Snapshot`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod command;
pub mod repl;
pub mod settings;
pub mod view;

pub use cli::{Cli, Command as CliCommand};
pub use command::{Command, ParseCommandError};
pub use repl::{ReplayError, replay, replay_to, run};
pub use settings::{ConfigError, DEFAULT_CONFIG_FILE, Settings};
