//! Parsing of interactive input lines.

use derive_more::{Display, Error};
use std::str::FromStr;
use tictactoe_core::Position;

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Mark a cell.
    Place(Position),
    /// New game, keep the scoreboard.
    Restart,
    /// New game, clear the scoreboard.
    Reset,
    /// Show the help text.
    Help,
    /// Leave the program.
    Quit,
}

/// Input that is neither a cell nor a known command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input {input:?} (type 'help' for commands)")]
pub struct ParseCommandError {
    /// The offending input, trimmed.
    #[error(not(source))]
    pub input: String,
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let command = match trimmed.to_lowercase().as_str() {
            "restart" | "r" => Command::Restart,
            "reset" => Command::Reset,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => Position::from_label_or_number(trimmed)
                .map(Command::Place)
                .ok_or_else(|| ParseCommandError {
                    input: trimmed.to_string(),
                })?,
        };
        Ok(command)
    }
}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  1-9          mark that cell (numbered left to right, top to bottom)
  <position>   mark a cell by name, e.g. 'center' or 'top-left'
  restart, r   start a new game and keep the scoreboard
  reset        start a new game and clear the scoreboard
  help, h, ?   show this help
  quit, q      leave";
