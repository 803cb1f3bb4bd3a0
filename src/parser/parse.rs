//! Line parser and validator
//!
//! This module turns one line of user input into an [`Input`]: either a
//! validated [`Command`] or one of the interface meta commands (`help`,
//! `quit`). Everything the engine receives has already been checked here:
//! the command name exists, the argument count matches its arity and every
//! argument is an integer.
//!
//! Tokens are separated by any run of whitespace.

use super::command::{Command, CommandKind};
use thiserror::Error;

/// Interface-level words that never reach the engine
pub const HELP: &str = "help";
pub const QUIT: &str = "quit";

/// One parsed line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Help,
    Quit,
}

/// Reasons a line was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Nothing to do")]
    Empty,

    #[error("Bad code word: {0}")]
    UnknownCommand(String),

    #[error("Wrong number of input arguments: {command} takes {expected} argument/s, got {got}")]
    WrongArgumentCount {
        command: CommandKind,
        expected: usize,
        got: usize,
    },

    #[error("{0} is not an integer")]
    NotAnInteger(String),
}

/// Parse a full command line
pub fn parse_line(line: &str) -> Result<Input, ParseError> {
    let mut words = line.split_whitespace();
    let name = words.next().ok_or(ParseError::Empty)?;

    match name {
        HELP => return Ok(Input::Help),
        QUIT => return Ok(Input::Quit),
        _ => {}
    }

    let kind =
        CommandKind::from_name(name).ok_or_else(|| ParseError::UnknownCommand(name.to_string()))?;

    let words: Vec<&str> = words.collect();
    if words.len() != kind.arity() {
        return Err(ParseError::WrongArgumentCount {
            command: kind,
            expected: kind.arity(),
            got: words.len(),
        });
    }

    let args = words
        .iter()
        .map(|word| {
            word.parse::<i64>()
                .map_err(|_| ParseError::NotAnInteger(word.to_string()))
        })
        .collect::<Result<Vec<i64>, ParseError>>()?;

    Command::from_args(kind, &args)
        .map(Input::Command)
        .ok_or(ParseError::WrongArgumentCount {
            command: kind,
            expected: kind.arity(),
            got: args.len(),
        })
}

/// Parse the answer to the initial size prompt as a `size` command
pub fn parse_initial_size(answer: &str) -> Result<Command, ParseError> {
    let line = format!("{} {}", CommandKind::Size.name(), answer.trim());
    match parse_line(&line)? {
        Input::Command(command) => Ok(command),
        // `size` followed by anything is always a command
        Input::Help | Input::Quit => Err(ParseError::UnknownCommand(answer.to_string())),
    }
}

/// The help listing shown by both interfaces
pub fn help_text() -> String {
    let mut text = String::from("SlotBot Help:\n\n");
    text.push_str("quit - Exits the user interface\n");
    text.push_str("help - Shows this listing\n");
    for kind in CommandKind::ALL {
        text.push_str(kind.usage());
        text.push('\n');
    }
    text
}
