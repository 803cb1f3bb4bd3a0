//! Line-based interface.
//!
//! Prompts for an initial size, then reads one command per line, printing the
//! slot state after each. Replays are printed frame by frame with the
//! configured pause in between. Used with `--plain` or when stdout is not a
//! terminal.

use crate::config::Config;
use crate::interpreter::router::{CommandOutcome, CommandRouter};
use crate::interpreter::store::SlotStore;
use crate::parser::command::Command;
use crate::parser::parse::{help_text, parse_initial_size, parse_line, Input, ParseError};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};
use std::thread;
use tracing::debug;

const SIZE_PROMPT: &str = "Input an integer size to initialize your SlotBot: ";
const COMMAND_PROMPT: &str = "Next Command: ";

/// Whether the session continues after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Line-based session writing to `out`
pub struct Repl<W: Write> {
    pub store: SlotStore,
    config: Config,
    out: W,
}

impl<W: Write> Repl<W> {
    pub fn new(store: SlotStore, config: Config, out: W) -> Self {
        Repl { store, config, out }
    }

    /// Handle an answer to the size prompt; returns whether the slots are now initialized
    pub fn handle_initial_size(&mut self, answer: &str) -> io::Result<bool> {
        match parse_initial_size(answer) {
            Ok(command) => {
                if self.execute(command)? {
                    writeln!(self.out, "SlotBot initialized!")?;
                }
            }
            Err(err) => writeln!(self.out, "\n{}", err)?,
        }
        Ok(self.store.is_initialized())
    }

    /// Handle one command line
    pub fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        match parse_line(line) {
            Ok(Input::Command(command)) => {
                self.execute(command)?;
            }
            Ok(Input::Help) => writeln!(self.out, "\n{}", help_text())?,
            Ok(Input::Quit) => {
                writeln!(self.out, "Goodbye!")?;
                return Ok(Flow::Quit);
            }
            Err(ParseError::Empty) => {}
            Err(err) => writeln!(self.out, "\n{}", err)?,
        }
        Ok(Flow::Continue)
    }

    /// Print the live slot state
    pub fn print_state(&mut self) -> io::Result<()> {
        let rendered = self.store.current_view().render(self.config.marker);
        writeln!(self.out, "\nCurrent State:\n{}", rendered)
    }

    fn execute(&mut self, command: Command) -> io::Result<bool> {
        let marker = self.config.marker;
        let delay = self.config.replay_delay;
        let out = &mut self.out;

        match CommandRouter::new(&mut self.store).execute(command) {
            Ok(CommandOutcome::Applied) => {}
            Ok(CommandOutcome::Notice(notice)) => writeln!(out, "{}", notice)?,
            Ok(CommandOutcome::Replay(frames)) => {
                for (index, view) in frames.enumerate() {
                    debug!(frame = index, "printing replay frame");
                    writeln!(out, "{}", view.render(marker))?;
                    out.flush()?;
                    thread::sleep(delay);
                }
            }
            Err(err) => {
                writeln!(out, "\n{}", err)?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Run the interactive line interface on stdin/stdout
pub fn run(store: SlotStore, config: Config) -> Result<(), ReadlineError> {
    let initial_size = config.initial_size;
    let mut repl = Repl::new(store, config, io::stdout());
    let mut editor = DefaultEditor::new()?;

    if let Some(size) = initial_size {
        repl.handle_initial_size(&size.to_string())?;
    }

    while !repl.store.is_initialized() {
        match editor.readline(SIZE_PROMPT) {
            Ok(answer) => {
                repl.handle_initial_size(&answer)?;
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => {
                println!("Goodbye!");
                return Ok(());
            }
            Err(err) => return Err(err),
        }
    }

    loop {
        repl.print_state()?;

        match editor.readline(COMMAND_PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.trim());
                }
                if repl.handle_line(&line)? == Flow::Quit {
                    break;
                }
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn repl() -> Repl<Vec<u8>> {
        let config = Config {
            replay_delay: Duration::ZERO,
            ..Config::default()
        };
        Repl::new(SlotStore::default(), config, Vec::new())
    }

    fn output(repl: Repl<Vec<u8>>) -> String {
        String::from_utf8(repl.into_inner()).unwrap()
    }

    #[test]
    fn test_initial_size_prompt() {
        let mut repl = repl();
        assert!(!repl.handle_initial_size("abc").unwrap());
        assert!(repl.handle_initial_size("2").unwrap());

        let out = output(repl);
        assert!(out.contains("abc is not an integer"));
        assert!(out.contains("SlotBot initialized!"));
    }

    #[test]
    fn test_state_and_notices() {
        let mut repl = repl();
        repl.handle_initial_size("2").unwrap();
        repl.handle_line("add 1").unwrap();
        repl.handle_line("mv 2 1").unwrap();
        repl.print_state().unwrap();

        let out = output(repl);
        assert!(out.contains("No blocks to move"));
        assert!(out.contains("Current State:\n1: X\n2: \n"));
    }

    #[test]
    fn test_replay_prints_each_frame() {
        let mut repl = repl();
        repl.handle_initial_size("1").unwrap();
        repl.handle_line("add 1").unwrap();
        repl.handle_line("add 1").unwrap();
        repl.handle_line("replay 1").unwrap();

        let out = output(repl);
        assert!(out.ends_with("1: X\n\n1: XX\n\n"));
    }

    #[test]
    fn test_errors_are_printed() {
        let mut repl = repl();
        repl.handle_initial_size("1").unwrap();
        repl.handle_line("replay 3").unwrap();
        repl.handle_line("add 4").unwrap();
        repl.handle_line("mv 1").unwrap();

        let out = output(repl);
        assert!(out.contains("Can't replay that far."));
        assert!(out.contains("Slot 4 does not exist"));
        assert!(out.contains("mv takes 2 argument/s"));
    }

    #[test]
    fn test_help_and_quit() {
        let mut repl = repl();
        repl.handle_initial_size("1").unwrap();
        assert_eq!(repl.handle_line("help").unwrap(), Flow::Continue);
        assert_eq!(repl.handle_line("quit").unwrap(), Flow::Quit);

        let out = output(repl);
        assert!(out.contains("SlotBot Help:"));
        assert!(out.ends_with("Goodbye!\n"));
    }
}
