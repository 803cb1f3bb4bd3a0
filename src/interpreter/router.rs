// Command dispatch onto the slot store

use crate::interpreter::errors::Result;
use crate::interpreter::store::{BlockOutcome, SlotStore};
use crate::parser::command::Command;
use crate::snapshot::Replay;
use std::fmt;
use tracing::debug;

/// A user-facing notice for a command that ran but changed nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NoBlocksToMove,
    NoBlocksToRemove,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NoBlocksToMove => write!(f, "No blocks to move"),
            Notice::NoBlocksToRemove => write!(f, "No blocks to remove"),
        }
    }
}

/// What executing a command produced
#[derive(Debug)]
pub enum CommandOutcome<'a> {
    /// The command ran and a snapshot was recorded
    Applied,
    /// The command was a no-op; a snapshot was still recorded
    Notice(Notice),
    /// Snapshots to show in order; nothing was recorded
    Replay(Replay<'a>),
}

/// Applies validated commands to a [`SlotStore`]
pub struct CommandRouter<'a> {
    store: &'a mut SlotStore,
}

impl<'a> CommandRouter<'a> {
    pub fn new(store: &'a mut SlotStore) -> Self {
        CommandRouter { store }
    }

    /// Run `command` against the store.
    ///
    /// Every command except `replay` records a snapshot afterwards, including
    /// commands that turned out to be no-ops. A command that fails records
    /// nothing.
    pub fn execute(&mut self, command: Command) -> Result<CommandOutcome<'_>> {
        debug!(%command, "executing command");

        let outcome = match command {
            Command::Replay { count } => {
                return self
                    .store
                    .replay_from(count)
                    .map(CommandOutcome::Replay)
                    .inspect_err(|err| debug!(%command, %err, "command failed"));
            }
            Command::Size { slots } => self.store.resize(slots).map(|_| CommandOutcome::Applied),
            Command::Add { slot } => self.store.add(slot).map(|_| CommandOutcome::Applied),
            Command::Move { from, to } => self
                .store
                .move_block(from, to)
                .map(|outcome| notice_for(outcome, Notice::NoBlocksToMove)),
            Command::Remove { slot } => self
                .store
                .remove(slot)
                .map(|outcome| notice_for(outcome, Notice::NoBlocksToRemove)),
            Command::Undo { count } => self.store.undo(count).map(|_| CommandOutcome::Applied),
        }
        .inspect_err(|err| debug!(%command, %err, "command failed"))?;

        self.store.record_snapshot()?;
        Ok(outcome)
    }
}

fn notice_for(outcome: BlockOutcome, notice: Notice) -> CommandOutcome<'static> {
    match outcome {
        BlockOutcome::Applied => CommandOutcome::Applied,
        BlockOutcome::NoBlocksAvailable => CommandOutcome::Notice(notice),
    }
}
