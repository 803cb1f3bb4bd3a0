// Command definitions for the slot controller

use std::fmt;

/// The six commands the controller understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Size,
    Add,
    Move,
    Remove,
    Replay,
    Undo,
}

impl CommandKind {
    /// Every command, in help order
    pub const ALL: [CommandKind; 6] = [
        CommandKind::Size,
        CommandKind::Add,
        CommandKind::Move,
        CommandKind::Remove,
        CommandKind::Replay,
        CommandKind::Undo,
    ];

    /// Look up a command by the word typed at the prompt
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "size" => Some(CommandKind::Size),
            "add" => Some(CommandKind::Add),
            "mv" => Some(CommandKind::Move),
            "rm" => Some(CommandKind::Remove),
            "replay" => Some(CommandKind::Replay),
            "undo" => Some(CommandKind::Undo),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CommandKind::Size => "size",
            CommandKind::Add => "add",
            CommandKind::Move => "mv",
            CommandKind::Remove => "rm",
            CommandKind::Replay => "replay",
            CommandKind::Undo => "undo",
        }
    }

    /// Number of integer arguments the command takes
    pub fn arity(self) -> usize {
        match self {
            CommandKind::Move => 2,
            _ => 1,
        }
    }

    /// Usage line for the help listing
    pub fn usage(self) -> &'static str {
        match self {
            CommandKind::Size => "size [int] - Adjusts the number of slots, resizing if necessary.",
            CommandKind::Add => "add [int] - Adds a block to the specified slot.",
            CommandKind::Move => "mv [int] [int] - Moves a block from slot1 to slot2.",
            CommandKind::Remove => "rm [int] - Removes a block from the slot.",
            CommandKind::Replay => "replay [int] - Replays the last n commands.",
            CommandKind::Undo => "undo [int] - Undo the last n commands.",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated command with its integer arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Size { slots: i64 },
    Add { slot: i64 },
    Move { from: i64, to: i64 },
    Remove { slot: i64 },
    Replay { count: i64 },
    Undo { count: i64 },
}

impl Command {
    /// Build a command from already-counted arguments.
    ///
    /// Returns `None` when `args` does not match the command's arity.
    pub fn from_args(kind: CommandKind, args: &[i64]) -> Option<Self> {
        let command = match (kind, args) {
            (CommandKind::Size, &[slots]) => Command::Size { slots },
            (CommandKind::Add, &[slot]) => Command::Add { slot },
            (CommandKind::Move, &[from, to]) => Command::Move { from, to },
            (CommandKind::Remove, &[slot]) => Command::Remove { slot },
            (CommandKind::Replay, &[count]) => Command::Replay { count },
            (CommandKind::Undo, &[count]) => Command::Undo { count },
            _ => return None,
        };
        Some(command)
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Size { .. } => CommandKind::Size,
            Command::Add { .. } => CommandKind::Add,
            Command::Move { .. } => CommandKind::Move,
            Command::Remove { .. } => CommandKind::Remove,
            Command::Replay { .. } => CommandKind::Replay,
            Command::Undo { .. } => CommandKind::Undo,
        }
    }
}

/// Renders the command the way it is typed, e.g. `mv 1 2`
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Size { slots } => write!(f, "size {}", slots),
            Command::Add { slot } => write!(f, "add {}", slot),
            Command::Move { from, to } => write!(f, "mv {} {}", from, to),
            Command::Remove { slot } => write!(f, "rm {}", slot),
            Command::Replay { count } => write!(f, "replay {}", count),
            Command::Undo { count } => write!(f, "undo {}", count),
        }
    }
}
