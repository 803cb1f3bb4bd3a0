//! # Introduction
//!
//! SlotBot controls a robotic arm that stacks blocks in a row of numbered
//! slots. Every command is applied to an in-memory slot set and followed by a
//! snapshot, so earlier states can be restored (`undo`) or shown again
//! (`replay`).
//!
//! ## Command pipeline
//!
//! ```text
//! Line → Parser → Command → CommandRouter → SlotStore → Snapshots → UI
//! ```
//!
//! 1. [`parser`]: validates a typed line into a [`parser::command::Command`].
//! 2. [`interpreter`]: the [`interpreter::store::SlotStore`] holding the live
//!    slots and their history, and the [`interpreter::router::CommandRouter`]
//!    that dispatches commands and records snapshots.
//! 3. [`slots`]: the live [`slots::SlotSet`] and the
//!    immutable [`slots::SlotSetView`], plus resize redistribution.
//! 4. [`snapshot`]: the snapshot history with a configurable memory limit
//!    and the lazy [`snapshot::Replay`] sequence.
//! 5. [`ui`]: ratatui TUI and a plain line prompt; not part of the stable
//!    library API.
//!
//! ## Commands
//!
//! `size n`, `add s`, `mv a b`, `rm s`, `replay n`, `undo n`, plus `help` and
//! `quit` at the prompt.

pub mod cli;
pub mod config;
pub mod interpreter;
pub mod parser;
pub mod slots;
pub mod snapshot;
pub mod ui;
