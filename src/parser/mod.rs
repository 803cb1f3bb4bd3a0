//! Command line parser
//!
//! This module turns a line typed at the prompt into a typed command:
//! - [`command`]: [`Command`](command::Command) and [`CommandKind`](command::CommandKind) definitions
//! - [`parse`]: Tokenizing and validation (line → [`Input`](parse::Input))
//!
//! # Command Language
//!
//! | Command          | Arguments | Effect                                   |
//! |------------------|-----------|------------------------------------------|
//! | `size n`         | 1         | resize to `n` slots                      |
//! | `add s`          | 1         | put a block on slot `s`                  |
//! | `mv a b`         | 2         | move a block from slot `a` to slot `b`   |
//! | `rm s`           | 1         | take a block off slot `s`                |
//! | `replay n`       | 1         | show the last `n` states again           |
//! | `undo n`         | 1         | restore the state `n` commands back      |
//!
//! `help` and `quit` are handled by the interface and never reach the engine.

pub mod command;
pub mod parse;
