//! Clap command definition.
//!
//! Builds the `clap::Command` for the `slotbot` binary. The parsed matches are
//! turned into a typed [`Config`](crate::config::Config) by
//! [`Config::from_matches`](crate::config::Config::from_matches).

use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

/// Build the command-line interface.
pub fn build_cli() -> Command {
    Command::new("slotbot")
        .about("Control a block-stacking arm over a row of slots, with undo and replay")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("plain")
                .long("plain")
                .help("Line-based prompt instead of the full-screen interface")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("size")
                .long("size")
                .short('s')
                .help("Initial number of slots (skips the size prompt)")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new("marker")
                .long("marker")
                .help("Character drawn once per block (default: X)"),
        )
        .arg(
            Arg::new("replay-delay-ms")
                .long("replay-delay-ms")
                .help("Pause between replayed states in milliseconds (default: 500)")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("snapshot-limit-mb")
                .long("snapshot-limit-mb")
                .help("Memory budget for the undo/replay history in megabytes (default: 64)")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write logs to this file (filter with RUST_LOG)")
                .value_parser(value_parser!(PathBuf)),
        )
}
