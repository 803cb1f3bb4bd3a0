//! Runtime configuration
//!
//! [`Config`] collects everything the interfaces need to know that is not part
//! of the slot engine itself: which interface to run, how to draw blocks, how
//! fast to replay and how much memory the history may use.

use crate::slots::view::DEFAULT_MARKER;
use crate::snapshot::DEFAULT_SNAPSHOT_LIMIT;
use clap::ArgMatches;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Pause between replayed states
pub const DEFAULT_REPLAY_DELAY: Duration = Duration::from_millis(500);

/// Which interface drives the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Full-screen terminal interface
    Tui,
    /// Line-based prompt
    Plain,
}

/// Invalid command-line values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Marker must be a single visible character, got {0:?}")]
    InvalidMarker(String),

    #[error("Initial size must not be negative, got {0}")]
    InvalidSize(i64),

    #[error("Snapshot limit of {0} MB is too large")]
    SnapshotLimitTooLarge(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    /// Size to initialize with instead of prompting
    pub initial_size: Option<i64>,
    pub marker: char,
    pub replay_delay: Duration,
    /// History memory budget in bytes
    pub snapshot_limit: usize,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: Mode::Tui,
            initial_size: None,
            marker: DEFAULT_MARKER,
            replay_delay: DEFAULT_REPLAY_DELAY,
            snapshot_limit: DEFAULT_SNAPSHOT_LIMIT,
            log_file: None,
        }
    }
}

impl Config {
    /// Build a config from matches produced by [`build_cli`](crate::cli::build_cli)
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if matches.get_flag("plain") {
            config.mode = Mode::Plain;
        }

        if let Some(&size) = matches.get_one::<i64>("size") {
            if size < 0 {
                return Err(ConfigError::InvalidSize(size));
            }
            config.initial_size = Some(size);
        }

        if let Some(marker) = matches.get_one::<String>("marker") {
            config.marker = parse_marker(marker)?;
        }

        if let Some(&millis) = matches.get_one::<u64>("replay-delay-ms") {
            config.replay_delay = Duration::from_millis(millis);
        }

        if let Some(&megabytes) = matches.get_one::<u64>("snapshot-limit-mb") {
            config.snapshot_limit = megabytes
                .checked_mul(1024 * 1024)
                .and_then(|bytes| usize::try_from(bytes).ok())
                .ok_or(ConfigError::SnapshotLimitTooLarge(megabytes))?;
        }

        config.log_file = matches.get_one::<PathBuf>("log-file").cloned();

        Ok(config)
    }
}

fn parse_marker(marker: &str) -> Result<char, ConfigError> {
    let mut chars = marker.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() && !c.is_control() => Ok(c),
        _ => Err(ConfigError::InvalidMarker(marker.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::build_cli;

    fn config_from(args: &[&str]) -> Result<Config, ConfigError> {
        let matches = build_cli()
            .try_get_matches_from(std::iter::once("slotbot").chain(args.iter().copied()))
            .unwrap();
        Config::from_matches(&matches)
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config_from(&[]).unwrap(), Config::default());
    }

    #[test]
    fn test_all_flags() {
        let config = config_from(&[
            "--plain",
            "--size",
            "4",
            "--marker",
            "#",
            "--replay-delay-ms",
            "0",
            "--snapshot-limit-mb",
            "2",
            "--log-file",
            "slotbot.log",
        ])
        .unwrap();

        assert_eq!(config.mode, Mode::Plain);
        assert_eq!(config.initial_size, Some(4));
        assert_eq!(config.marker, '#');
        assert_eq!(config.replay_delay, Duration::ZERO);
        assert_eq!(config.snapshot_limit, 2 * 1024 * 1024);
        assert_eq!(config.log_file, Some(PathBuf::from("slotbot.log")));
    }

    #[test]
    fn test_negative_size_is_rejected() {
        assert_eq!(
            config_from(&["--size", "-3"]),
            Err(ConfigError::InvalidSize(-3))
        );
    }

    #[test]
    fn test_marker_must_be_one_char() {
        assert!(matches!(
            config_from(&["--marker", "ab"]),
            Err(ConfigError::InvalidMarker(_))
        ));
        assert!(matches!(
            config_from(&["--marker", " "]),
            Err(ConfigError::InvalidMarker(_))
        ));
    }
}
