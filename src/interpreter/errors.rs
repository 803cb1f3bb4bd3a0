//! Error types for the slot engine
//!
//! [`SlotError`] covers every way a single command can fail. A failed command
//! leaves the slot set untouched and records no snapshot. That includes
//! running out of snapshot budget, which is checked before any change.
//!
//! Trying to take a block from an empty slot is *not* an error: it is an
//! expected outcome reported through [`BlockOutcome`](super::store::BlockOutcome).

use thiserror::Error;

/// Errors raised by [`SlotStore`](super::store::SlotStore) operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    /// Slot identifier outside `1..=size`
    #[error("Slot {slot} does not exist (there are {size} slots)")]
    InvalidSlot { slot: i64, size: usize },

    /// Negative or unallocatable slot count passed to `size`
    #[error("Cannot resize to {0} slots")]
    InvalidSize(i64),

    /// Replay reaches back to (or past) the initial snapshot
    #[error("Can't replay that far.")]
    ReplayRangeTooLarge { requested: i64, recorded: usize },

    /// Negative step count passed to `replay`
    #[error("Cannot replay {0} commands")]
    NegativeCount(i64),

    /// Undo target falls outside the recorded history
    #[error("Can't undo that far: {requested} requested, {recorded} snapshots recorded")]
    IndexOutOfRange { requested: i64, recorded: usize },

    /// An operation other than resize ran before the first resize
    #[error("Slots have not been initialized yet")]
    Uninitialized,

    /// Snapshot history would exceed its memory budget
    #[error("Snapshot memory limit exceeded: {current} bytes used, limit is {limit}")]
    SnapshotLimitExceeded { current: usize, limit: usize },
}

/// Result type for slot engine operations
pub type Result<T> = std::result::Result<T, SlotError>;
