// Snapshot history for undo and replay

use crate::interpreter::errors::SlotError;
use crate::slots::SlotSetView;
use std::iter::FusedIterator;
use std::slice;

/// Default snapshot memory budget (64 MB)
pub const DEFAULT_SNAPSHOT_LIMIT: usize = 64 * 1024 * 1024;

/// Append-only history of slot set snapshots
#[derive(Debug)]
pub struct SnapshotManager {
    snapshots: Vec<SlotSetView>,
    max_memory: usize,
    current_memory: usize,
}

impl SnapshotManager {
    pub fn new(max_memory: usize) -> Self {
        SnapshotManager {
            snapshots: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Whether a snapshot of `bytes` still fits in the budget
    pub fn would_fit(&self, bytes: usize) -> bool {
        self.current_memory
            .checked_add(bytes)
            .is_some_and(|total| total <= self.max_memory)
    }

    /// Fail with `SnapshotLimitExceeded` unless a snapshot of `bytes` fits
    pub fn ensure_room(&self, bytes: usize) -> Result<(), SlotError> {
        if self.would_fit(bytes) {
            Ok(())
        } else {
            Err(SlotError::SnapshotLimitExceeded {
                current: self.current_memory,
                limit: self.max_memory,
            })
        }
    }

    /// Add a snapshot to history
    pub fn push(&mut self, snapshot: SlotSetView) -> Result<(), SlotError> {
        let snapshot_size = snapshot.estimated_size();
        self.ensure_room(snapshot_size)?;

        self.current_memory += snapshot_size;
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&SlotSetView> {
        self.snapshots.get(index)
    }

    /// Most recent snapshot
    pub fn last(&self) -> Option<&SlotSetView> {
        self.snapshots.last()
    }

    /// Lazily walk the snapshots from `start` to the end of history
    pub fn frames_from(&self, start: usize) -> Replay<'_> {
        let start = start.min(self.snapshots.len());
        Replay {
            frames: self.snapshots[start..].iter(),
            start,
        }
    }

    /// Get the number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Get current memory usage
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    /// Get max memory limit
    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}

impl Default for SnapshotManager {
    fn default() -> Self {
        Self::new(DEFAULT_SNAPSHOT_LIMIT)
    }
}

/// Snapshots handed out by a replay, oldest first.
///
/// Cloning a `Replay` restarts it from wherever the clone was taken; each
/// item is an independent copy, so nothing a consumer does can reach the
/// recorded history.
#[derive(Debug, Clone)]
pub struct Replay<'a> {
    frames: slice::Iter<'a, SlotSetView>,
    start: usize,
}

impl Replay<'_> {
    /// History index of the first frame
    pub fn start(&self) -> usize {
        self.start
    }
}

impl Iterator for Replay<'_> {
    type Item = SlotSetView;

    fn next(&mut self) -> Option<Self::Item> {
        self.frames.next().cloned()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.frames.size_hint()
    }
}

impl ExactSizeIterator for Replay<'_> {}

impl FusedIterator for Replay<'_> {}
