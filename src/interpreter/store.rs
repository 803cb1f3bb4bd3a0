// Slot store: the live slot set and its snapshot history

use crate::interpreter::errors::{Result, SlotError};
use crate::slots::{ResizeReport, SlotSet, SlotSetView};
use crate::snapshot::{Replay, SnapshotManager, DEFAULT_SNAPSHOT_LIMIT};
use tracing::{debug, info, warn};

/// Result of taking a block out of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOutcome {
    /// The block was taken
    Applied,
    /// The source slot was empty; nothing changed
    NoBlocksAvailable,
}

/// Owns the live slot set and the history of snapshots taken after each command
#[derive(Debug)]
pub struct SlotStore {
    /// Current slot counts
    slots: SlotSet,

    /// Snapshots recorded by the router, oldest first
    snapshot_manager: SnapshotManager,

    /// Set by the first resize; every other operation requires it
    initialized: bool,
}

impl SlotStore {
    /// Create an uninitialized store whose history may use up to `snapshot_memory_limit` bytes
    pub fn new(snapshot_memory_limit: usize) -> Self {
        SlotStore {
            slots: SlotSet::new(),
            snapshot_manager: SnapshotManager::new(snapshot_memory_limit),
            initialized: false,
        }
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(SlotError::Uninitialized)
        }
    }

    /// Refuse a change whose resulting `slots`-slot snapshot would not fit the budget
    fn ensure_snapshot_room(&self, slots: usize) -> Result<()> {
        self.snapshot_manager
            .ensure_room(SlotSetView::estimated_size_for(slots))
    }

    fn ensure_slot(&self, slot: i64) -> Result<()> {
        if self.slots.contains(slot) {
            Ok(())
        } else {
            Err(SlotError::InvalidSlot {
                slot,
                size: self.slots.len(),
            })
        }
    }

    /// Change the number of slots, redistributing or discarding blocks of removed slots.
    ///
    /// See [`SlotSet::resize`] for the redistribution rules. Shrinking to zero
    /// slots drops every block held by the removed slots. Sizes whose snapshot
    /// would not fit the history budget are refused before anything changes.
    pub fn resize(&mut self, requested: i64) -> Result<ResizeReport> {
        let new_size = usize::try_from(requested).map_err(|_| SlotError::InvalidSize(requested))?;
        self.ensure_snapshot_room(new_size)?;

        let report = self.slots.resize(new_size).map_err(|err| {
            warn!(requested, %err, "could not allocate slots");
            SlotError::InvalidSize(requested)
        })?;
        if !self.initialized {
            self.initialized = true;
            info!(size = new_size, "slots initialized");
        }

        if report.discarded > 0 {
            warn!(
                discarded = report.discarded,
                previous_size = report.previous_size,
                "shrinking to zero slots discarded blocks"
            );
        }
        debug!(
            previous_size = report.previous_size,
            new_size,
            redistributed = report.redistributed,
            "resized slots"
        );

        Ok(report)
    }

    /// Put one block on `slot`
    pub fn add(&mut self, slot: i64) -> Result<()> {
        self.ensure_initialized()?;
        let size = self.slots.len();
        self.ensure_snapshot_room(size)?;
        let count = self
            .slots
            .count_mut(slot)
            .ok_or(SlotError::InvalidSlot { slot, size })?;
        *count += 1;

        debug!(slot, count = *count, "added block");
        Ok(())
    }

    /// Move one block from `from` to `to`.
    ///
    /// Both identifiers are checked before anything changes.
    pub fn move_block(&mut self, from: i64, to: i64) -> Result<BlockOutcome> {
        self.ensure_initialized()?;
        self.ensure_slot(from)?;
        self.ensure_slot(to)?;
        self.ensure_snapshot_room(self.slots.len())?;

        if self.take_block(from) == BlockOutcome::NoBlocksAvailable {
            debug!(from, to, "no blocks to move");
            return Ok(BlockOutcome::NoBlocksAvailable);
        }
        if let Some(count) = self.slots.count_mut(to) {
            *count += 1;
        }

        debug!(from, to, "moved block");
        Ok(BlockOutcome::Applied)
    }

    /// Take one block off `slot`
    pub fn remove(&mut self, slot: i64) -> Result<BlockOutcome> {
        self.ensure_initialized()?;
        self.ensure_slot(slot)?;
        self.ensure_snapshot_room(self.slots.len())?;

        let outcome = self.take_block(slot);
        debug!(slot, ?outcome, "remove");
        Ok(outcome)
    }

    fn take_block(&mut self, slot: i64) -> BlockOutcome {
        match self.slots.count_mut(slot) {
            Some(count) if *count > 0 => {
                *count -= 1;
                BlockOutcome::Applied
            }
            _ => BlockOutcome::NoBlocksAvailable,
        }
    }

    /// Append a copy of the current slot set to history
    pub fn record_snapshot(&mut self) -> Result<()> {
        self.snapshot_manager.push(self.slots.view())?;
        debug!(history_len = self.snapshot_manager.len(), "recorded snapshot");
        Ok(())
    }

    /// The last `count` recorded states plus the state before them, oldest first.
    ///
    /// Replays starting at (or before) the very first snapshot are refused, so
    /// the initial state itself is never part of a replay.
    pub fn replay_from(&self, count: i64) -> Result<Replay<'_>> {
        self.ensure_initialized()?;
        if count < 0 {
            return Err(SlotError::NegativeCount(count));
        }

        let recorded = self.snapshot_manager.len();
        let start = (recorded as i64).saturating_sub(count).saturating_sub(1);
        if start <= 0 {
            return Err(SlotError::ReplayRangeTooLarge {
                requested: count,
                recorded,
            });
        }

        info!(count, start, "replaying history");
        Ok(self.snapshot_manager.frames_from(start as usize))
    }

    /// Restore the state recorded `count` commands before the latest snapshot.
    ///
    /// `undo(0)` restores the latest snapshot itself. History is left intact;
    /// the router records the restored state as a new snapshot.
    pub fn undo(&mut self, count: i64) -> Result<()> {
        self.ensure_initialized()?;

        let recorded = self.snapshot_manager.len();
        let out_of_range = SlotError::IndexOutOfRange {
            requested: count,
            recorded,
        };
        let position = (recorded as i64).saturating_sub(count).saturating_sub(1);
        let position = usize::try_from(position).map_err(|_| out_of_range.clone())?;
        let snapshot = self.snapshot_manager.get(position).ok_or(out_of_range)?;
        self.ensure_snapshot_room(snapshot.len())?;

        self.slots = SlotSet::from(snapshot);
        info!(count, position, "restored snapshot");
        Ok(())
    }

    // ========== Getter methods for UI ==========

    /// Copy of the current slot set, ascending slot order
    pub fn current_view(&self) -> SlotSetView {
        self.slots.view()
    }

    /// Whether the first resize has happened
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Current number of slots
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Number of recorded snapshots
    pub fn history_len(&self) -> usize {
        self.snapshot_manager.len()
    }

    /// Read access to the recorded history
    pub fn history(&self) -> &SnapshotManager {
        &self.snapshot_manager
    }
}

impl Default for SlotStore {
    fn default() -> Self {
        Self::new(DEFAULT_SNAPSHOT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(counts: &[u64]) -> SlotStore {
        let mut store = SlotStore::default();
        store.resize(counts.len() as i64).unwrap();
        for (index, count) in counts.iter().enumerate() {
            for _ in 0..*count {
                store.add(index as i64 + 1).unwrap();
            }
        }
        store.record_snapshot().unwrap();
        store
    }

    #[test]
    fn test_uninitialized_store_rejects_commands() {
        let mut store = SlotStore::default();
        assert!(!store.is_initialized());
        assert_eq!(store.add(1), Err(SlotError::Uninitialized));
        assert_eq!(store.move_block(1, 2), Err(SlotError::Uninitialized));
        assert_eq!(store.remove(1), Err(SlotError::Uninitialized));
        assert!(matches!(store.replay_from(0), Err(SlotError::Uninitialized)));
        assert_eq!(store.undo(0), Err(SlotError::Uninitialized));
        assert!(store.current_view().is_empty());
    }

    #[test]
    fn test_resize_zero_initializes_empty_store() {
        let mut store = SlotStore::default();
        store.resize(0).unwrap();
        assert!(store.is_initialized());
        assert_eq!(store.size(), 0);
    }

    #[test]
    fn test_negative_resize_is_rejected() {
        let mut store = store_with(&[1, 2]);
        assert_eq!(store.resize(-1), Err(SlotError::InvalidSize(-1)));
        assert_eq!(store.current_view().counts(), &[1, 2]);
    }

    #[test]
    fn test_resize_beyond_budget_is_rejected() {
        let mut store = SlotStore::default();
        assert_eq!(
            store.resize(i64::MAX),
            Err(SlotError::SnapshotLimitExceeded {
                current: 0,
                limit: DEFAULT_SNAPSHOT_LIMIT
            })
        );
        assert!(!store.is_initialized());
        assert_eq!(store.size(), 0);
    }

    #[test]
    fn test_unallocatable_resize_is_invalid_size() {
        let mut store = SlotStore::new(usize::MAX);
        store.resize(2).unwrap();
        assert_eq!(store.resize(i64::MAX), Err(SlotError::InvalidSize(i64::MAX)));
        assert_eq!(store.size(), 2);
    }

    #[test]
    fn test_full_budget_rejects_changes_before_applying_them() {
        let mut store = SlotStore::new(2 * SlotSetView::estimated_size_for(1));
        store.resize(1).unwrap();
        store.record_snapshot().unwrap();
        store.add(1).unwrap();
        store.record_snapshot().unwrap();

        let full = SlotError::SnapshotLimitExceeded {
            current: store.history().memory_usage(),
            limit: store.history().memory_limit(),
        };
        assert_eq!(store.add(1), Err(full.clone()));
        assert_eq!(store.move_block(1, 1), Err(full.clone()));
        assert_eq!(store.remove(1), Err(full.clone()));
        assert_eq!(store.undo(1), Err(full.clone()));
        assert_eq!(store.resize(0), Err(full));

        assert_eq!(store.current_view().counts(), &[1]);
        assert_eq!(store.history_len(), 2);
    }

    #[test]
    fn test_add_invalid_slot() {
        let mut store = store_with(&[0, 0]);
        assert_eq!(
            store.add(3),
            Err(SlotError::InvalidSlot { slot: 3, size: 2 })
        );
        assert_eq!(
            store.add(0),
            Err(SlotError::InvalidSlot { slot: 0, size: 2 })
        );
    }

    #[test]
    fn test_move_checks_destination_before_taking() {
        let mut store = store_with(&[2, 0]);
        assert_eq!(
            store.move_block(1, 9),
            Err(SlotError::InvalidSlot { slot: 9, size: 2 })
        );
        assert_eq!(store.current_view().counts(), &[2, 0]);
    }

    #[test]
    fn test_move_from_empty_slot() {
        let mut store = store_with(&[0, 1]);
        assert_eq!(store.move_block(1, 2), Ok(BlockOutcome::NoBlocksAvailable));
        assert_eq!(store.current_view().counts(), &[0, 1]);
    }

    #[test]
    fn test_move_to_same_slot_keeps_count() {
        let mut store = store_with(&[3]);
        assert_eq!(store.move_block(1, 1), Ok(BlockOutcome::Applied));
        assert_eq!(store.current_view().counts(), &[3]);
    }

    #[test]
    fn test_remove() {
        let mut store = store_with(&[1]);
        assert_eq!(store.remove(1), Ok(BlockOutcome::Applied));
        assert_eq!(store.remove(1), Ok(BlockOutcome::NoBlocksAvailable));
        assert_eq!(store.current_view().counts(), &[0]);
    }

    #[test]
    fn test_replay_range() {
        let mut store = store_with(&[0]);
        for _ in 0..3 {
            store.add(1).unwrap();
            store.record_snapshot().unwrap();
        }
        // history: [0], [1], [2], [3]
        let frames: Vec<u64> = store
            .replay_from(2)
            .unwrap()
            .map(|view| view.total_blocks())
            .collect();
        assert_eq!(frames, vec![1, 2, 3]);

        assert!(matches!(
            store.replay_from(3),
            Err(SlotError::ReplayRangeTooLarge {
                requested: 3,
                recorded: 4
            })
        ));
        assert!(matches!(
            store.replay_from(-1),
            Err(SlotError::NegativeCount(-1))
        ));
    }

    #[test]
    fn test_replay_zero_yields_latest_only() {
        let mut store = store_with(&[0]);
        store.add(1).unwrap();
        store.record_snapshot().unwrap();

        let frames: Vec<SlotSetView> = store.replay_from(0).unwrap().collect();
        assert_eq!(frames, vec![store.current_view()]);
    }

    #[test]
    fn test_undo_bounds() {
        let mut store = store_with(&[1]);
        store.add(1).unwrap();
        store.record_snapshot().unwrap();
        // history: [1], [2]

        assert_eq!(
            store.undo(2),
            Err(SlotError::IndexOutOfRange {
                requested: 2,
                recorded: 2
            })
        );
        assert_eq!(
            store.undo(-1),
            Err(SlotError::IndexOutOfRange {
                requested: -1,
                recorded: 2
            })
        );

        store.undo(1).unwrap();
        assert_eq!(store.current_view().counts(), &[1]);
    }

    #[test]
    fn test_undo_restores_a_copy() {
        let mut store = store_with(&[1]);
        store.undo(0).unwrap();
        store.add(1).unwrap();

        assert_eq!(store.current_view().counts(), &[2]);
        assert_eq!(store.history().last().map(|v| v.counts().to_vec()), Some(vec![1]));
    }
}
