//! Live slot set
//!
//! [`SlotSet`] is the mutable state the store works on. Its mutators are
//! crate-private: code outside the engine only ever sees a [`SlotSetView`].

use super::{deal_round_robin, slot_index, BlockCount, SlotSetView};
use std::collections::TryReserveError;

/// What a resize did to the slot set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResizeReport {
    pub previous_size: usize,
    pub new_size: usize,
    /// Blocks dealt from removed slots onto the survivors
    pub redistributed: BlockCount,
    /// Blocks dropped because no slot survived the shrink
    pub discarded: BlockCount,
}

/// The live mapping of slot identifier to block count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotSet {
    counts: Vec<BlockCount>,
}

impl SlotSet {
    pub fn new() -> Self {
        SlotSet { counts: Vec::new() }
    }

    /// Create `size` empty slots
    pub fn with_size(size: usize) -> Self {
        SlotSet {
            counts: vec![0; size],
        }
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Block count of `slot`, or `None` if it is not a current identifier
    pub fn count(&self, slot: i64) -> Option<BlockCount> {
        slot_index(slot, self.len()).map(|index| self.counts[index])
    }

    pub fn contains(&self, slot: i64) -> bool {
        slot_index(slot, self.len()).is_some()
    }

    /// Sum of blocks over all slots
    pub fn total_blocks(&self) -> BlockCount {
        self.counts.iter().sum()
    }

    /// Immutable copy for snapshots and rendering
    pub fn view(&self) -> SlotSetView {
        SlotSetView::from_counts(self.counts.clone())
    }

    pub(crate) fn count_mut(&mut self, slot: i64) -> Option<&mut BlockCount> {
        let index = slot_index(slot, self.len())?;
        self.counts.get_mut(index)
    }

    /// Change the number of slots to `new_size`.
    ///
    /// Growing appends empty slots and keeps every existing count. Shrinking
    /// pools the blocks of slots `new_size + 1..` and deals them back over
    /// `1..=new_size` in ascending round-robin sweeps. With no survivors the
    /// pool is discarded; this mirrors the controller's long-standing behavior
    /// and is reported through [`ResizeReport::discarded`].
    ///
    /// Growing fails without touching the set if the slots cannot be allocated.
    pub(crate) fn resize(&mut self, new_size: usize) -> Result<ResizeReport, TryReserveError> {
        let mut report = ResizeReport {
            previous_size: self.len(),
            new_size,
            ..ResizeReport::default()
        };

        if new_size >= self.len() {
            self.counts.try_reserve_exact(new_size - self.len())?;
            self.counts.resize(new_size, 0);
            return Ok(report);
        }

        let pool: BlockCount = self.counts.split_off(new_size).iter().sum();
        if self.counts.is_empty() {
            report.discarded = pool;
        } else {
            deal_round_robin(&mut self.counts, pool);
            report.redistributed = pool;
        }

        Ok(report)
    }
}

impl From<&SlotSetView> for SlotSet {
    fn from(view: &SlotSetView) -> Self {
        SlotSet {
            counts: view.counts().to_vec(),
        }
    }
}
