//! Slot model for the block-stacking arm
//!
//! This module provides the two representations of a slot set:
//! - [`set`]: the live, mutable [`SlotSet`] owned by the store
//! - [`view`]: the immutable [`SlotSetView`] used for snapshots and rendering
//!
//! # Identifiers
//!
//! Slots are identified by positive integers `1..=N` where `N` is the current
//! size. The range is always contiguous, so both types keep a dense vector of
//! counts where slot `id` lives at index `id - 1`.
//!
//! Identifiers arrive from user input as signed integers; [`slot_index`] is the
//! single place where they are checked against the current size.
//!
//! # Redistribution
//!
//! Shrinking the set deals the blocks of the removed slots back onto the
//! survivors in ascending round-robin sweeps. Shrinking to zero slots discards
//! them. Both behaviors are intentional, see [`SlotSet::resize`].

pub mod set;
pub mod view;

pub use set::{ResizeReport, SlotSet};
pub use view::SlotSetView;

/// A block count held by one slot
pub type BlockCount = u64;

/// Map a user-facing slot identifier to a dense index, if it names a current slot
pub fn slot_index(slot: i64, size: usize) -> Option<usize> {
    if slot < 1 {
        return None;
    }
    let index = usize::try_from(slot - 1).ok()?;
    (index < size).then_some(index)
}

/// Deal `pool` blocks over `counts` in ascending round-robin sweeps.
///
/// Every full sweep adds one block to each slot, and the final partial sweep
/// covers the lowest identifiers first, so the result is computed directly
/// instead of one block at a time.
pub fn deal_round_robin(counts: &mut [BlockCount], pool: BlockCount) {
    if counts.is_empty() || pool == 0 {
        return;
    }

    let survivors = counts.len() as BlockCount;
    let per_slot = pool / survivors;
    let remainder = (pool % survivors) as usize;

    for (index, count) in counts.iter_mut().enumerate() {
        *count += per_slot;
        if index < remainder {
            *count += 1;
        }
    }
}
