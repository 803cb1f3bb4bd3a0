//! Immutable slot set copies

use super::{slot_index, BlockCount};
use std::fmt;
use std::mem;

/// Default character drawn once per block
pub const DEFAULT_MARKER: char = 'X';

/// An immutable, independent copy of a slot set.
///
/// Used both for history snapshots and for anything handed to the
/// presentation layer. Iteration is in ascending identifier order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlotSetView {
    counts: Box<[BlockCount]>,
}

impl SlotSetView {
    pub(crate) fn from_counts(counts: Vec<BlockCount>) -> Self {
        SlotSetView {
            counts: counts.into_boxed_slice(),
        }
    }

    /// Block counts in identifier order (slot 1 first)
    pub fn counts(&self) -> &[BlockCount] {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn count(&self, slot: i64) -> Option<BlockCount> {
        slot_index(slot, self.len()).map(|index| self.counts[index])
    }

    pub fn total_blocks(&self) -> BlockCount {
        self.counts.iter().sum()
    }

    /// `(slot id, count)` pairs in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = (usize, BlockCount)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(index, count)| (index + 1, *count))
    }

    /// Estimate the memory held by this view in bytes
    pub fn estimated_size(&self) -> usize {
        Self::estimated_size_for(self.counts.len())
    }

    /// Estimated size of a view over `slots` slots, saturating at `usize::MAX`
    pub fn estimated_size_for(slots: usize) -> usize {
        slots
            .saturating_mul(mem::size_of::<BlockCount>())
            .saturating_add(mem::size_of::<Self>())
    }

    /// One `"<id>: <marker repeated count times>"` line per slot
    pub fn render(&self, marker: char) -> String {
        let mut out = String::new();
        for (slot, count) in self.iter() {
            out.push_str(&format!("{}: ", slot));
            out.extend(std::iter::repeat(marker).take(count as usize));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for SlotSetView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_MARKER))
    }
}
