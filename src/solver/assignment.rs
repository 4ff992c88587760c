//! Partial and complete mappings from slots to words.

use std::collections::HashSet;

use im::OrdMap;

use crate::grid::{Grid, SlotId};
use crate::words::Word;

/// A partial assignment of words to slots.
///
/// The search mutates a single `Assignment` in place with a frame-scoped
/// discipline: bind before recursing, unbind when the branch fails. The map
/// is persistent, so snapshotting a finished assignment is cheap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    bindings: OrdMap<SlotId, Word>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, slot: SlotId, word: Word) {
        self.bindings.insert(slot, word);
    }

    pub fn unbind(&mut self, slot: SlotId) {
        self.bindings.remove(&slot);
    }

    pub fn get(&self, slot: SlotId) -> Option<&Word> {
        self.bindings.get(&slot)
    }

    pub fn contains(&self, slot: SlotId) -> bool {
        self.bindings.contains_key(&slot)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SlotId, &Word)> {
        self.bindings.iter()
    }

    /// `true` once every slot in the grid is bound.
    pub fn is_complete(&self, grid: &Grid) -> bool {
        self.bindings.len() == grid.slot_count()
    }

    /// Checks the three consistency invariants directly: bound words are
    /// pairwise distinct, each fits its slot's length, and every bound
    /// crossing agrees on the shared cell.
    pub fn is_consistent(&self, grid: &Grid) -> bool {
        let mut seen: HashSet<&Word> = HashSet::with_capacity(self.bindings.len());
        for (&slot, word) in &self.bindings {
            if !seen.insert(word) {
                return false;
            }
            if word.len() != grid.slot(slot).length {
                return false;
            }
            for &other in grid.neighbors(slot) {
                let Some(other_word) = self.bindings.get(&other) else {
                    continue;
                };
                // Neighbors always cross somewhere.
                let Some((i, j)) = grid.overlap(slot, other) else {
                    continue;
                };
                if word.letter(i) != other_word.letter(j) {
                    return false;
                }
            }
        }
        true
    }
}
