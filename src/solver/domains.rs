//! Per-slot candidate word sets.

use im::OrdSet;

use crate::grid::{Grid, SlotId};
use crate::words::{Word, WordList};

/// The candidate set for one slot. Ordered, so iteration (and therefore
/// every tie-break derived from it) is deterministic; persistent, so cloning
/// a domain shares structure instead of copying words.
pub type DomainSet = OrdSet<Word>;

/// The current candidate words for every slot, indexed by [`SlotId`].
///
/// Domains only ever shrink under the consistency passes. The search itself
/// reads the store immutably, so no branch of the search can corrupt the
/// domains seen by a sibling branch; a caller that does want a private copy
/// gets one in O(slots) from `clone`.
#[derive(Debug, Clone)]
pub struct DomainStore {
    domains: Vec<DomainSet>,
}

impl DomainStore {
    /// Builds the initial store: every slot starts with the full dictionary.
    pub fn new(grid: &Grid, words: &WordList) -> Self {
        let full: DomainSet = words.iter().cloned().collect();
        Self {
            domains: vec![full; grid.slot_count()],
        }
    }

    pub fn get(&self, id: SlotId) -> &DomainSet {
        &self.domains[id as usize]
    }

    pub fn len(&self, id: SlotId) -> usize {
        self.domains[id as usize].len()
    }

    pub fn is_empty(&self, id: SlotId) -> bool {
        self.domains[id as usize].is_empty()
    }

    pub fn slot_count(&self) -> usize {
        self.domains.len()
    }

    /// Keeps only the words satisfying `keep`, returning whether anything
    /// was removed.
    pub fn retain(&mut self, id: SlotId, keep: impl Fn(&Word) -> bool) -> bool {
        let old = &self.domains[id as usize];
        let new: DomainSet = old.iter().filter(|w| keep(w)).cloned().collect();
        let changed = new.len() != old.len();
        if changed {
            self.domains[id as usize] = new;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::grid::Grid;
    use crate::words::WordList;

    #[test]
    fn every_slot_starts_with_the_full_dictionary() {
        let grid = Grid::parse("___\n#_#\n#_#").unwrap();
        let words = WordList::from_words(["cat", "dog"]).unwrap();
        let store = DomainStore::new(&grid, &words);

        assert_eq!(store.slot_count(), 2);
        for id in grid.slot_ids() {
            assert_eq!(store.len(id), 2);
        }
    }

    #[test]
    fn retain_reports_whether_words_were_removed() {
        let grid = Grid::parse("___\n#_#\n#_#").unwrap();
        let words = WordList::from_words(["cat", "dog"]).unwrap();
        let mut store = DomainStore::new(&grid, &words);

        assert!(store.retain(0, |w| w.as_str() == "CAT"));
        assert!(!store.retain(0, |w| w.as_str() == "CAT"));
        assert_eq!(store.len(0), 1);
        assert_eq!(store.len(1), 2);
    }
}
