//! Heuristics for choosing which slot to fill next during the search.

use std::cmp::Reverse;

use crate::grid::{Grid, SlotId};
use crate::solver::assignment::Assignment;
use crate::solver::domains::DomainStore;

/// A strategy for choosing the next unbound slot to branch on. A good choice
/// here can shrink the search tree dramatically.
pub trait VariableSelectionHeuristic: std::fmt::Debug {
    /// Picks an unbound slot, or `None` when every slot is bound.
    ///
    /// Implementations must be deterministic: the same domains, grid, and
    /// assignment always yield the same slot.
    fn select_variable(
        &self,
        domains: &DomainStore,
        grid: &Grid,
        assignment: &Assignment,
    ) -> Option<SlotId>;
}

/// Picks the unbound slot with the lowest id. A deterministic baseline.
#[derive(Debug)]
pub struct SelectFirstHeuristic;

impl VariableSelectionHeuristic for SelectFirstHeuristic {
    fn select_variable(
        &self,
        _domains: &DomainStore,
        grid: &Grid,
        assignment: &Assignment,
    ) -> Option<SlotId> {
        grid.slot_ids().find(|&id| !assignment.contains(id))
    }
}

/// Minimum-remaining-values with a degree tie-break: prefer the slot with
/// the fewest candidates left, then the one crossing the most other slots,
/// then the lowest slot id. The fail-first idea: tackling the most
/// constrained slot early prunes hopeless branches sooner.
#[derive(Debug)]
pub struct MinimumRemainingValuesHeuristic;

impl VariableSelectionHeuristic for MinimumRemainingValuesHeuristic {
    fn select_variable(
        &self,
        domains: &DomainStore,
        grid: &Grid,
        assignment: &Assignment,
    ) -> Option<SlotId> {
        grid.slot_ids()
            .filter(|&id| !assignment.contains(id))
            .min_by_key(|&id| (domains.len(id), Reverse(grid.neighbors(id).len()), id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::words::WordList;

    // Two across slots (rows 0 and 2) and one down slot crossing both.
    //   ___
    //   #_#
    //   ___
    fn ladder() -> (Grid, DomainStore) {
        let grid = Grid::parse("___\n#_#\n___").unwrap();
        let words = WordList::from_words(["cat", "dog", "ate"]).unwrap();
        let domains = DomainStore::new(&grid, &words);
        (grid, domains)
    }

    #[test]
    fn mrv_prefers_the_smallest_domain() {
        let (grid, mut domains) = ladder();
        domains.retain(0, |w| w.as_str() != "CAT");

        let pick = MinimumRemainingValuesHeuristic
            .select_variable(&domains, &grid, &Assignment::new())
            .unwrap();
        assert_eq!(pick, 0);
    }

    #[test]
    fn degree_breaks_domain_size_ties() {
        let (grid, domains) = ladder();

        // All domains equal; the down slot crosses two others, the across
        // slots cross one each.
        let pick = MinimumRemainingValuesHeuristic
            .select_variable(&domains, &grid, &Assignment::new())
            .unwrap();
        assert_eq!(grid.neighbors(pick).len(), 2);
    }

    #[test]
    fn bound_slots_are_never_selected() {
        let (grid, domains) = ladder();
        let mut assignment = Assignment::new();
        for id in grid.slot_ids() {
            assignment.bind(id, crate::words::Word::new("cat"));
        }

        assert_eq!(
            MinimumRemainingValuesHeuristic.select_variable(&domains, &grid, &assignment),
            None
        );
        assert_eq!(
            SelectFirstHeuristic.select_variable(&domains, &grid, &assignment),
            None
        );
    }

    #[test]
    fn selection_is_deterministic() {
        let (grid, domains) = ladder();
        let assignment = Assignment::new();

        let first = MinimumRemainingValuesHeuristic.select_variable(&domains, &grid, &assignment);
        for _ in 0..10 {
            assert_eq!(
                MinimumRemainingValuesHeuristic.select_variable(&domains, &grid, &assignment),
                first
            );
        }
    }
}
