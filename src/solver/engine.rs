//! The solving pipeline: build domains, enforce consistency, then run a
//! backtracking search.

use std::time::Instant;

use tracing::debug;

use crate::grid::Grid;
use crate::solver::assignment::Assignment;
use crate::solver::consistency::{ac3_seeded, all_arcs, enforce_node_consistency};
use crate::solver::domains::DomainStore;
use crate::solver::heuristics::value::{LeastConstrainingValueHeuristic, ValueOrderingHeuristic};
use crate::solver::heuristics::variable::{
    MinimumRemainingValuesHeuristic, VariableSelectionHeuristic,
};
use crate::solver::stats::SearchStats;
use crate::words::WordList;

/// The engine that fills a grid from a word list.
///
/// Solving runs in three phases: node consistency strips words of the wrong
/// length, AC-3 strips words with no support at a crossing, and a plain
/// depth-first backtracking search over the pruned domains does the rest.
/// The search performs no further inference per branch; it reads the pruned
/// domain store immutably, so failed branches leave no trace to undo beyond
/// their own slot binding.
pub struct SolverEngine {
    variable_heuristic: Box<dyn VariableSelectionHeuristic>,
    value_heuristic: Box<dyn ValueOrderingHeuristic>,
}

impl SolverEngine {
    pub fn new(
        variable_heuristic: Box<dyn VariableSelectionHeuristic>,
        value_heuristic: Box<dyn ValueOrderingHeuristic>,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
        }
    }

    /// Attempts to fill the grid.
    ///
    /// Returns `None` when no complete consistent assignment exists; that is
    /// an ordinary outcome, not an error. Any returned assignment is
    /// complete and satisfies every crossing.
    pub fn solve(&self, grid: &Grid, words: &WordList) -> (Option<Assignment>, SearchStats) {
        let mut stats = SearchStats::default();
        let start = Instant::now();

        let mut domains = DomainStore::new(grid, words);
        enforce_node_consistency(&mut domains, grid);
        if grid.slot_ids().any(|id| domains.is_empty(id)) {
            // Some slot has no word of the right length at all.
            debug!("a domain emptied under node consistency");
            stats.solve_time_micros = start.elapsed().as_micros() as u64;
            return (None, stats);
        }
        if !ac3_seeded(&mut domains, grid, all_arcs(grid), &mut stats) {
            stats.solve_time_micros = start.elapsed().as_micros() as u64;
            return (None, stats);
        }

        let mut assignment = Assignment::new();
        let found = self.backtrack(grid, &domains, &mut assignment, &mut stats);
        stats.solve_time_micros = start.elapsed().as_micros() as u64;
        debug!(
            nodes = stats.nodes_visited,
            backtracks = stats.backtracks,
            solved = found,
            "search finished"
        );

        (found.then_some(assignment), stats)
    }

    /// Depth-first search over partial assignments. On success the binding
    /// stack is left in place and `true` propagates up; on failure every
    /// binding made below this frame has been removed again.
    fn backtrack(
        &self,
        grid: &Grid,
        domains: &DomainStore,
        assignment: &mut Assignment,
        stats: &mut SearchStats,
    ) -> bool {
        stats.nodes_visited += 1;
        if assignment.is_complete(grid) {
            return true;
        }

        let Some(slot) = self
            .variable_heuristic
            .select_variable(domains, grid, assignment)
        else {
            return true;
        };

        for word in self
            .value_heuristic
            .order_values(domains, grid, slot, assignment)
        {
            assignment.bind(slot, word);
            if assignment.is_consistent(grid) && self.backtrack(grid, domains, assignment, stats) {
                return true;
            }
            assignment.unbind(slot);
            stats.backtracks += 1;
        }

        false
    }
}

impl Default for SolverEngine {
    /// The production wiring: MRV with degree tie-break for slot selection,
    /// least-constraining-value for word ordering.
    fn default() -> Self {
        Self::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(LeastConstrainingValueHeuristic),
        )
    }
}
