//! The two consistency passes that prune candidate domains before the
//! search runs: node consistency (word length) and arc consistency (AC-3
//! over the crossing constraints).

use tracing::debug;

use crate::grid::{Grid, SlotId};
use crate::solver::domains::DomainStore;
use crate::solver::stats::SearchStats;
use crate::solver::work_list::{Arc, WorkList};

/// Removes from every slot's domain the words that cannot fit it. An emptied
/// domain is left in place; the caller decides what that means.
pub fn enforce_node_consistency(domains: &mut DomainStore, grid: &Grid) {
    for id in grid.slot_ids() {
        let length = grid.slot(id).length;
        domains.retain(id, |word| word.len() == length);
    }
}

/// Makes `x` arc-consistent with `y`: removes every candidate of `x` that no
/// candidate of `y` supports at their crossing. Returns whether anything was
/// removed. `y`'s domain is never touched.
pub fn revise(domains: &mut DomainStore, grid: &Grid, x: SlotId, y: SlotId) -> bool {
    let Some((i, j)) = grid.overlap(x, y) else {
        return false;
    };
    let y_domain = domains.get(y).clone();
    domains.retain(x, |word| {
        let Some(letter) = word.letter(i) else {
            return false;
        };
        y_domain.iter().any(|other| other.letter(j) == Some(letter))
    })
}

/// Every ordered crossing pair in the grid: the default seed for [`ac3`].
pub fn all_arcs(grid: &Grid) -> Vec<Arc> {
    grid.slot_ids()
        .flat_map(|x| grid.neighbors(x).iter().map(move |&y| (x, y)))
        .collect()
}

/// Runs AC-3 to a fixed point from the full set of arcs.
///
/// Returns `false` as soon as some domain is revised down to nothing: the
/// puzzle has no solution and no search should be attempted.
pub fn ac3(domains: &mut DomainStore, grid: &Grid) -> bool {
    let mut stats = SearchStats::default();
    ac3_seeded(domains, grid, all_arcs(grid), &mut stats)
}

/// AC-3 from an explicit initial worklist, recording revision counts.
///
/// When a revision shrinks `domain[x]`, every arc `(z, x)` with `z` a
/// neighbor of `x` other than `y` goes back on the worklist: the shrink may
/// have removed the only support some candidate of `z` had.
pub fn ac3_seeded(
    domains: &mut DomainStore,
    grid: &Grid,
    arcs: impl IntoIterator<Item = Arc>,
    stats: &mut SearchStats,
) -> bool {
    let mut worklist = WorkList::new();
    for arc in arcs {
        worklist.push_back(arc);
    }

    while let Some((x, y)) = worklist.pop_front() {
        stats.revisions += 1;
        if revise(domains, grid, x, y) {
            stats.prunings += 1;
            if domains.is_empty(x) {
                debug!(slot = x, "domain emptied during propagation");
                return false;
            }
            for &z in grid.neighbors(x) {
                if z != y {
                    worklist.push_back((z, x));
                }
            }
        }
    }

    debug!(
        revisions = stats.revisions,
        prunings = stats.prunings,
        "arc consistency reached"
    );
    true
}
