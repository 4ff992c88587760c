use std::collections::{HashSet, VecDeque};

use crate::grid::SlotId;

/// An arc `(x, y)`: "every candidate for `x` needs support in `y`'s domain".
pub type Arc = (SlotId, SlotId);

/// FIFO worklist of arcs awaiting revision, with membership tracking so an
/// arc already queued is not queued twice. Processing order only affects
/// performance, not the fixed point reached.
pub struct WorkList {
    queue: VecDeque<Arc>,
    queue_members: HashSet<Arc>,
}

impl WorkList {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            queue_members: HashSet::new(),
        }
    }

    pub fn push_back(&mut self, arc: Arc) {
        if self.queue_members.insert(arc) {
            self.queue.push_back(arc);
        }
    }

    pub fn pop_front(&mut self) -> Option<Arc> {
        let arc = self.queue.pop_front()?;
        self.queue_members.remove(&arc);
        Some(arc)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for WorkList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_arcs_are_queued_once() {
        let mut worklist = WorkList::new();
        worklist.push_back((0, 1));
        worklist.push_back((0, 1));
        worklist.push_back((1, 0));

        assert_eq!(worklist.pop_front(), Some((0, 1)));
        assert_eq!(worklist.pop_front(), Some((1, 0)));
        assert_eq!(worklist.pop_front(), None);
    }

    #[test]
    fn an_arc_may_be_requeued_after_popping() {
        let mut worklist = WorkList::new();
        worklist.push_back((0, 1));
        assert_eq!(worklist.pop_front(), Some((0, 1)));

        worklist.push_back((0, 1));
        assert!(!worklist.is_empty());
        assert_eq!(worklist.pop_front(), Some((0, 1)));
    }
}
