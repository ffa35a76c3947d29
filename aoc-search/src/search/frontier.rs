//! Frontier seam between the search loop and its queue.

use crate::collections::{MinHeap, Queue};

/// Ordered set of states awaiting expansion.
///
/// Each entry carries the cost-to-reach recorded when it was pushed, so the
/// loop can recognise stale entries. `priority` orders the entry and is
/// ignored by FIFO frontiers.
pub(crate) trait Frontier<C, S> {
    fn push_state(&mut self, priority: C, cost: C, state: S);

    /// Next entry as `(cost, state)`.
    fn pop_state(&mut self) -> Option<(C, S)>;

    fn pending(&self) -> usize;
}

impl<C, S> Frontier<C, S> for Queue<(C, S)> {
    fn push_state(&mut self, _priority: C, cost: C, state: S) {
        self.push((cost, state));
    }

    fn pop_state(&mut self) -> Option<(C, S)> {
        self.pop()
    }

    fn pending(&self) -> usize {
        self.len()
    }
}

impl<C: Ord, S> Frontier<C, S> for MinHeap<C, (C, S)> {
    fn push_state(&mut self, priority: C, cost: C, state: S) {
        self.push(priority, (cost, state));
    }

    fn pop_state(&mut self) -> Option<(C, S)> {
        self.pop().map(|(_, entry)| entry)
    }

    fn pending(&self) -> usize {
        self.len()
    }
}
