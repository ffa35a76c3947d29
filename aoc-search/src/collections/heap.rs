//! Binary min-heap keyed by an explicit priority.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// priority first, and among equal priorities the earliest insertion.
#[derive(Debug)]
struct Entry<P, T> {
    priority: P,
    seq: u64,
    item: T,
}

impl<P: Ord, T> Ord for Entry<P, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<P: Ord, T> PartialOrd for Entry<P, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Ord, T> PartialEq for Entry<P, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<P: Ord, T> Eq for Entry<P, T> {}

/// A priority queue that always yields the item with the smallest priority.
///
/// Items carry no ordering of their own; only `priority` is compared. Items
/// pushed with equal priority come out in insertion order.
///
/// ```rust
/// use aoc_search::collections::MinHeap;
///
/// let mut heap = MinHeap::new();
/// heap.push(5, "far");
/// heap.push(1, "near");
/// heap.push(3, "middle");
///
/// assert_eq!(heap.pop(), Some((1, "near")));
/// assert_eq!(heap.pop(), Some((3, "middle")));
/// assert_eq!(heap.len(), 1);
/// ```
#[derive(Debug)]
pub struct MinHeap<P, T> {
    heap: BinaryHeap<Entry<P, T>>,
    next_seq: u64,
}

impl<P: Ord, T> MinHeap<P, T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Inserts `item` with the given priority in `O(log n)`.
    pub fn push(&mut self, priority: P, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            priority,
            seq,
            item,
        });
    }

    /// Removes the item with the smallest priority in `O(log n)`.
    pub fn pop(&mut self) -> Option<(P, T)> {
        self.heap.pop().map(|entry| (entry.priority, entry.item))
    }

    /// Returns the smallest priority and its item without removing them.
    pub fn peek(&self) -> Option<(&P, &T)> {
        self.heap.peek().map(|entry| (&entry.priority, &entry.item))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<P: Ord, T> Default for MinHeap<P, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Ord, T> Extend<(P, T)> for MinHeap<P, T> {
    fn extend<I: IntoIterator<Item = (P, T)>>(&mut self, iter: I) {
        for (priority, item) in iter {
            self.push(priority, item);
        }
    }
}

impl<P: Ord, T> FromIterator<(P, T)> for MinHeap<P, T> {
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
