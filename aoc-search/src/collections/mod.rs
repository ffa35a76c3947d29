//! Collection utilities shared by puzzle solutions and the search engine.
//!
//! # Containers
//!
//! - [`XMap`] / [`XSet`]: map and set whose key identity comes from a
//!   caller-supplied hash function, for composite keys that do not (or should
//!   not) implement `Hash + Eq` themselves. Original keys are kept and handed
//!   back during iteration.
//! - [`DefaultMap`]: `HashMap` with get-or-create reads for accumulators.
//! - [`MinHeap`]: priority queue popping the smallest priority first.
//! - [`Queue`]: FIFO queue.
//!
//! # Warning: Hash Collisions
//!
//! `XMap` and `XSet` trust the hash function completely. Two distinct keys
//! that hash to the same value are treated as one key, silently.
//!
//! # Example
//!
//! ```rust
//! use aoc_search::collections::{DefaultMap, XMap};
//!
//! #[derive(Clone, Debug)]
//! struct Cell { row: usize, col: usize }
//!
//! let mut visits = XMap::new(|c: &Cell| c.row * 100 + c.col);
//! visits.insert(Cell { row: 1, col: 2 }, 3);
//! *visits.get_or_insert_with(Cell { row: 1, col: 2 }, || 0) += 1;
//! assert_eq!(visits.get(&Cell { row: 1, col: 2 }), Some(&4));
//!
//! let mut counts: DefaultMap<char, u32> = DefaultMap::with_default();
//! for c in "hello".chars() {
//!     *counts.get(c) += 1;
//! }
//! assert_eq!(counts.peek(&'l'), Some(&2));
//! ```

mod default_map;
mod hashed;
mod heap;
mod queue;

pub use default_map::DefaultMap;
pub use hashed::{IntoIter, Iter, XMap, XSet};
pub use heap::MinHeap;
pub use queue::Queue;

#[cfg(test)]
mod tests;
