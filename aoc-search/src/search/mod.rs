//! Generic state-space search: BFS, Dijkstra and A* behind one entry point.
//!
//! Callers describe an implicit graph with three pieces:
//!
//! - a start state of any `Clone` type
//! - a hash function mapping states to their identity (`Hash + Eq + Clone`)
//! - [`SearchOptions`], pairing a [`Goal`] with an [`Edges`] description
//!
//! The [`Edges`] variant picks the algorithm:
//!
//! | Edges | Frontier | Algorithm |
//! |---|---|---|
//! | [`Edges::unweighted`] | FIFO [`Queue`](crate::collections::Queue) | BFS, unit costs |
//! | [`Edges::weighted`] | [`MinHeap`](crate::collections::MinHeap) by distance | Dijkstra |
//! | [`Edges::a_star`] | [`MinHeap`](crate::collections::MinHeap) by distance + heuristic | A* |
//!
//! Every call owns its distance table, predecessor table and frontier; nothing
//! is shared between calls.
//!
//! # Warning: Unbounded State Spaces
//!
//! Without [`SearchOptions::expansion_limit`] a search over an infinite state
//! space with an unreachable goal never returns.
//!
//! # Example: Grid BFS
//!
//! ```rust
//! use aoc_search::grid::Point;
//! use aoc_search::search::{min_distance, Edges, Goal, SearchOptions};
//!
//! let walls = [Point::new(1, 0), Point::new(1, 1), Point::new(1, 2)];
//! let edges = |p: &Point| -> Vec<Point> {
//!     p.neighbors4()
//!         .into_iter()
//!         .filter(|n| n.in_bounds(4, 4) && !walls.contains(n))
//!         .collect()
//! };
//!
//! let steps = min_distance(
//!     Point::new(0, 0),
//!     |p: &Point| p.grid_hash(4),
//!     SearchOptions::new(Goal::state(Point::new(2, 0)), Edges::unweighted(edges)),
//! )
//! .unwrap();
//! assert_eq!(steps, 8);
//! ```
//!
//! # Example: A* with a Predicate Goal
//!
//! ```rust
//! use aoc_search::grid::Point;
//! use aoc_search::search::{min_path, Edges, Goal, SearchOptions};
//!
//! let target = Point::new(3, 3);
//! let path = min_path(
//!     Point::new(0, 0),
//!     |p: &Point| p.key(),
//!     SearchOptions::new(
//!         Goal::predicate(move |p: &Point| *p == target),
//!         Edges::a_star(
//!             |p: &Point| {
//!                 p.neighbors4()
//!                     .into_iter()
//!                     .filter(|n| n.in_bounds(4, 4))
//!                     .map(|n| (n, 1u64))
//!                     .collect()
//!             },
//!             move |p: &Point| p.manhattan(target),
//!         ),
//!     ),
//! )
//! .unwrap();
//!
//! assert_eq!(path.first(), Some(&Point::new(0, 0)));
//! assert_eq!(path.last(), Some(&target));
//! assert_eq!(path.len(), 7);
//! ```

mod cost;
mod engine;
mod error;
mod frontier;
mod options;
mod outcome;

pub use cost::Cost;
pub use engine::{min_distance, min_path, search};
pub use error::SearchError;
pub use options::{
    EdgeFn, Edges, Goal, GoalFn, HeuristicFn, SearchMode, SearchOptions, WeightedEdgeFn,
};
pub use outcome::SearchOutcome;
