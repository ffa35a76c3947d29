//! Search and collection utilities for Advent of Code solutions
//!
//! Shared building blocks that puzzle solutions reach for when a day turns
//! into a shortest-path or state-space problem.
//!
//! # Overview
//!
//! - [`search`]: one entry point for BFS, Dijkstra and A* over implicit graphs,
//!   with distance-only ([`search::min_distance`]) and path
//!   ([`search::min_path`]) conveniences
//! - [`collections`]: hash-function keyed [`XMap`](collections::XMap) /
//!   [`XSet`](collections::XSet), [`DefaultMap`](collections::DefaultMap),
//!   [`MinHeap`](collections::MinHeap) and [`Queue`](collections::Queue)
//! - [`grid`]: integer [`Point`](grid::Point)s and point-keyed collections
//!
//! # Quick Example
//!
//! ```
//! use aoc_search::grid::Point;
//! use aoc_search::search::{min_distance, Edges, Goal, SearchOptions};
//!
//! let steps = min_distance(
//!     Point::new(0, 0),
//!     |p: &Point| p.grid_hash(5),
//!     SearchOptions::new(
//!         Goal::state(Point::new(4, 4)),
//!         Edges::unweighted(|p: &Point| {
//!             p.neighbors4().into_iter().filter(|n| n.in_bounds(5, 5)).collect()
//!         }),
//!     ),
//! )
//! .unwrap();
//!
//! assert_eq!(steps, 8);
//! ```
//!
//! # Logging
//!
//! The engine logs through the `log` facade: `debug` when a search finishes
//! or fails, `trace` for every expanded state. Install any logger to see it.

pub mod collections;
pub mod grid;
pub mod search;
