//! Typed search configuration.

use std::fmt;

/// Boxed neighbour function for unweighted search.
pub type EdgeFn<'a, S> = Box<dyn Fn(&S) -> Vec<S> + 'a>;

/// Boxed neighbour function yielding `(next_state, cost)` pairs.
pub type WeightedEdgeFn<'a, S, C> = Box<dyn Fn(&S) -> Vec<(S, C)> + 'a>;

/// Boxed estimate of the remaining cost from a state to the goal.
pub type HeuristicFn<'a, S, C> = Box<dyn Fn(&S) -> C + 'a>;

/// Boxed goal predicate.
pub type GoalFn<'a, S> = Box<dyn Fn(&S) -> bool + 'a>;

/// When the search stops.
pub enum Goal<'a, S> {
    /// Stop on the first popped state whose hash equals this state's hash.
    State(S),
    /// Stop on the first popped state for which the predicate holds.
    Predicate(GoalFn<'a, S>),
}

impl<'a, S> Goal<'a, S> {
    pub fn state(goal: S) -> Self {
        Goal::State(goal)
    }

    pub fn predicate(is_goal: impl Fn(&S) -> bool + 'a) -> Self {
        Goal::Predicate(Box::new(is_goal))
    }
}

/// How neighbours are generated, which also selects the algorithm.
pub enum Edges<'a, S, C> {
    /// Breadth-first search; every edge costs one.
    Unweighted(EdgeFn<'a, S>),
    /// Dijkstra, or A* when a heuristic is present.
    Weighted {
        edges: WeightedEdgeFn<'a, S, C>,
        heuristic: Option<HeuristicFn<'a, S, C>>,
    },
}

impl<'a, S> Edges<'a, S, usize> {
    /// Unit-cost neighbours. Distances are step counts.
    pub fn unweighted(edges: impl Fn(&S) -> Vec<S> + 'a) -> Self {
        Edges::Unweighted(Box::new(edges))
    }
}

impl<'a, S, C> Edges<'a, S, C> {
    /// Weighted neighbours searched with Dijkstra.
    ///
    /// Edge costs must be non-negative. Signed cost types accept negative
    /// weights, but then the returned distance may not be minimal and a
    /// negative cycle keeps the search running unless an expansion limit is
    /// set.
    pub fn weighted(edges: impl Fn(&S) -> Vec<(S, C)> + 'a) -> Self {
        Edges::Weighted {
            edges: Box::new(edges),
            heuristic: None,
        }
    }

    /// Weighted neighbours searched with A*.
    ///
    /// The heuristic must never overestimate the remaining cost, otherwise the
    /// returned distance may not be minimal.
    pub fn a_star(
        edges: impl Fn(&S) -> Vec<(S, C)> + 'a,
        heuristic: impl Fn(&S) -> C + 'a,
    ) -> Self {
        Edges::Weighted {
            edges: Box::new(edges),
            heuristic: Some(Box::new(heuristic)),
        }
    }

    pub fn mode(&self) -> SearchMode {
        match self {
            Edges::Unweighted(_) => SearchMode::Bfs,
            Edges::Weighted {
                heuristic: None, ..
            } => SearchMode::Dijkstra,
            Edges::Weighted {
                heuristic: Some(_),
                ..
            } => SearchMode::AStar,
        }
    }
}

/// Algorithm selected by the [`Edges`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchMode {
    Bfs,
    Dijkstra,
    AStar,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchMode::Bfs => "BFS",
            SearchMode::Dijkstra => "Dijkstra",
            SearchMode::AStar => "A*",
        };
        f.write_str(name)
    }
}

/// Full configuration for a search call.
///
/// Goal and edge function are required at construction; everything else is
/// set through the builder methods.
///
/// ```rust
/// use aoc_search::search::{Edges, Goal, SearchMode, SearchOptions};
///
/// let options = SearchOptions::new(
///     Goal::predicate(|n: &u32| *n == 10),
///     Edges::unweighted(|n: &u32| vec![n + 1, n * 2]),
/// )
/// .track_path(true)
/// .expansion_limit(1_000);
///
/// assert_eq!(options.mode(), SearchMode::Bfs);
/// assert!(options.is_tracking_path());
/// ```
pub struct SearchOptions<'a, S, C> {
    pub(crate) goal: Goal<'a, S>,
    pub(crate) edges: Edges<'a, S, C>,
    pub(crate) track_path: bool,
    pub(crate) expansion_limit: Option<usize>,
}

impl<'a, S, C> SearchOptions<'a, S, C> {
    pub fn new(goal: Goal<'a, S>, edges: Edges<'a, S, C>) -> Self {
        Self {
            goal,
            edges,
            track_path: false,
            expansion_limit: None,
        }
    }

    /// Record predecessors so the outcome can reconstruct the path.
    pub fn track_path(mut self, track: bool) -> Self {
        self.track_path = track;
        self
    }

    /// Fail with `ExpansionLimitReached` after expanding `limit` states.
    ///
    /// Unbounded by default.
    pub fn expansion_limit(mut self, limit: usize) -> Self {
        self.expansion_limit = Some(limit);
        self
    }

    pub fn mode(&self) -> SearchMode {
        self.edges.mode()
    }

    pub fn is_tracking_path(&self) -> bool {
        self.track_path
    }
}
