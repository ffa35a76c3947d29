//! The search loop and its entry points.

use std::collections::HashMap;
use std::hash::Hash;

use log::{debug, trace};

use crate::collections::{MinHeap, Queue};

use super::cost::Cost;
use super::error::SearchError;
use super::frontier::Frontier;
use super::options::{Edges, Goal, GoalFn, SearchMode, SearchOptions};
use super::outcome::SearchOutcome;

/// Goal condition with the target state already hashed.
enum GoalTest<'a, S, H> {
    Hash(H),
    Predicate(GoalFn<'a, S>),
}

impl<S, H: Eq> GoalTest<'_, S, H> {
    fn matches(&self, state: &S, hash: &H) -> bool {
        match self {
            GoalTest::Hash(target) => hash == target,
            GoalTest::Predicate(is_goal) => is_goal(state),
        }
    }
}

/// Per-call settings that do not depend on the algorithm.
struct RunSettings {
    track_path: bool,
    expansion_limit: Option<usize>,
    mode: SearchMode,
}

/// Searches from `start` until a state satisfies the goal.
///
/// The algorithm follows from `options`: [`Edges::Unweighted`] runs BFS,
/// [`Edges::Weighted`] runs Dijkstra, or A* when it carries a heuristic.
/// States are identified only through `hash_state`; two states with the same
/// hash are the same state.
///
/// The goal is tested when a state is popped from the frontier, so the
/// returned distance is minimal (for A*, given an admissible heuristic).
///
/// # Errors
///
/// - [`SearchError::NoPath`] if the frontier empties first
/// - [`SearchError::ExpansionLimitReached`] if an expansion limit was set and hit
///
/// # Example
///
/// ```rust
/// use aoc_search::search::{search, Edges, Goal, SearchOptions};
///
/// // Reach 10 from 1 using "+1" and "*2"
/// let outcome = search(
///     1u32,
///     |n: &u32| *n,
///     SearchOptions::new(
///         Goal::state(10),
///         Edges::unweighted(|n: &u32| vec![n + 1, n * 2]),
///     )
///     .track_path(true),
/// )
/// .unwrap();
///
/// assert_eq!(outcome.distance(), 4);
/// assert_eq!(outcome.path().unwrap(), vec![1, 2, 4, 5, 10]);
/// ```
pub fn search<'a, S, H, C, F>(
    start: S,
    hash_state: F,
    options: SearchOptions<'a, S, C>,
) -> Result<SearchOutcome<S, H, C>, SearchError>
where
    S: Clone,
    H: Hash + Eq + Clone,
    C: Cost,
    F: Fn(&S) -> H,
{
    let SearchOptions {
        goal,
        edges,
        track_path,
        expansion_limit,
    } = options;

    let settings = RunSettings {
        track_path,
        expansion_limit,
        mode: edges.mode(),
    };

    let goal = match goal {
        Goal::State(target) => GoalTest::Hash(hash_state(&target)),
        Goal::Predicate(is_goal) => GoalTest::Predicate(is_goal),
    };

    match edges {
        Edges::Unweighted(next) => drive(
            start,
            &hash_state,
            &goal,
            Queue::<(C, S)>::new(),
            |state: &S| next(state).into_iter().map(|n| (n, C::ONE)),
            |_: &S| C::ZERO,
            settings,
        ),
        Edges::Weighted {
            edges,
            heuristic: None,
        } => drive(
            start,
            &hash_state,
            &goal,
            MinHeap::<C, (C, S)>::new(),
            |state: &S| edges(state),
            |_: &S| C::ZERO,
            settings,
        ),
        Edges::Weighted {
            edges,
            heuristic: Some(heuristic),
        } => drive(
            start,
            &hash_state,
            &goal,
            MinHeap::<C, (C, S)>::new(),
            |state: &S| edges(state),
            |state: &S| heuristic(state),
            settings,
        ),
    }
}

/// Minimal distance from `start` to the goal.
///
/// ```rust
/// use aoc_search::search::{min_distance, Edges, Goal, SearchOptions};
///
/// // A -> B costs 5, A -> C costs 2, C -> B costs 2
/// let edges = |node: &char| match node {
///     'A' => vec![('B', 5u32), ('C', 2)],
///     'C' => vec![('B', 2)],
///     _ => vec![],
/// };
///
/// let distance = min_distance(
///     'A',
///     |node: &char| *node,
///     SearchOptions::new(Goal::state('B'), Edges::weighted(edges)),
/// )
/// .unwrap();
/// assert_eq!(distance, 4);
/// ```
pub fn min_distance<'a, S, H, C, F>(
    start: S,
    hash_state: F,
    options: SearchOptions<'a, S, C>,
) -> Result<C, SearchError>
where
    S: Clone,
    H: Hash + Eq + Clone,
    C: Cost,
    F: Fn(&S) -> H,
{
    search(start, hash_state, options).map(|outcome| outcome.distance())
}

/// Shortest path from `start` to the goal, both inclusive.
///
/// Path tracking is switched on regardless of `options`.
pub fn min_path<'a, S, H, C, F>(
    start: S,
    hash_state: F,
    options: SearchOptions<'a, S, C>,
) -> Result<Vec<S>, SearchError>
where
    S: Clone,
    H: Hash + Eq + Clone,
    C: Cost,
    F: Fn(&S) -> H,
{
    search(start, hash_state, options.track_path(true))?.into_path()
}

fn drive<S, H, C, F, Q, E, I, R>(
    start: S,
    hash_state: &F,
    goal: &GoalTest<'_, S, H>,
    mut frontier: Q,
    expand: E,
    heuristic: R,
    settings: RunSettings,
) -> Result<SearchOutcome<S, H, C>, SearchError>
where
    S: Clone,
    H: Hash + Eq + Clone,
    C: Cost,
    F: Fn(&S) -> H,
    Q: Frontier<C, S>,
    E: Fn(&S) -> I,
    I: IntoIterator<Item = (S, C)>,
    R: Fn(&S) -> C,
{
    let RunSettings {
        track_path,
        expansion_limit,
        mode,
    } = settings;

    let start_hash = hash_state(&start);
    let mut distances: HashMap<H, C> = HashMap::new();
    let mut predecessors: Option<HashMap<H, (H, S)>> = track_path.then(HashMap::new);
    let mut expanded = 0usize;

    distances.insert(start_hash.clone(), C::ZERO);
    frontier.push_state(C::ZERO, C::ZERO, start);

    while let Some((cost, state)) = frontier.pop_state() {
        let hash = hash_state(&state);

        // A cheaper route to this state was found after the entry was pushed
        if distances.get(&hash).is_some_and(|best| *best < cost) {
            continue;
        }

        if goal.matches(&state, &hash) {
            debug!("{mode} reached goal at distance {cost:?} after expanding {expanded} states");
            return Ok(SearchOutcome {
                goal: state,
                goal_hash: hash,
                start_hash,
                distance: cost,
                distances,
                predecessors,
                expanded,
                mode,
            });
        }

        if let Some(limit) = expansion_limit.filter(|&limit| expanded >= limit) {
            debug!("{mode} gave up after expanding {expanded} states");
            return Err(SearchError::ExpansionLimitReached { limit });
        }

        expanded += 1;
        trace!(
            "{mode} expanding state at distance {cost:?}, {} pending",
            frontier.pending()
        );

        for (next, step) in expand(&state) {
            // Routes costing more than C can hold are unreachable
            let Some(next_cost) = cost.checked_add(step) else {
                trace!("{mode} dropped edge: cost overflow past {cost:?}");
                continue;
            };
            let Some(priority) = next_cost.checked_add(heuristic(&next)) else {
                trace!("{mode} dropped edge: priority overflow at {next_cost:?}");
                continue;
            };
            let next_hash = hash_state(&next);
            if distances.get(&next_hash).is_some_and(|best| *best <= next_cost) {
                continue;
            }

            if let Some(predecessors) = predecessors.as_mut() {
                predecessors.insert(next_hash.clone(), (hash.clone(), state.clone()));
            }
            distances.insert(next_hash, next_cost);
            frontier.push_state(priority, next_cost, next);
        }
    }

    debug!("{mode} exhausted frontier after expanding {expanded} states");
    Err(SearchError::NoPath { expanded })
}
