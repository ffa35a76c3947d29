//! Result of a successful search.

use std::collections::HashMap;
use std::hash::Hash;

use super::error::SearchError;
use super::options::SearchMode;

/// Everything a search knows once it reaches the goal.
///
/// Holds the goal state, the distance table and, when path tracking was
/// requested, the predecessor table.
#[derive(Debug, Clone)]
pub struct SearchOutcome<S, H, C> {
    pub(crate) goal: S,
    pub(crate) goal_hash: H,
    pub(crate) start_hash: H,
    pub(crate) distance: C,
    pub(crate) distances: HashMap<H, C>,
    /// `hash -> (predecessor hash, predecessor state)`
    pub(crate) predecessors: Option<HashMap<H, (H, S)>>,
    pub(crate) expanded: usize,
    pub(crate) mode: SearchMode,
}

impl<S, H, C> SearchOutcome<S, H, C>
where
    H: Hash + Eq,
    C: Copy,
{
    /// The state that satisfied the goal.
    pub fn goal(&self) -> &S {
        &self.goal
    }

    pub fn into_goal(self) -> S {
        self.goal
    }

    /// Cost of the best path from start to the goal.
    pub fn distance(&self) -> C {
        self.distance
    }

    /// Best known cost for every state the search reached.
    ///
    /// Entries for states never popped are tentative upper bounds.
    pub fn distances(&self) -> &HashMap<H, C> {
        &self.distances
    }

    pub fn distance_to(&self, hash: &H) -> Option<C> {
        self.distances.get(hash).copied()
    }

    /// `hash -> (predecessor hash, predecessor state)` for every improved
    /// state, or `None` when path tracking was off.
    pub fn predecessors(&self) -> Option<&HashMap<H, (H, S)>> {
        self.predecessors.as_ref()
    }

    /// Number of states whose edges were enumerated.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn is_path_tracked(&self) -> bool {
        self.predecessors.is_some()
    }

    /// States from start to goal inclusive.
    pub fn path(&self) -> Result<Vec<S>, SearchError>
    where
        S: Clone,
    {
        let predecessors = self
            .predecessors
            .as_ref()
            .ok_or(SearchError::PathNotTracked)?;

        let mut path = vec![self.goal.clone()];
        let mut current = &self.goal_hash;
        while *current != self.start_hash {
            let (prev_hash, prev) = predecessors
                .get(current)
                .ok_or(SearchError::PathNotTracked)?;
            path.push(prev.clone());
            current = prev_hash;
        }
        path.reverse();
        Ok(path)
    }

    /// Like [`path`](Self::path) but moves states out instead of cloning them.
    pub fn into_path(self) -> Result<Vec<S>, SearchError> {
        let mut predecessors = self.predecessors.ok_or(SearchError::PathNotTracked)?;

        let mut path = vec![self.goal];
        let mut current = self.goal_hash;
        while current != self.start_hash {
            let (prev_hash, prev) = predecessors
                .remove(&current)
                .ok_or(SearchError::PathNotTracked)?;
            path.push(prev);
            current = prev_hash;
        }
        path.reverse();
        Ok(path)
    }
}
