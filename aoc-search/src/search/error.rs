//! Error types for the search engine

use thiserror::Error;

/// Error type for a search call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The frontier ran dry before any state satisfied the goal
    #[error("No path to goal: frontier exhausted after expanding {expanded} states")]
    NoPath { expanded: usize },
    /// The configured expansion limit was hit before the goal was found
    #[error("Expansion limit of {limit} states reached before finding the goal")]
    ExpansionLimitReached { limit: usize },
    /// A path was requested from an outcome that did not record predecessors
    #[error("Path was not tracked for this search")]
    PathNotTracked,
}
