use crate::search::HeuristicValue;
use itertools::Itertools;
use std::ops::Deref;
use thiserror::Error;

/// Why a search ended without a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The open list was exhausted: every reachable state was explored and
    /// none satisfies the goal.
    #[error("no reachable state satisfies the goal condition")]
    NoPathFound,
    /// The cheapest open node exceeded the cost ceiling of the query before a
    /// goal state was found.
    #[error("cheapest open node exceeded the cost ceiling of {0}")]
    CostCeilingExceeded(HeuristicValue),
}

/// One node of a returned [`Path`].
#[derive(Debug, Clone, PartialEq)]
pub struct PathNode<S> {
    state: S,
    g: HeuristicValue,
}

impl<S> PathNode<S> {
    pub(crate) fn new(state: S, g: HeuristicValue) -> Self {
        Self { state, g }
    }

    /// The caller-supplied state of this node.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Cumulative cost from the start of the path to this node.
    pub fn cost(&self) -> HeuristicValue {
        self.g
    }

    pub fn into_state(self) -> S {
        self.state
    }
}

/// A path through the graph, from the start state to a goal state inclusive.
/// A path always has at least one node; when the start state already
/// satisfies the goal it has exactly one.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<S> {
    nodes: Vec<PathNode<S>>,
}

impl<S> Path<S> {
    pub(crate) fn new(nodes: Vec<PathNode<S>>) -> Self {
        debug_assert!(!nodes.is_empty(), "A path has at least its start node");
        Self { nodes }
    }

    pub fn nodes(&self) -> &[PathNode<S>] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total cost of the path, the cumulative cost of its final node.
    pub fn total_cost(&self) -> HeuristicValue {
        self.nodes
            .last()
            .expect("A path has at least its start node")
            .cost()
    }

    /// Iterate over consecutive node pairs, one pair per traversed edge.
    pub fn edges(&self) -> impl Iterator<Item = (&PathNode<S>, &PathNode<S>)> {
        self.nodes.iter().tuple_windows()
    }
}

impl<S> IntoIterator for Path<S> {
    type Item = PathNode<S>;
    type IntoIter = std::vec::IntoIter<PathNode<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<S> Deref for Path<S> {
    type Target = [PathNode<S>];

    fn deref(&self) -> &Self::Target {
        &self.nodes
    }
}

/// Outcome of one search query.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult<S> {
    /// A goal state was reached; the path runs from the start to it.
    Success(Path<S>),
    /// The search terminated without reaching a goal state.
    Failure(SearchError),
}

impl<S> SearchResult<S> {
    pub fn is_fail(&self) -> bool {
        matches!(self, SearchResult::Failure(_))
    }

    /// The path of a successful search.
    ///
    /// # Panics
    ///
    /// Panics if the search failed. Requesting the path of a failure is a
    /// programming error; check [`SearchResult::is_fail`] first or use
    /// [`SearchResult::into_result`].
    pub fn path(&self) -> &Path<S> {
        match self {
            SearchResult::Success(path) => path,
            SearchResult::Failure(error) => {
                panic!("Requested the path of a failed search: {error}")
            }
        }
    }

    /// The error of a failed search.
    pub fn error(&self) -> Option<SearchError> {
        match self {
            SearchResult::Success(_) => None,
            SearchResult::Failure(error) => Some(*error),
        }
    }

    pub fn into_result(self) -> Result<Path<S>, SearchError> {
        match self {
            SearchResult::Success(path) => Ok(path),
            SearchResult::Failure(error) => Err(error),
        }
    }
}
