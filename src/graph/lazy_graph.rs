use crate::graph::{NeighbourGenerator, SerdeHasher, StateHasher};
use crate::search::{
    astar, GoalCondition, Heuristic, SearchQuery, SearchResult, SearchStatistics,
};
use serde::Serialize;

/// A lazily expanded view of an implicit state graph.
///
/// A [`LazyGraph`] binds a [`NeighbourGenerator`] and a [`StateHasher`] into
/// a reusable configuration. It holds no graph state
/// itself and is immutable after construction, so one instance can serve any
/// number of [`LazyGraph::find_path`] queries. Nodes are generated on demand:
/// the engine only asks for the neighbours of states it actually expands.
#[derive(Debug, Clone)]
pub struct LazyGraph<G, H = SerdeHasher> {
    generator: G,
    hasher: H,
}

impl<G> LazyGraph<G, SerdeHasher>
where
    G: NeighbourGenerator,
    G::State: Clone + Serialize,
{
    /// Bind a neighbour generator with the default hashing strategy, the
    /// canonical JSON serialisation of the state. See
    /// [`LazyGraph::with_hasher`] for supplying a custom identity.
    pub fn new(generator: G) -> Self {
        Self::with_hasher(generator, SerdeHasher::new())
    }
}

impl<G, H> LazyGraph<G, H>
where
    G: NeighbourGenerator,
    G::State: Clone,
    H: StateHasher<G::State>,
{
    /// Bind a neighbour generator with a custom hashing strategy. A hasher
    /// that ignores parts of the state collapses all states that agree on the
    /// remaining parts into a single vertex.
    pub fn with_hasher(generator: G, hasher: H) -> Self {
        Self { generator, hasher }
    }

    /// Run one search query to completion and return its outcome.
    ///
    /// The call is synchronous and never yields; the only bound on its work is
    /// the cost ceiling of the query. All search state is private to the call,
    /// so concurrent queries against a shared graph are safe.
    ///
    /// Panics raised by the domain callbacks propagate to the caller.
    pub fn find_path<C, E>(&self, query: SearchQuery<G::State, C, E>) -> SearchResult<G::State>
    where
        C: GoalCondition<G::State>,
        E: Heuristic<G::State>,
    {
        self.find_path_with_statistics(query).0
    }

    /// Same as [`LazyGraph::find_path`], additionally exposing the search
    /// counters for callers that want to inspect them.
    pub fn find_path_with_statistics<C, E>(
        &self,
        query: SearchQuery<G::State, C, E>,
    ) -> (SearchResult<G::State>, SearchStatistics)
    where
        C: GoalCondition<G::State>,
        E: Heuristic<G::State>,
    {
        let (result, mut statistics) = astar::search(&self.generator, &self.hasher, query);
        statistics.finalise_search();
        (result, statistics)
    }
}
