use crate::search::HeuristicValue;

/// A neighbour generator is responsible for generating the states reachable
/// from a given state in a single step. It is the only required capability of
/// a problem domain: the graph is never materialised, states are produced on
/// demand while the search runs.
pub trait NeighbourGenerator {
    /// The caller-defined state type. The engine never inspects it, it only
    /// hashes states and hands them back to the domain callbacks.
    type State;

    /// All states reachable from `state` in one step. May return zero, one or
    /// many states. Pruning states that are invalid for the domain happens
    /// here, not in the engine.
    fn neighbours(&self, state: &Self::State) -> Vec<Self::State>;

    /// Cost of the edge between two adjacent states. Defaults to unit cost.
    /// Costs must be non-negative, otherwise the shortest-path guarantee is
    /// lost.
    fn cost(&self, _from: &Self::State, _to: &Self::State) -> HeuristicValue {
        (1.).into()
    }
}
