//! This module implements the cost-bounded A* search routine.

use crate::graph::{NeighbourGenerator, StateHasher};
use crate::search::{
    GoalCondition, Heuristic, OpenList, SearchError, SearchNodeStatus, SearchQuery, SearchResult,
    SearchSpace, SearchStatistics,
};
use tracing::debug;

/// Run one A* query over a lazily expanded graph.
///
/// Nodes pop off the open list in ascending f-order, first-in first-out among
/// equal f-values, so identical inputs always produce identical paths. The
/// cost ceiling of the query is checked against the cheapest open node before
/// it is tested for the goal, which bounds the total work of the call.
pub(crate) fn search<G, H, C, E>(
    generator: &G,
    hasher: &H,
    query: SearchQuery<G::State, C, E>,
) -> (SearchResult<G::State>, SearchStatistics)
where
    G: NeighbourGenerator,
    G::State: Clone,
    H: StateHasher<G::State>,
    C: GoalCondition<G::State>,
    E: Heuristic<G::State>,
{
    let (start, goal, mut heuristic, max_cost) = query.into_parts();
    let mut statistics = SearchStatistics::new();
    let mut open_list = OpenList::new();

    let root_h = heuristic.evaluate(&start);
    let root_hash = hasher.hash_state(&start);
    let mut search_space = SearchSpace::new(start, root_hash);

    let root_node = search_space.get_root_node_mut();
    root_node.open((0.).into(), root_h);
    open_list.push(root_node.get_node_id(), root_node.get_f());

    while let Some(node_id) = open_list.pop() {
        let node = search_space.get_node(node_id);
        if node.get_status() == SearchNodeStatus::Closed {
            continue;
        }
        let g_value = node.get_g();

        if let Some(max_cost) = max_cost {
            if g_value > max_cost {
                return (
                    SearchResult::Failure(SearchError::CostCeilingExceeded(max_cost)),
                    statistics,
                );
            }
        }

        if goal.is_satisfied(search_space.get_state(node_id)) {
            let goal_node = search_space.get_node(node_id);
            return (
                SearchResult::Success(search_space.extract_path(goal_node)),
                statistics,
            );
        }

        search_space.get_node_mut(node_id).close();
        statistics.increment_expanded_nodes();

        for neighbour in generator.neighbours(search_space.get_state(node_id)) {
            let state_hash = hasher.hash_state(&neighbour);
            let edge_cost = generator.cost(search_space.get_state(node_id), &neighbour);
            debug_assert!(
                edge_cost.into_inner() >= 0.,
                "Edge costs must be non-negative"
            );
            let tentative_g = g_value + edge_cost;

            let child_id = search_space.insert_or_get_node(neighbour, state_hash, node_id);
            match search_space.get_node(child_id).get_status() {
                SearchNodeStatus::Closed => continue,
                SearchNodeStatus::New => {
                    let h_value = heuristic.evaluate(search_space.get_state(child_id));
                    statistics.increment_evaluated_nodes();
                    statistics.increment_generated_nodes();
                    let child_node = search_space.get_node_mut(child_id);
                    child_node.open(tentative_g, h_value);
                    open_list.push(child_id, child_node.get_f());
                }
                SearchNodeStatus::Open => {
                    let child_node = search_space.get_node_mut(child_id);
                    if tentative_g < child_node.get_g() {
                        child_node.reopen(tentative_g, node_id);
                        statistics.increment_reopened_nodes();
                        open_list.push(child_id, child_node.get_f());
                    }
                }
            }
        }
    }

    debug!(
        registered_nodes = search_space.len(),
        "open list exhausted"
    );
    (
        SearchResult::Failure(SearchError::NoPathFound),
        statistics,
    )
}
