use crate::graph::StateHash;
use crate::search::{NodeId, Path, PathNode, SearchNode, SearchNodeFactory, NO_NODE};
use segvec::{Linear, SegVec};
use std::collections::HashMap;

/// A [`SearchSpace`] manages the states and nodes discovered during one
/// query. States are abstract here: the space only needs their caller-computed
/// hash, which doubles as the vertex identity. Registering two states with the
/// same hash yields a single node, which is how large state spaces are
/// deliberately collapsed.
#[derive(Debug)]
pub struct SearchSpace<S> {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode, Linear>,
    states: SegVec<S, Linear>,
    registered_nodes: HashMap<StateHash, NodeId>,
    node_factory: SearchNodeFactory,
}

impl<S> SearchSpace<S> {
    pub fn new(initial_state: S, initial_hash: StateHash) -> Self {
        let mut node_factory = SearchNodeFactory::new();
        let mut nodes = SegVec::new();
        let mut states = SegVec::new();
        let mut registered_nodes = HashMap::new();

        let root_node = node_factory.new_root_node();
        let root_node_id = root_node.get_node_id();
        registered_nodes.insert(initial_hash, root_node_id);
        nodes.push(root_node);
        states.push(initial_state);

        Self {
            root_node_id,
            nodes,
            states,
            registered_nodes,
            node_factory,
        }
    }

    /// Return the node registered under `state_hash`, creating it as a child
    /// of `parent_id` if the hash is new. An existing node keeps its state,
    /// parent and costs; deciding whether a new route improves it is the
    /// caller's job.
    pub fn insert_or_get_node(
        &mut self,
        state: S,
        state_hash: StateHash,
        parent_id: NodeId,
    ) -> NodeId {
        match self.registered_nodes.get(&state_hash) {
            Some(&node_id) => node_id,
            None => {
                let new_node = self.node_factory.new_node(parent_id);
                let node_id = new_node.get_node_id();
                self.nodes.push(new_node);
                self.states.push(state);
                self.registered_nodes.insert(state_hash, node_id);
                node_id
            }
        }
    }

    #[inline(always)]
    pub fn get_root_node_mut(&mut self) -> &mut SearchNode {
        self.get_node_mut(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode {
        self.nodes.get_mut(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &S {
        self.states.get(node_id.id()).expect("Invalid node id")
    }

    /// Number of distinct vertices registered so far.
    pub fn len(&self) -> usize {
        self.registered_nodes.len()
    }
}

impl<S: Clone> SearchSpace<S> {
    /// Reconstruct the start-to-goal path by walking parent links back from
    /// the goal node. The root is included, so the result is never empty.
    pub fn extract_path(&self, goal_node: &SearchNode) -> Path<S> {
        let mut nodes = vec![];
        let mut current_node = goal_node;
        loop {
            nodes.push(PathNode::new(
                self.get_state(current_node.get_node_id()).clone(),
                current_node.get_g(),
            ));
            if NO_NODE == current_node.get_parent_id() {
                break;
            }
            current_node = self.get_node(current_node.get_parent_id());
        }
        nodes.reverse();
        Path::new(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_hashes_collapse_into_one_node() {
        let mut space = SearchSpace::new("start", "a".to_string());
        let root_id = space.get_node(space.root_node_id).get_node_id();

        let first = space.insert_or_get_node("same vertex", "b".to_string(), root_id);
        let second = space.insert_or_get_node("other value, same hash", "b".to_string(), root_id);

        assert_eq!(first, second);
        assert_eq!(space.len(), 2);
        assert_eq!(*space.get_state(first), "same vertex");
    }

    #[test]
    fn extract_path_walks_back_to_the_root() {
        let mut space = SearchSpace::new(0, "0".to_string());
        let root_id = space.root_node_id;
        space.get_root_node_mut().open((0.).into(), (2.).into());

        let mid_id = space.insert_or_get_node(1, "1".to_string(), root_id);
        space.get_node_mut(mid_id).open((1.).into(), (1.).into());
        let goal_id = space.insert_or_get_node(2, "2".to_string(), mid_id);
        space.get_node_mut(goal_id).open((2.).into(), (0.).into());

        let goal_node = space.get_node(goal_id).clone();
        let path = space.extract_path(&goal_node);

        let states: Vec<_> = path.nodes().iter().map(|node| *node.state()).collect();
        assert_eq!(states, vec![0, 1, 2]);
        assert_eq!(path.total_cost(), crate::search::HeuristicValue::from(2.));
    }
}
