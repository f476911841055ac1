use crate::search::SearchNode;

/// Unique identifier of a search node within one query. Ids double as indices
/// into the node and state stores of the search space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

/// Sentinel parent id of the root node.
pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// Hands out node ids starting from 0, in creation order. Each search query
/// owns its own factory, so ids never leak across queries.
#[derive(Debug)]
pub struct SearchNodeFactory {
    next_id: usize,
}

impl SearchNodeFactory {
    pub fn new() -> Self {
        Self { next_id: 0 }
    }

    pub fn new_root_node(&mut self) -> SearchNode {
        SearchNode::new_without_parent(self.next_node_id())
    }

    pub fn new_node(&mut self, parent_id: NodeId) -> SearchNode {
        SearchNode::new_with_parent(self.next_node_id(), parent_id)
    }

    fn next_node_id(&mut self) -> NodeId {
        let node_id = NodeId(self.next_id);
        self.next_id += 1;
        node_id
    }
}
