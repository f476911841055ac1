use crate::search::{HeuristicValue, NodeId, NO_NODE};
use ordered_float::Float;

/// The status of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// New node, not yet opened
    New,
    /// Node is in the open list
    Open,
    /// Node is in the closed list
    Closed,
}

/// A [`SearchNode`] is a node in the search space. It carries the search-side
/// bookkeeping for one state: the cheapest known cost to reach it, the
/// heuristic estimate of the remaining cost, and the parent it was reached
/// from. Nodes are owned by the search space of a single query and never
/// exposed to callers.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Unique identifier of the node
    node_id: NodeId,
    /// Status of the node
    status: SearchNodeStatus,
    /// F-value of the node, its priority in the open list
    f: HeuristicValue,
    /// G-value of the node, the cheapest known cost to reach it
    g: HeuristicValue,
    /// H-value of the node, the heuristic estimate of the remaining cost
    h: HeuristicValue,
    /// Parent node, [`NO_NODE`] for the root
    parent_id: NodeId,
}

impl SearchNode {
    /// Create a new search node with no parent. This should only be used for
    /// the root node of the search space. For non-root nodes see
    /// [`SearchNode::new_with_parent`].
    pub fn new_without_parent(node_id: NodeId) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::New,
            f: HeuristicValue::infinity(),
            g: HeuristicValue::infinity(),
            h: HeuristicValue::infinity(),
            parent_id: NO_NODE,
        }
    }

    /// Create a new search node with a parent. This should be used for all
    /// nodes that are not the root node.
    pub fn new_with_parent(node_id: NodeId, parent_id: NodeId) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::New,
            f: HeuristicValue::infinity(),
            g: HeuristicValue::infinity(),
            h: HeuristicValue::infinity(),
            parent_id,
        }
    }

    pub fn open(&mut self, g: HeuristicValue, h: HeuristicValue) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::New,
            "Node must be new to open it"
        );
        self.status = SearchNodeStatus::Open;
        self.g = g;
        self.h = h;
        self.f = g + h;
    }

    /// Redirect an open node through a cheaper route. The heuristic value is
    /// a function of the state and does not move; g, f and the parent do.
    pub fn reopen(&mut self, g: HeuristicValue, parent_id: NodeId) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to reopen it"
        );
        debug_assert!(g < self.g, "Reopening requires a strictly cheaper route");
        self.g = g;
        self.f = g + self.h;
        self.parent_id = parent_id;
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_f(&self) -> HeuristicValue {
        self.f
    }

    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }
}
