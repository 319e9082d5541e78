use crate::graph::types::{Neighbor, NodeId};
use crate::graph::Graph;

/// Trait for providing graph adjacency to search algorithms
pub trait GraphProvider {
    /// Every identifier the graph knows about, nodes and adjacency keys alike
    fn node_ids(&self) -> Vec<NodeId>;
    fn neighbors(&self, id: NodeId) -> &[Neighbor];
}

impl GraphProvider for Graph {
    fn node_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.nodes().iter().map(|n| n.id).collect();
        ids.extend(self.adjacency().keys().copied());
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    fn neighbors(&self, id: NodeId) -> &[Neighbor] {
        Graph::neighbors(self, id)
    }
}
