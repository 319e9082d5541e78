//! Path reconstruction from predecessor pointers

use std::collections::HashMap;

use crate::graph::types::NodeId;

/// Walk predecessors back from `to`; empty unless the walk reaches `from`
pub fn reconstruct_path(
    from: NodeId,
    to: NodeId,
    predecessors: &HashMap<NodeId, NodeId>,
) -> Vec<NodeId> {
    let mut path = vec![to];
    let mut current = to;

    while current != from {
        match predecessors.get(&current) {
            Some(&pred) => {
                current = pred;
                path.push(current);
            }
            None => break,
        }
    }

    if current != from {
        return Vec::new();
    }

    path.reverse();
    path
}
