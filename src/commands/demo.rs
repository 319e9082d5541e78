//! Demo command: the three-node reference graph

use crate::commands::dispatch::CommandContext;
use crate::commands::path::search_and_output;
use pathfinder_core::error::Result;
use pathfinder_core::graph::{Graph, NodeId};

/// A(0)-B(1) 4, B-C(2) 3, A-C 10
pub fn reference_graph() -> Result<Graph> {
    let mut graph = Graph::new();
    graph.try_add_node(NodeId(0), 100.0, 100.0, "A")?;
    graph.try_add_node(NodeId(1), 300.0, 100.0, "B")?;
    graph.try_add_node(NodeId(2), 200.0, 250.0, "C")?;
    graph.try_add_edge(NodeId(0), NodeId(1), 4.0)?;
    graph.try_add_edge(NodeId(1), NodeId(2), 3.0)?;
    graph.try_add_edge(NodeId(0), NodeId(2), 10.0)?;
    Ok(graph)
}

/// Execute the demo command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let graph = reference_graph()?;
    search_and_output(ctx, &graph, NodeId(0), NodeId(2))
}
