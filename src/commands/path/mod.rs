//! Path command

pub mod human;
pub mod json;
pub mod records;

use std::time::Instant;

use crate::cli::parse::{EdgeSpec, NodeSpec};
use crate::cli::{OutputFormat, PathArgs};
use crate::commands::dispatch::CommandContext;
use pathfinder_core::config::EditorConfig;
use pathfinder_core::error::{PathfinderError, Result};
use pathfinder_core::graph::{find_shortest_path, Graph, NodeId};
use pathfinder_core::trace_time;

/// Execute the path command
pub fn execute(ctx: &CommandContext, args: &PathArgs) -> Result<()> {
    let start = Instant::now();
    let graph = build_graph(&ctx.config, &args.nodes, &args.edges)?;
    trace_time!(start, "build_graph", nodes = graph.node_count(), edges = graph.edge_count());

    for id in [args.from, args.to] {
        if !graph.contains(id) {
            return Err(PathfinderError::NodeNotFound { id });
        }
    }

    search_and_output(ctx, &graph, args.from, args.to)
}

/// Build a graph from command-line specs using the validating operations
pub fn build_graph(config: &EditorConfig, nodes: &[NodeSpec], edges: &[EdgeSpec]) -> Result<Graph> {
    let mut graph = Graph::new();

    for node in nodes {
        let label = node
            .label
            .clone()
            .unwrap_or_else(|| config.label_for(node.id.value()));
        graph.try_add_node(node.id, node.x, node.y, label)?;
    }

    for edge in edges {
        let weight = match edge.weight {
            Some(weight) => weight,
            None => {
                let position = |id| {
                    graph
                        .get_node(id)
                        .map(|n| (n.x, n.y))
                        .ok_or(PathfinderError::NodeNotFound { id })
                };
                config.edge_weight(position(edge.from)?, position(edge.to)?)
            }
        };
        graph.try_add_edge(edge.from, edge.to, weight)?;
    }

    Ok(graph)
}

/// Run one search and print it in the requested format
#[tracing::instrument(skip(ctx, graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn search_and_output(
    ctx: &CommandContext,
    graph: &Graph,
    from: NodeId,
    to: NodeId,
) -> Result<()> {
    let result = find_shortest_path(graph, from, to);

    tracing::debug!(elapsed = ?ctx.start.elapsed(), "search_complete");

    match ctx.cli.format {
        OutputFormat::Json => json::output_path_json(graph, from, to, &result)?,
        OutputFormat::Human => human::output_path_human(ctx.cli, graph, from, to, &result),
        OutputFormat::Records => records::output_path_records(graph, from, to, &result),
    }

    Ok(())
}

/// Display label for a node, falling back to its id
pub fn label_of(graph: &Graph, id: NodeId) -> String {
    graph
        .get_node(id)
        .map(|n| n.label.clone())
        .unwrap_or_else(|| id.to_string())
}

/// Cheapest weight among the edges joining `a` and `b`
pub fn hop_weight(graph: &Graph, a: NodeId, b: NodeId) -> f64 {
    graph
        .neighbors(a)
        .iter()
        .filter(|n| n.node == b)
        .map(|n| n.weight)
        .fold(f64::INFINITY, f64::min)
}
