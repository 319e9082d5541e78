use super::label_of;
use crate::cli::Cli;
use pathfinder_core::graph::{Graph, NodeId, SearchResult};

fn describe(graph: &Graph, id: NodeId) -> String {
    format!("{} ({})", label_of(graph, id), id)
}

/// Output a search result in human-readable format
pub fn output_path_human(
    cli: &Cli,
    graph: &Graph,
    from: NodeId,
    to: NodeId,
    result: &SearchResult,
) {
    if !result.found() {
        if !cli.quiet {
            println!(
                "No path found from {} to {}",
                describe(graph, from),
                describe(graph, to)
            );
            println!("Visited: {} nodes", result.visited.len());
        }
        return;
    }

    let steps: Vec<String> = result.path.iter().map(|id| describe(graph, *id)).collect();
    println!("Path: {}", steps.join(" -> "));
    println!("Distance: {}", result.display_distance());

    let hops = result.path_length();
    println!(
        "Path length: {} {}",
        hops,
        if hops == 1 { "hop" } else { "hops" }
    );

    if !cli.quiet {
        println!("Visited: {} nodes", result.visited.len());
        println!("Time: {}", result.display_time());
    }
}
