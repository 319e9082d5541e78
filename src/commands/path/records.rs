use super::{hop_weight, label_of};
use pathfinder_core::graph::{Graph, NodeId, SearchResult};

fn escape_quotes(s: &str) -> String {
    s.replace('"', "\\\"")
}

/// Build record lines: one header, then `N` per path node and `E` per hop
pub fn path_records(graph: &Graph, from: NodeId, to: NodeId, result: &SearchResult) -> Vec<String> {
    let distance = if result.distance.is_finite() {
        format!("{:.2}", result.distance.value())
    } else {
        "inf".to_string()
    };

    let mut lines = vec![format!(
        "H pathfinder=1 records=1 mode=path from={} to={} found={} length={} distance={} visited={}",
        from,
        to,
        result.found(),
        result.path_length(),
        distance,
        result.visited.len()
    )];

    for id in &result.path {
        lines.push(format!(
            "N {} \"{}\"",
            id,
            escape_quotes(&label_of(graph, *id))
        ));
    }

    for pair in result.path.windows(2) {
        lines.push(format!(
            "E {} {} {}",
            pair[0],
            pair[1],
            hop_weight(graph, pair[0], pair[1])
        ));
    }

    lines
}

/// Output a search result in records format
pub fn output_path_records(graph: &Graph, from: NodeId, to: NodeId, result: &SearchResult) {
    for line in path_records(graph, from, to, result) {
        println!("{}", line);
    }
}
