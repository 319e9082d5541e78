use super::{hop_weight, label_of};
use pathfinder_core::error::Result;
use pathfinder_core::graph::{Graph, NodeId, SearchResult};

/// Build the JSON document for a search result
pub fn path_json(
    graph: &Graph,
    from: NodeId,
    to: NodeId,
    result: &SearchResult,
) -> Result<serde_json::Value> {
    let mut json = serde_json::to_value(result)?;

    let labels: Vec<String> = result.path.iter().map(|id| label_of(graph, *id)).collect();
    let hops: Vec<serde_json::Value> = result
        .path
        .windows(2)
        .map(|pair| {
            serde_json::json!({
                "from": pair[0],
                "to": pair[1],
                "weight": hop_weight(graph, pair[0], pair[1]),
            })
        })
        .collect();

    if let Some(obj_mut) = json.as_object_mut() {
        obj_mut.insert("from".to_string(), serde_json::json!(from));
        obj_mut.insert("to".to_string(), serde_json::json!(to));
        obj_mut.insert("found".to_string(), serde_json::json!(result.found()));
        obj_mut.insert("labels".to_string(), serde_json::json!(labels));
        obj_mut.insert(
            "path_length".to_string(),
            serde_json::json!(result.path_length()),
        );
        obj_mut.insert("hops".to_string(), serde_json::json!(hops));
    }

    Ok(json)
}

/// Output a search result in JSON format
pub fn output_path_json(
    graph: &Graph,
    from: NodeId,
    to: NodeId,
    result: &SearchResult,
) -> Result<()> {
    let json = path_json(graph, from, to, result)?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
