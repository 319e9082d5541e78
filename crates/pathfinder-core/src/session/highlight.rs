use serde::Serialize;

/// How a renderer should paint a node after a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeHighlight {
    Start,
    End,
    /// Finalized and part of the shortest path
    OnPath,
    /// Finalized but off the path
    Visited,
    Unvisited,
}

/// Node and edge totals shown next to the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
}

/// Rubber-band line from the pending edge start to the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgePreview {
    pub from: (f64, f64),
    pub to: (f64, f64),
}
