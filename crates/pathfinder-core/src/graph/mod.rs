//! Graph model and path-finding operations
//!
//! - `Graph`: nodes, undirected weighted edges and an adjacency index
//! - Dijkstra search for minimum-weight paths
//! - Graph provider trait for pluggable adjacency sources

pub mod algos;
pub mod model;
pub mod traversal;
pub mod types;

pub use algos::{find_shortest_path, ShortestPathSearch};
pub use model::Graph;
pub use traversal::GraphProvider;
pub use types::{Distance, Edge, Neighbor, Node, NodeId, SearchResult};
