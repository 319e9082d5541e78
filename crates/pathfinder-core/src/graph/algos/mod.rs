//! Graph algorithm implementations
//!
//! - `dijkstra`: Weighted shortest path finding
//! - `path`: Predecessor-chain path reconstruction

pub mod dijkstra;
pub mod path;

pub use dijkstra::{find_shortest_path, ShortestPathSearch};
pub use path::reconstruct_path;
