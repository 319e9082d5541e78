use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::PathfinderError;

/// Caller-assigned node identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        NodeId(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = PathfinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(NodeId)
            .map_err(|_| PathfinderError::invalid_value("node id", s))
    }
}

/// A point in the graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    pub label: String,
}

/// Undirected weighted connection between two nodes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

impl Edge {
    /// True if this edge joins `a` and `b` in either orientation
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// One adjacency entry: a node reachable over a single edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbor {
    pub node: NodeId,
    pub weight: f64,
}

/// Accumulated path cost. Unreachable nodes sit at [`Distance::INFINITY`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);
    pub const INFINITY: Distance = Distance(f64::INFINITY);

    pub fn new(cost: f64) -> Self {
        Distance(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Total order over distances, used by the frontier heap
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::INFINITY
    }
}

impl std::ops::Add<f64> for Distance {
    type Output = Self;

    fn add(self, weight: f64) -> Self {
        Distance(self.0 + weight)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_finite() {
            write!(f, "{:.2}", self.0)
        } else {
            write!(f, "∞")
        }
    }
}

// JSON has no infinity; unreachable distances serialize as null.
impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_none()
        }
    }
}

fn serialize_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64() * 1000.0)
}

/// Outcome of one shortest-path search
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    /// Node ids from start to end; empty when the end is unreachable
    pub path: Vec<NodeId>,
    pub distance: Distance,
    /// Finalized nodes, in the order they were finalized
    pub visited: Vec<NodeId>,
    #[serde(rename = "execution_time_ms", serialize_with = "serialize_millis")]
    pub execution_time: Duration,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges along the path
    pub fn path_length(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn is_visited(&self, id: NodeId) -> bool {
        self.visited.contains(&id)
    }

    pub fn on_path(&self, id: NodeId) -> bool {
        self.path.contains(&id)
    }

    /// True if `edge` joins two consecutive path nodes
    pub fn edge_on_path(&self, edge: &Edge) -> bool {
        self.path
            .windows(2)
            .any(|pair| edge.connects(pair[0], pair[1]))
    }

    /// Distance as shown to users: two decimals, or `∞`
    pub fn display_distance(&self) -> String {
        self.distance.to_string()
    }

    /// Execution time in milliseconds with three decimals
    pub fn display_time(&self) -> String {
        format!("{:.3} ms", self.execution_time.as_secs_f64() * 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(path: &[u32], distance: f64) -> SearchResult {
        SearchResult {
            path: path.iter().copied().map(NodeId).collect(),
            distance: Distance::new(distance),
            visited: path.iter().copied().map(NodeId).collect(),
            execution_time: Duration::from_micros(1500),
        }
    }

    #[test]
    fn test_node_id_parse() {
        assert_eq!("12".parse::<NodeId>().unwrap(), NodeId(12));
        assert_eq!(" 3 ".parse::<NodeId>().unwrap(), NodeId(3));
        assert!("-1".parse::<NodeId>().is_err());
        assert!("a".parse::<NodeId>().is_err());
    }

    #[test]
    fn test_distance_addition() {
        let d = Distance::ZERO + 4.0 + 3.0;
        assert_eq!(d.value(), 7.0);
        assert!(d.is_finite());
    }

    #[test]
    fn test_distance_infinity_stays_infinite() {
        let d = Distance::INFINITY + 5.0;
        assert!(!d.is_finite());
        assert!(Distance::new(1e12) < Distance::INFINITY);
    }

    #[test]
    fn test_distance_display() {
        assert_eq!(Distance::new(7.0).to_string(), "7.00");
        assert_eq!(Distance::new(2.345).to_string(), "2.35");
        assert_eq!(Distance::INFINITY.to_string(), "∞");
    }

    #[test]
    fn test_distance_serializes_infinity_as_null() {
        let json = serde_json::to_value(Distance::INFINITY).unwrap();
        assert!(json.is_null());
        let json = serde_json::to_value(Distance::new(7.0)).unwrap();
        assert_eq!(json, serde_json::json!(7.0));
    }

    #[test]
    fn test_edge_connects_either_orientation() {
        let edge = Edge {
            from: NodeId(1),
            to: NodeId(2),
            weight: 3.0,
        };
        assert!(edge.connects(NodeId(1), NodeId(2)));
        assert!(edge.connects(NodeId(2), NodeId(1)));
        assert!(!edge.connects(NodeId(1), NodeId(3)));
    }

    #[test]
    fn test_search_result_helpers() {
        let r = result(&[0, 1, 2], 7.0);
        assert!(r.found());
        assert_eq!(r.path_length(), 2);
        assert!(r.on_path(NodeId(1)));
        assert!(r.edge_on_path(&Edge {
            from: NodeId(2),
            to: NodeId(1),
            weight: 3.0,
        }));
        assert!(!r.edge_on_path(&Edge {
            from: NodeId(0),
            to: NodeId(2),
            weight: 10.0,
        }));
        assert_eq!(r.display_distance(), "7.00");
        assert_eq!(r.display_time(), "1.500 ms");
    }

    #[test]
    fn test_search_result_json_shape() {
        let json = serde_json::to_value(result(&[0, 1], 4.0)).unwrap();
        assert_eq!(json["path"], serde_json::json!([0, 1]));
        assert_eq!(json["distance"], serde_json::json!(4.0));
        assert!(json["execution_time_ms"].is_number());
    }
}
