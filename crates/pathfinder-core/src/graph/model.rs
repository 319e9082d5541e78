//! Mutable graph container with an adjacency index

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::error::{PathfinderError, Result};
use crate::graph::types::{Edge, Neighbor, Node, NodeId};

/// Nodes, edges and the derived adjacency index.
///
/// The `add_*` operations trust the caller: duplicate ids and edges between
/// unknown nodes are accepted as-is. The `try_add_*` variants validate first.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    adjacency: BTreeMap<NodeId, Vec<Neighbor>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node and reset its adjacency entry.
    ///
    /// A duplicate `id` yields a second stored node; [`Graph::get_node`]
    /// keeps resolving to the first one.
    pub fn add_node(&mut self, id: NodeId, x: f64, y: f64, label: impl Into<String>) -> &Node {
        let label = label.into();
        trace!(%id, x, y, label = %label, "add_node");
        self.adjacency.insert(id, Vec::new());
        self.nodes.push(Node { id, x, y, label });
        &self.nodes[self.nodes.len() - 1]
    }

    /// Append an undirected edge, creating adjacency entries for unknown endpoints
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) -> &Edge {
        trace!(%from, %to, weight, "add_edge");
        self.edges.push(Edge { from, to, weight });
        self.adjacency.entry(from).or_default().push(Neighbor {
            node: to,
            weight,
        });
        self.adjacency.entry(to).or_default().push(Neighbor {
            node: from,
            weight,
        });
        &self.edges[self.edges.len() - 1]
    }

    /// Add a node, rejecting duplicate ids and non-finite coordinates
    pub fn try_add_node(
        &mut self,
        id: NodeId,
        x: f64,
        y: f64,
        label: impl Into<String>,
    ) -> Result<&Node> {
        if self.get_node(id).is_some() {
            return Err(PathfinderError::already_exists("node", id));
        }
        if !x.is_finite() || !y.is_finite() {
            crate::bail_invalid!("node position", format!("({}, {})", x, y));
        }
        Ok(self.add_node(id, x, y, label))
    }

    /// Add an edge, rejecting unknown endpoints and invalid weights
    pub fn try_add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) -> Result<&Edge> {
        for id in [from, to] {
            if self.get_node(id).is_none() {
                return Err(PathfinderError::NodeNotFound { id });
            }
        }
        if !weight.is_finite() || weight < 0.0 {
            crate::bail_invalid!("edge weight", weight);
        }
        Ok(self.add_edge(from, to, weight))
    }

    /// First stored node with the given id
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get_node(id).is_some()
    }

    /// Reset to the empty graph
    pub fn clear(&mut self) {
        debug!(
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "clear_graph"
        );
        self.nodes.clear();
        self.edges.clear();
        self.adjacency.clear();
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn adjacency(&self) -> &BTreeMap<NodeId, Vec<Neighbor>> {
        &self.adjacency
    }

    /// Adjacency list for `id`, empty when unknown
    pub fn neighbors(&self, id: NodeId) -> &[Neighbor] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}
