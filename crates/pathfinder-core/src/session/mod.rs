//! Interactive editing session
//!
//! A [`Session`] owns the graph being edited, the start/end annotations and
//! the latest search result. A front end feeds it pointer clicks and reads
//! back roles, highlight classes and stats for drawing.

pub mod highlight;
pub mod roles;

use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::EditorConfig;
use crate::error::Result;
use crate::graph::{find_shortest_path, Edge, Graph, NodeId, SearchResult};

pub use highlight::{EdgePreview, GraphStats, NodeHighlight};
pub use roles::{Role, RoleAnnotations};

/// What a click on the canvas does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    #[default]
    AddNode,
    AddEdge,
    SelectStart,
    SelectEnd,
}

impl EditMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            EditMode::AddNode => "Add Node",
            EditMode::AddEdge => "Add Edge",
            EditMode::SelectStart => "Select Start",
            EditMode::SelectEnd => "Select End",
        }
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Effect of a single click
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    NodeAdded(NodeId),
    EdgeStarted(NodeId),
    EdgeAdded {
        from: NodeId,
        to: NodeId,
        weight: f64,
    },
    EdgeCancelled,
    StartSelected(NodeId),
    EndSelected(NodeId),
    Ignored,
}

/// Graph editor state
#[derive(Debug, Clone)]
pub struct Session {
    graph: Graph,
    config: EditorConfig,
    mode: EditMode,
    next_id: u32,
    roles: RoleAnnotations,
    pending_edge: Option<NodeId>,
    hovered: Option<NodeId>,
    result: Option<SearchResult>,
    canvas_width: f64,
    canvas_height: f64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Session {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            graph: Graph::new(),
            canvas_width: config.canvas_width,
            canvas_height: config.canvas_height,
            config,
            mode: EditMode::default(),
            next_id: 0,
            roles: RoleAnnotations::new(),
            pending_edge: None,
            hovered: None,
            result: None,
        }
    }

    pub fn with_canvas(mut self, width: f64, height: f64) -> Self {
        self.resize(width, height);
        self
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Switch mode, dropping any half-drawn edge
    pub fn set_mode(&mut self, mode: EditMode) {
        debug!(from = %self.mode, to = %mode, "set_mode");
        self.mode = mode;
        self.pending_edge = None;
    }

    pub fn pending_edge(&self) -> Option<NodeId> {
        self.pending_edge
    }

    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    pub fn result(&self) -> Option<&SearchResult> {
        self.result.as_ref()
    }

    pub fn start(&self) -> Option<NodeId> {
        self.roles.start()
    }

    pub fn end(&self) -> Option<NodeId> {
        self.roles.end()
    }

    pub fn role_of(&self, id: NodeId) -> Role {
        self.roles.role_of(id)
    }

    /// First node whose center lies strictly within `node_radius` of the point
    pub fn node_at(&self, x: f64, y: f64) -> Option<NodeId> {
        let radius = self.config.node_radius;
        self.graph
            .nodes()
            .iter()
            .find(|n| (n.x - x).hypot(n.y - y) < radius)
            .map(|n| n.id)
    }

    /// True if the point lies inside the canvas minus the padding margin
    pub fn is_position_valid(&self, x: f64, y: f64) -> bool {
        let pad = self.config.padding;
        x >= pad && x <= self.canvas_width - pad && y >= pad && y <= self.canvas_height - pad
    }

    /// Handle a click according to the current mode
    pub fn click(&mut self, x: f64, y: f64) -> Result<ClickOutcome> {
        let hit = self.node_at(x, y);

        let outcome = match (self.mode, hit) {
            (EditMode::AddNode, None) if self.is_position_valid(x, y) => {
                ClickOutcome::NodeAdded(self.add_node_at(x, y)?)
            }
            (EditMode::AddEdge, Some(id)) => match self.pending_edge.take() {
                None => {
                    self.pending_edge = Some(id);
                    ClickOutcome::EdgeStarted(id)
                }
                Some(from) if from == id => ClickOutcome::EdgeCancelled,
                Some(from) => {
                    let weight = self.connect(from, id)?;
                    ClickOutcome::EdgeAdded {
                        from,
                        to: id,
                        weight,
                    }
                }
            },
            (EditMode::SelectStart, Some(id)) => {
                self.roles.set_start(id);
                ClickOutcome::StartSelected(id)
            }
            (EditMode::SelectEnd, Some(id)) => {
                self.roles.set_end(id);
                ClickOutcome::EndSelected(id)
            }
            _ => ClickOutcome::Ignored,
        };

        debug!(mode = %self.mode, x, y, ?outcome, "click");
        Ok(outcome)
    }

    /// Track the hovered node; returns the edge preview while an edge is pending
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<EdgePreview> {
        self.hovered = self.node_at(x, y);
        if self.mode != EditMode::AddEdge {
            return None;
        }
        let from = self.graph.get_node(self.pending_edge?)?;
        Some(EdgePreview {
            from: (from.x, from.y),
            to: (x, y),
        })
    }

    /// Add a node at the position with the next id and its derived label
    pub fn add_node_at(&mut self, x: f64, y: f64) -> Result<NodeId> {
        let id = NodeId(self.next_id);
        let label = self.config.label_for(id.value());
        self.graph.try_add_node(id, x, y, label)?;
        self.next_id += 1;
        Ok(id)
    }

    /// Join two nodes with an edge weighted by their on-screen distance
    pub fn connect(&mut self, from: NodeId, to: NodeId) -> Result<f64> {
        let position = |id| {
            self.graph
                .get_node(id)
                .map(|n| (n.x, n.y))
                .ok_or(crate::error::PathfinderError::NodeNotFound { id })
        };
        let weight = self.config.edge_weight(position(from)?, position(to)?);
        self.graph.try_add_edge(from, to, weight)?;
        Ok(weight)
    }

    /// Search between the selected start and end and keep the result
    pub fn run_search(&mut self) -> Result<&SearchResult> {
        let (Some(start), Some(end)) = (self.roles.start(), self.roles.end()) else {
            crate::bail_usage!("select both start and end nodes first");
        };

        let result = find_shortest_path(&self.graph, start, end);
        if result.found() {
            info!(%start, %end, distance = %result.distance, "path_found");
        } else {
            info!(%start, %end, "no_path_found");
        }
        Ok(self.result.insert(result))
    }

    /// Reset the graph, annotations, result and id counter
    pub fn clear_all(&mut self) {
        self.graph.clear();
        self.roles.clear();
        self.result = None;
        self.pending_edge = None;
        self.hovered = None;
        self.next_id = 0;
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            node_count: self.graph.node_count(),
            edge_count: self.graph.edge_count(),
        }
    }

    pub fn node_highlight(&self, id: NodeId) -> NodeHighlight {
        match self.roles.role_of(id) {
            Role::Start => return NodeHighlight::Start,
            Role::End => return NodeHighlight::End,
            Role::Normal => {}
        }
        match &self.result {
            Some(result) if result.is_visited(id) && result.on_path(id) => NodeHighlight::OnPath,
            Some(result) if result.is_visited(id) => NodeHighlight::Visited,
            _ => NodeHighlight::Unvisited,
        }
    }

    pub fn edge_on_path(&self, edge: &Edge) -> bool {
        self.result
            .as_ref()
            .is_some_and(|result| result.edge_on_path(edge))
    }
}
