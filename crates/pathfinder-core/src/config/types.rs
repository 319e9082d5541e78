//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Editor geometry and edge-weight configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Hit-test radius around a node's center
    #[serde(default = "default_node_radius")]
    pub node_radius: f64,

    /// Margin on every canvas side where nodes may not be placed
    #[serde(default = "default_padding")]
    pub padding: f64,

    /// Euclidean distance divided by this value gives an edge weight
    #[serde(default = "default_weight_scale")]
    pub weight_scale: f64,

    /// Label of the node with id 0; later ids count up from here
    #[serde(default = "default_label_base")]
    pub label_base: char,

    #[serde(default = "default_canvas_width")]
    pub canvas_width: f64,

    #[serde(default = "default_canvas_height")]
    pub canvas_height: f64,
}

fn default_node_radius() -> f64 {
    20.0
}

fn default_padding() -> f64 {
    40.0
}

fn default_weight_scale() -> f64 {
    10.0
}

fn default_label_base() -> char {
    'A'
}

fn default_canvas_width() -> f64 {
    800.0
}

fn default_canvas_height() -> f64 {
    600.0
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            node_radius: default_node_radius(),
            padding: default_padding(),
            weight_scale: default_weight_scale(),
            label_base: default_label_base(),
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
        }
    }
}
