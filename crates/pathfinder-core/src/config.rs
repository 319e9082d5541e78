//! Editor configuration for pathfinder
//!
//! Read from `config.toml` in the user config directory; every field has a
//! default, so a missing file or a partial one is fine.

pub mod global;
pub mod types;

pub use global::CONFIG_DIR_ENV_VAR;
pub use types::EditorConfig;

use crate::error::Result;

impl EditorConfig {
    /// Reject values that would make hit testing or weighting meaningless
    pub fn validate(&self) -> Result<()> {
        if !(self.node_radius.is_finite() && self.node_radius > 0.0) {
            crate::bail_invalid!("node_radius", self.node_radius);
        }
        if !(self.padding.is_finite() && self.padding >= 0.0) {
            crate::bail_invalid!("padding", self.padding);
        }
        if !(self.weight_scale.is_finite() && self.weight_scale > 0.0) {
            crate::bail_invalid!("weight_scale", self.weight_scale);
        }
        if !(self.canvas_width.is_finite() && self.canvas_width > 0.0) {
            crate::bail_invalid!("canvas_width", self.canvas_width);
        }
        if !(self.canvas_height.is_finite() && self.canvas_height > 0.0) {
            crate::bail_invalid!("canvas_height", self.canvas_height);
        }
        Ok(())
    }

    /// Edge weight for two positions: Euclidean distance over `weight_scale`, rounded
    pub fn edge_weight(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        let dx = to.0 - from.0;
        let dy = to.1 - from.1;
        (dx.hypot(dy) / self.weight_scale).round()
    }

    /// Display label for a node id: `label_base` shifted by the id
    pub fn label_for(&self, id: u32) -> String {
        (self.label_base as u32)
            .checked_add(id)
            .and_then(char::from_u32)
            .map(|c| c.to_string())
            .unwrap_or_else(|| id.to_string())
    }
}
