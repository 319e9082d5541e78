//! Start/end role annotations layered over node ids

use serde::Serialize;

use crate::graph::NodeId;

/// Presentation role of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Normal,
    Start,
    End,
}

/// Which nodes are the current start and end.
///
/// A node holds at most one role; the latest assignment wins and takes the
/// node away from the other role.
#[derive(Debug, Clone, Default)]
pub struct RoleAnnotations {
    start: Option<NodeId>,
    end: Option<NodeId>,
}

impl RoleAnnotations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<NodeId> {
        self.start
    }

    pub fn end(&self) -> Option<NodeId> {
        self.end
    }

    pub fn set_start(&mut self, id: NodeId) {
        if self.end == Some(id) {
            self.end = None;
        }
        self.start = Some(id);
    }

    pub fn set_end(&mut self, id: NodeId) {
        if self.start == Some(id) {
            self.start = None;
        }
        self.end = Some(id);
    }

    pub fn role_of(&self, id: NodeId) -> Role {
        if self.start == Some(id) {
            Role::Start
        } else if self.end == Some(id) {
            Role::End
        } else {
            Role::Normal
        }
    }

    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }
}
