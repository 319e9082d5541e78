//! CLI commands for pathfinder

pub mod demo;
pub mod dispatch;
pub mod path;
