//! Pathfinder Core Library
//!
//! Graph model, Dijkstra shortest-path search and the editing session that
//! drives them.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod session;
