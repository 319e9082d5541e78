use super::parse::{parse_edge_spec, parse_node_id, parse_node_spec, EdgeSpec, NodeSpec};
use clap::Args;
use pathfinder_core::graph::NodeId;

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Start node id
    #[arg(value_parser = parse_node_id)]
    pub from: NodeId,

    /// End node id
    #[arg(value_parser = parse_node_id)]
    pub to: NodeId,

    /// Node as ID:X,Y or ID:X,Y:LABEL (can be specified multiple times)
    #[arg(long = "node", short = 'n', value_parser = parse_node_spec, action = clap::ArgAction::Append)]
    pub nodes: Vec<NodeSpec>,

    /// Edge as FROM:TO or FROM:TO:WEIGHT; without a weight it is derived
    /// from the node positions (can be specified multiple times)
    #[arg(long = "edge", short = 'e', value_parser = parse_edge_spec, action = clap::ArgAction::Append)]
    pub edges: Vec<EdgeSpec>,
}
