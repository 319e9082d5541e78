//! CLI argument parsing for pathfinder
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::PathArgs;
pub use output::OutputFormat;

/// Pathfinder - shortest paths over weighted undirected graphs
#[derive(Parser, Debug)]
#[command(name = "pathfinder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "pathfinder_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Editor config file (defaults to the user config directory)
    #[arg(long, global = true, env = "PATHFINDER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the shortest path between two nodes
    Path(PathArgs),

    /// Run the three-node reference graph (A-B 4, B-C 3, A-C 10) from A to C
    Demo,
}
