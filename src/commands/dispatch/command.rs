//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands::{demo, path};
use pathfinder_core::config::EditorConfig;
use pathfinder_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: EditorConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    /// Resolve the editor config: `--config` file, else the user config
    pub fn load(cli: &'a Cli, start: Instant) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => EditorConfig::load_from(path)?,
            None => EditorConfig::load()?,
        };
        Ok(Self { cli, config, start })
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("pathfinder {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest paths over weighted undirected graphs.");
        println!();
        println!("Run `pathfinder --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Path(args) => path::execute(ctx, args),
            Commands::Demo => demo::execute(ctx),
        }
    }
}
