//! Pathfinder - shortest paths over weighted undirected graphs
//!
//! Builds a graph from command-line node and edge specs, runs a Dijkstra
//! search and prints the result.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use pathfinder_core::error::{ExitCode as PathfinderExitCode, PathfinderError};
use pathfinder_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version go to stdout; only real parse failures get the
        // JSON envelope, since `--format` may not have been parsed yet.
        Err(err) if err.use_stderr() && argv_requests_json() => {
            let error = PathfinderError::UsageError(err.to_string());
            eprintln!("{}", error.to_json());
            return ExitCode::from(error.exit_code() as u8);
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(PathfinderExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    let args: Vec<String> = env::args().skip(1).collect();
    args.iter().any(|a| a == "--format=json")
        || args.windows(2).any(|w| w[0] == "--format" && w[1] == "json")
}
