//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, Commands, GraphArgs};
use bidijkstra_core::config::Config;
use bidijkstra_core::error::Result;
use bidijkstra_core::format::OutputFormat;
use bidijkstra_core::graph::EngineKind;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a Config, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// `--format` wins over the configured format
    pub fn format(&self) -> OutputFormat {
        self.cli.format.unwrap_or(self.config.format)
    }

    /// `--engine` wins over the configured engine
    pub fn engine(&self, args: &GraphArgs) -> EngineKind {
        args.engine.unwrap_or(self.config.engine)
    }

    pub fn undirected(&self, args: &GraphArgs) -> bool {
        args.undirected || self.config.undirected
    }

    pub fn bench_iterations(&self, requested: Option<u32>) -> u32 {
        requested.unwrap_or(self.config.bench.iterations)
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
        println!("bidijkstra {}", env!("CARGO_PKG_VERSION"));
        println!("Run `bidijkstra --help` for usage.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Path(args) => crate::commands::path::execute(ctx, args),
            Commands::Distance(args) => crate::commands::distance::execute(ctx, args),
            Commands::All(args) => crate::commands::all::execute(ctx, args),
            Commands::Demo => crate::commands::demo::execute(ctx),
            Commands::Bench(args) => crate::commands::bench::execute(ctx, args),
        }
    }
}
