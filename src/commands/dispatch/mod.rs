//! Command dispatch logic for bidijkstra

use std::time::Instant;

use crate::cli::Cli;
use bidijkstra_core::config::Config;
use bidijkstra_core::error::Result;
use tracing::debug;

mod command;
mod macros;

pub(crate) use command::CommandContext;
use command::{Command, NoCommand};
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, config: &Config, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, config, start);

    debug!(format = %ctx.format(), "resolve_settings");

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
