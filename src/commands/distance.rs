//! `bidijkstra distance` command

use serde_json::json;

use super::dispatch::{trace_command, CommandContext};
use super::graph::{build_graph, check_nodes, engine};
use super::output::print_json;
use crate::cli::PairArgs;
use bidijkstra_core::error::Result;
use bidijkstra_core::format::{OutputFormat, UNREACHABLE_DISTANCE};

/// Execute the distance command
pub fn execute(ctx: &CommandContext, args: &PairArgs) -> Result<()> {
    let graph = build_graph(ctx, &args.graph)?;
    check_nodes(&graph, &[args.source, args.target])?;
    trace_command!(ctx.cli, ctx.start, "build_graph");

    let kind = ctx.engine(&args.graph);
    let distance = engine(kind, &graph)?.shortest_distance(args.source, args.target);
    trace_command!(ctx.cli, ctx.start, "query");

    match ctx.format() {
        OutputFormat::Json => print_json(&json!({
            "source": args.source,
            "target": args.target,
            "engine": kind,
            "distance": distance,
        })),
        OutputFormat::Human => {
            match distance {
                Some(distance) => println!("{}", distance),
                None => println!("{}", UNREACHABLE_DISTANCE),
            }
            Ok(())
        }
    }
}
