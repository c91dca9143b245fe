//! `bidijkstra path` command

use serde_json::json;

use super::dispatch::{trace_command, CommandContext};
use super::graph::{build_graph, check_nodes, engine};
use super::output::print_json;
use crate::cli::PairArgs;
use bidijkstra_core::error::Result;
use bidijkstra_core::format::{format_costs, format_path, OutputFormat};
use bidijkstra_core::graph::Route;

/// Execute the path command
pub fn execute(ctx: &CommandContext, args: &PairArgs) -> Result<()> {
    let graph = build_graph(ctx, &args.graph)?;
    check_nodes(&graph, &[args.source, args.target])?;
    trace_command!(ctx.cli, ctx.start, "build_graph");

    let kind = ctx.engine(&args.graph);
    let route = engine(kind, &graph)?.route(args.source, args.target);
    trace_command!(ctx.cli, ctx.start, "query");

    match ctx.format() {
        OutputFormat::Json => print_json(&json!({
            "source": args.source,
            "target": args.target,
            "engine": kind,
            "route": route,
        })),
        OutputFormat::Human => {
            match &route {
                Route::Reached(path) => {
                    println!("distance: {}", path.distance);
                    println!("path: {}", format_path(path));
                    if !ctx.cli.quiet {
                        println!("cost: {}", format_costs(path));
                    }
                }
                Route::Unreachable | Route::InvalidNode { .. } => {
                    println!("no path from {} to {}", args.source, args.target);
                }
            }
            Ok(())
        }
    }
}
