//! `bidijkstra all` command

use serde_json::json;

use super::dispatch::{trace_command, CommandContext};
use super::graph::{build_graph, check_nodes, engine};
use super::output::print_json;
use crate::cli::AllArgs;
use bidijkstra_core::error::Result;
use bidijkstra_core::format::{render_table, table_rows, OutputFormat};

/// Execute the all command
pub fn execute(ctx: &CommandContext, args: &AllArgs) -> Result<()> {
    let graph = build_graph(ctx, &args.graph)?;
    check_nodes(&graph, &[args.source])?;
    trace_command!(ctx.cli, ctx.start, "build_graph");

    let kind = ctx.engine(&args.graph);
    let results = engine(kind, &graph)?.dijkstra(args.source);
    trace_command!(ctx.cli, ctx.start, "query");

    match ctx.format() {
        OutputFormat::Json => print_json(&json!({
            "source": args.source,
            "engine": kind,
            "results": table_rows(&results),
        })),
        OutputFormat::Human => {
            if !results.is_empty() {
                println!("{}", render_table(&results));
            }
            Ok(())
        }
    }
}
