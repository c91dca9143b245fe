//! `bidijkstra bench` command
//!
//! Times repeated point-to-point distance queries with each engine over the
//! same graph.

use std::hint::black_box;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::debug;

use super::dispatch::{trace_command, CommandContext};
use super::graph::{build_graph, check_nodes, engine, CliWeight};
use super::output::print_json;
use crate::cli::BenchArgs;
use bidijkstra_core::bail_invalid;
use bidijkstra_core::error::Result;
use bidijkstra_core::format::{OutputFormat, UNREACHABLE_DISTANCE};
use bidijkstra_core::graph::{EngineKind, Graph, NodeId};

#[derive(Debug, Serialize)]
struct Timing {
    engine: EngineKind,
    iterations: u32,
    distance: Option<CliWeight>,
    total_ns: u128,
    mean_ns: u128,
    #[serde(skip)]
    total: Duration,
    #[serde(skip)]
    mean: Duration,
}

fn time_engine(
    kind: EngineKind,
    graph: &Graph<CliWeight>,
    source: NodeId,
    target: NodeId,
    iterations: u32,
) -> Result<Timing> {
    let engine = engine(kind, graph)?;
    let distance = engine.shortest_distance(source, target);

    let start = Instant::now();
    for _ in 0..iterations {
        black_box(engine.shortest_distance(black_box(source), black_box(target)));
    }
    let total = start.elapsed();
    let mean = total / iterations;
    debug!(engine = %kind, elapsed = ?total, "bench_engine");

    Ok(Timing {
        engine: kind,
        iterations,
        distance,
        total_ns: total.as_nanos(),
        mean_ns: mean.as_nanos(),
        total,
        mean,
    })
}

/// Execute the bench command
pub fn execute(ctx: &CommandContext, args: &BenchArgs) -> Result<()> {
    let iterations = ctx.bench_iterations(args.iterations);
    if iterations == 0 {
        bail_invalid!("iterations", iterations);
    }

    let graph = build_graph(ctx, &args.graph)?;
    check_nodes(&graph, &[args.source, args.target])?;
    trace_command!(ctx.cli, ctx.start, "build_graph");

    let timings = [EngineKind::Dijkstra, EngineKind::Bidirectional]
        .into_iter()
        .map(|kind| time_engine(kind, &graph, args.source, args.target, iterations))
        .collect::<Result<Vec<_>>>()?;
    trace_command!(ctx.cli, ctx.start, "bench");

    match ctx.format() {
        OutputFormat::Json => print_json(&timings),
        OutputFormat::Human => {
            for timing in &timings {
                let distance = timing
                    .distance
                    .map_or_else(|| UNREACHABLE_DISTANCE.to_string(), |d| d.to_string());
                println!(
                    "{:<14} dist: {:<6} iterations: {:<8} total: {:>10.3?} mean: {:>10.3?}",
                    timing.engine.to_string(),
                    distance,
                    timing.iterations,
                    timing.total,
                    timing.mean,
                );
            }
            Ok(())
        }
    }
}
