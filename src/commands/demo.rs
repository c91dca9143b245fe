//! `bidijkstra demo` command
//!
//! Runs both engines over a few small built-in graphs and prints the
//! all-targets table for each.

use serde::Serialize;

use super::dispatch::{trace_command, CommandContext};
use super::output::print_json;
use bidijkstra_core::error::Result;
use bidijkstra_core::format::{render_table, table_rows, OutputFormat, TableRow};
use bidijkstra_core::graph::{
    BidirectionalDijkstra, Dijkstra, EngineKind, Graph, NodeId, ShortestPathEngine,
};

/// Chain with one shortcut
const CHAIN_EDGES: &[(NodeId, NodeId, i32)] =
    &[(0, 1, 1), (1, 2, 2), (2, 3, 2), (3, 4, 1), (1, 3, 3)];

/// Seven-node ladder shared by the directed and undirected runs
const LADDER_EDGES: &[(NodeId, NodeId, i32)] = &[
    (0, 1, 2),
    (0, 2, 6),
    (1, 3, 5),
    (2, 3, 8),
    (3, 4, 10),
    (3, 5, 15),
    (4, 5, 3),
    (4, 6, 2),
    (5, 6, 6),
];

/// Long chain to 8 that loses to the two-hop detour through 5
const DETOUR_EDGES: &[(NodeId, NodeId, i32)] = &[
    (0, 1, 1),
    (0, 5, 4),
    (0, 4, 8),
    (1, 2, 1),
    (2, 3, 1),
    (3, 7, 1),
    (7, 8, 2),
    (5, 8, 1),
    (4, 6, 2),
    (6, 8, 6),
];

#[derive(Debug, Serialize)]
struct Scenario {
    title: String,
    engine: EngineKind,
    source: NodeId,
    results: Vec<TableRow<i32>>,
}

fn directed(node_count: usize, edges: &[(NodeId, NodeId, i32)]) -> Graph<i32> {
    let mut graph = Graph::with_reverse(node_count);
    graph.extend(edges.iter().copied());
    graph
}

fn undirected(node_count: usize, edges: &[(NodeId, NodeId, i32)]) -> Graph<i32> {
    let mut graph = Graph::new(node_count);
    for &(u, v, weight) in edges {
        graph.add_bidirectional_edge(u, v, weight);
    }
    graph
}

fn run(
    title: &str,
    engine: &dyn ShortestPathEngine<i32>,
    kind: EngineKind,
    source: NodeId,
) -> (Scenario, String) {
    let results = engine.dijkstra(source);
    let table = render_table(&results);
    let scenario = Scenario {
        title: title.to_string(),
        engine: kind,
        source,
        results: table_rows(&results),
    };
    (scenario, table)
}

/// Execute the demo command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let chain = directed(6, CHAIN_EDGES);
    let ladder_undirected = undirected(7, LADDER_EDGES);
    let ladder = directed(7, LADDER_EDGES);
    let detour = directed(9, DETOUR_EDGES);

    let chain_engine = Dijkstra::new(&chain);
    let undirected_engine = Dijkstra::new(&ladder_undirected);
    let ladder_engine = BidirectionalDijkstra::new(&ladder)?;
    let detour_engine = BidirectionalDijkstra::new(&detour)?;

    let runs = [
        run("chain with shortcut", &chain_engine, EngineKind::Dijkstra, 0),
        run("undirected ladder", &undirected_engine, EngineKind::Dijkstra, 0),
        run("undirected ladder", &undirected_engine, EngineKind::Dijkstra, 2),
        run("ladder", &ladder_engine, EngineKind::Bidirectional, 0),
        run("detour", &detour_engine, EngineKind::Bidirectional, 0),
    ];
    trace_command!(ctx.cli, ctx.start, "demo_queries");

    match ctx.format() {
        OutputFormat::Json => {
            let scenarios: Vec<Scenario> =
                runs.into_iter().map(|(scenario, _)| scenario).collect();
            print_json(&scenarios)
        }
        OutputFormat::Human => {
            for (index, (scenario, table)) in runs.iter().enumerate() {
                if index > 0 {
                    println!();
                }
                println!(
                    "== {} ({}, source {}) ==",
                    scenario.title, scenario.engine, scenario.source
                );
                println!("{}", table);
            }
            Ok(())
        }
    }
}
