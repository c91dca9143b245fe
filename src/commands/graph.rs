//! Graph construction and engine selection shared by the query commands

use tracing::debug;

use super::dispatch::CommandContext;
use crate::cli::GraphArgs;
use bidijkstra_core::error::Result;
use bidijkstra_core::graph::{
    BidirectionalDijkstra, Dijkstra, EngineKind, Graph, NodeId, ShortestPathEngine,
};

/// Weight type used for graphs given on the command line
pub type CliWeight = i64;

/// Build the graph described by `--nodes` and `--edge`.
///
/// Edges naming a node outside `0..nodes` are rejected. The reverse
/// adjacency is always kept so either engine can run on the result.
pub fn build_graph(ctx: &CommandContext, args: &GraphArgs) -> Result<Graph<CliWeight>> {
    let undirected = ctx.undirected(args);
    let mut graph = Graph::with_reverse(args.nodes);
    for edge in &args.edges {
        graph.try_add_edge(edge.from, edge.to, edge.weight)?;
        if undirected {
            graph.try_add_edge(edge.to, edge.from, edge.weight)?;
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        undirected,
        "build_graph"
    );
    Ok(graph)
}

/// Engine of the requested kind over `graph`
pub fn engine<'g>(
    kind: EngineKind,
    graph: &'g Graph<CliWeight>,
) -> Result<Box<dyn ShortestPathEngine<CliWeight> + 'g>> {
    let engine: Box<dyn ShortestPathEngine<CliWeight> + 'g> = match kind {
        EngineKind::Dijkstra => Box::new(Dijkstra::new(graph)),
        EngineKind::Bidirectional => Box::new(BidirectionalDijkstra::new(graph)?),
    };
    Ok(engine)
}

/// Reject a query node outside the graph
pub fn check_nodes(graph: &Graph<CliWeight>, nodes: &[NodeId]) -> Result<()> {
    for node in nodes {
        graph.check_node(*node)?;
    }
    Ok(())
}
