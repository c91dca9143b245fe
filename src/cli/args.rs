use super::parse::{parse_edge, parse_engine};
use bidijkstra_core::graph::{EngineKind, NodeId};
use clap::Args;

/// Directed edge given on the command line as `from,to,weight`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSpec {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: i64,
}

/// Graph description shared by the query commands
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Number of nodes; ids run from 0 to N-1
    #[arg(long, short = 'n')]
    pub nodes: usize,

    /// Directed edge as `from,to,weight` (can be specified multiple times)
    #[arg(long = "edge", short = 'e', value_parser = parse_edge, action = clap::ArgAction::Append)]
    pub edges: Vec<EdgeSpec>,

    /// Add every edge in both directions
    #[arg(long)]
    pub undirected: bool,

    /// Engine to query with: dijkstra or bidirectional
    #[arg(long, value_parser = parse_engine)]
    pub engine: Option<EngineKind>,
}

#[derive(Args, Debug, Clone)]
pub struct PairArgs {
    /// Source node
    pub source: NodeId,

    /// Target node
    pub target: NodeId,

    #[command(flatten)]
    pub graph: GraphArgs,
}

#[derive(Args, Debug, Clone)]
pub struct AllArgs {
    /// Source node
    pub source: NodeId,

    #[command(flatten)]
    pub graph: GraphArgs,
}

#[derive(Args, Debug, Clone)]
pub struct BenchArgs {
    /// Source node
    pub source: NodeId,

    /// Target node
    pub target: NodeId,

    /// Timed queries per engine
    #[arg(long, short)]
    pub iterations: Option<u32>,

    #[command(flatten)]
    pub graph: GraphArgs,
}
