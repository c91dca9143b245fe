//! Query surface shared by the shortest-path engines

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::store::Graph;
use super::types::{NodeId, Route, ShortestPath, Weight};
use crate::error::PathError;

/// Shortest-path queries over a built graph.
///
/// Out-of-range nodes and unreachable targets both produce an absent result;
/// [`ShortestPathEngine::route`] tells them apart. Queries take `&self` and
/// allocate their own search state, so one engine may serve concurrent
/// queries from several threads.
pub trait ShortestPathEngine<W: Weight> {
    /// Graph the engine queries
    fn graph(&self) -> &Graph<W>;

    /// Distance and path from `source` to every node, indexed by node.
    ///
    /// Unreachable nodes map to `None`; an out-of-range source yields an empty
    /// vector.
    fn dijkstra(&self, source: NodeId) -> Vec<Option<ShortestPath<W>>>;

    /// Shortest path from `source` to `target`, `None` if either endpoint is
    /// out of range or `target` is unreachable.
    fn shortest_path(&self, source: NodeId, target: NodeId) -> Option<ShortestPath<W>>;

    /// Like [`ShortestPathEngine::shortest_path`] without reconstructing the path.
    fn shortest_distance(&self, source: NodeId, target: NodeId) -> Option<W>;

    /// Point-to-point query with a distinguishable outcome.
    fn route(&self, source: NodeId, target: NodeId) -> Route<W> {
        let graph = self.graph();
        if let Some(node) = [source, target]
            .into_iter()
            .find(|node| !graph.is_valid_node(*node))
        {
            return Route::InvalidNode { node };
        }
        match self.shortest_path(source, target) {
            Some(path) => Route::Reached(path),
            None => Route::Unreachable,
        }
    }
}

/// Selectable shortest-path engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Single-source label-setting search
    Dijkstra,
    /// Meet-in-the-middle search over the graph and its transpose
    #[default]
    Bidirectional,
}

impl FromStr for EngineKind {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dijkstra" => Ok(EngineKind::Dijkstra),
            "bidirectional" | "bidir" => Ok(EngineKind::Bidirectional),
            other => Err(PathError::UnknownEngine(other.to_string())),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::Dijkstra => write!(f, "dijkstra"),
            EngineKind::Bidirectional => write!(f, "bidirectional"),
        }
    }
}
