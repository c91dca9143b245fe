use std::time::Instant;

use tracing::{debug, trace};

use crate::graph::algos::shared::{Pop, SearchState};
use crate::graph::engine::ShortestPathEngine;
use crate::graph::store::Graph;
use crate::graph::types::{NodeId, ShortestPath, Weight};

/// Single-source Dijkstra over the forward adjacency of a graph.
///
/// Classic label-setting search on a binary min-heap with lazy deletion in
/// place of decrease-key. Requires non-negative weights.
#[derive(Debug, Clone, Copy)]
pub struct Dijkstra<'g, W> {
    graph: &'g Graph<W>,
}

impl<'g, W: Weight> Dijkstra<'g, W> {
    pub fn new(graph: &'g Graph<W>) -> Self {
        Self { graph }
    }

    /// Run the search from `source`, stopping as soon as `target` is settled.
    ///
    /// The early exit is sound because every entry still queued is at least as
    /// far as the target's final distance.
    fn search(
        &self,
        source: NodeId,
        target: Option<NodeId>,
        track_paths: bool,
    ) -> SearchState<W> {
        let start = Instant::now();
        let adjacency = self.graph.forward_adjacency();
        let mut state = SearchState::new(self.graph.node_count(), source, track_paths);

        loop {
            let entry = match state.pop() {
                Pop::Empty => break,
                Pop::Stale(entry) => {
                    trace!(node = entry.node, distance = %entry.distance, "skip_stale");
                    continue;
                }
                Pop::Settled(entry) => entry,
            };
            trace!(node = entry.node, distance = %entry.distance, "settle");

            if target == Some(entry.node) {
                break;
            }

            for edge in &adjacency[entry.node] {
                if state.relax(entry.node, entry.distance, edge) {
                    trace!(from = entry.node, to = edge.to, distance = ?state.distance(edge.to), "relax");
                }
            }
        }

        debug!(source, settled = state.settled(), "search_done");
        crate::trace_time!(start, "dijkstra_search", source = source);
        state
    }
}

impl<W: Weight> ShortestPathEngine<W> for Dijkstra<'_, W> {
    fn graph(&self) -> &Graph<W> {
        self.graph
    }

    #[tracing::instrument(level = "debug", skip(self), fields(engine = "dijkstra"))]
    fn dijkstra(&self, source: NodeId) -> Vec<Option<ShortestPath<W>>> {
        if !self.graph.is_valid_node(source) {
            return Vec::new();
        }

        let state = self.search(source, None, true);
        (0..self.graph.node_count())
            .map(|node| {
                state.distance(node).map(|distance| ShortestPath {
                    distance,
                    steps: state.trace(node),
                })
            })
            .collect()
    }

    #[tracing::instrument(level = "debug", skip(self), fields(engine = "dijkstra"))]
    fn shortest_path(&self, source: NodeId, target: NodeId) -> Option<ShortestPath<W>> {
        if !self.graph.is_valid_node(source) || !self.graph.is_valid_node(target) {
            return None;
        }
        if source == target {
            return Some(ShortestPath::trivial(source));
        }

        let state = self.search(source, Some(target), true);
        let distance = state.distance(target)?;
        Some(ShortestPath {
            distance,
            steps: state.trace(target),
        })
    }

    #[tracing::instrument(level = "debug", skip(self), fields(engine = "dijkstra"))]
    fn shortest_distance(&self, source: NodeId, target: NodeId) -> Option<W> {
        if !self.graph.is_valid_node(source) || !self.graph.is_valid_node(target) {
            return None;
        }
        if source == target {
            return Some(W::ZERO);
        }

        self.search(source, Some(target), false).distance(target)
    }
}

#[cfg(test)]
mod tests;
