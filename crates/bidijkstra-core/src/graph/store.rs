//! Adjacency-list graph store
//!
//! Directed weighted graph over a fixed node range `0..n`, with an optional
//! reverse adjacency kept as the exact transpose of the forward one.

use tracing::trace;

use super::types::{Edge, NodeId, Weight};
use crate::error::{PathError, Result};

/// Directed weighted graph.
///
/// Parallel edges are kept as distinct entries. The reverse adjacency, when
/// present, is only ever updated together with the forward adjacency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<W> {
    forward: Vec<Vec<Edge<W>>>,
    reverse: Option<Vec<Vec<Edge<W>>>>,
    edge_count: usize,
}

impl<W: Weight> Graph<W> {
    /// Create a graph with forward adjacency only.
    pub fn new(node_count: usize) -> Self {
        Graph {
            forward: vec![Vec::new(); node_count],
            reverse: None,
            edge_count: 0,
        }
    }

    /// Create a graph that also maintains the reverse adjacency, as required by
    /// bidirectional search.
    pub fn with_reverse(node_count: usize) -> Self {
        Graph {
            forward: vec![Vec::new(); node_count],
            reverse: Some(vec![Vec::new(); node_count]),
            edge_count: 0,
        }
    }

    pub fn node_count(&self) -> usize {
        self.forward.len()
    }

    /// Number of directed edges, parallel edges counted separately.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn has_reverse(&self) -> bool {
        self.reverse.is_some()
    }

    pub fn is_valid_node(&self, node: NodeId) -> bool {
        node < self.forward.len()
    }

    /// Return `node` if it lies in range, `NodeOutOfRange` otherwise.
    pub fn check_node(&self, node: NodeId) -> Result<NodeId> {
        if self.is_valid_node(node) {
            Ok(node)
        } else {
            Err(PathError::NodeOutOfRange {
                node,
                node_count: self.node_count(),
            })
        }
    }

    /// Append the edge `from -> to`.
    ///
    /// Silently ignored when either endpoint is out of range. Adding the same
    /// edge twice yields two parallel edges.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: W) {
        if !self.is_valid_node(from) || !self.is_valid_node(to) {
            trace!(from, to, "skip out-of-range edge");
            return;
        }
        debug_assert!(weight >= W::ZERO, "negative edge weight {weight}");

        self.forward[from].push(Edge { weight, to });
        if let Some(reverse) = self.reverse.as_mut() {
            reverse[to].push(Edge { weight, to: from });
        }
        self.edge_count += 1;
    }

    /// Append both `u -> v` and `v -> u` with the same weight.
    pub fn add_bidirectional_edge(&mut self, u: NodeId, v: NodeId, weight: W) {
        self.add_edge(u, v, weight);
        self.add_edge(v, u, weight);
    }

    /// Strict variant of [`Graph::add_edge`] that reports out-of-range endpoints.
    pub fn try_add_edge(&mut self, from: NodeId, to: NodeId, weight: W) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;
        self.add_edge(from, to, weight);
        Ok(())
    }

    /// Outgoing edges of `node`; empty for an out-of-range node.
    pub fn out_edges(&self, node: NodeId) -> &[Edge<W>] {
        self.forward.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Incoming edges of `node` as `(weight, tail)` entries, or `None` when the
    /// reverse adjacency is not maintained.
    pub fn in_edges(&self, node: NodeId) -> Option<&[Edge<W>]> {
        let reverse = self.reverse.as_ref()?;
        Some(reverse.get(node).map(Vec::as_slice).unwrap_or(&[]))
    }

    /// Iterate all edges as `(from, edge)` in insertion order per node.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, &Edge<W>)> + '_ {
        self.forward
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| edges.iter().map(move |edge| (from, edge)))
    }

    /// Build the reverse adjacency from the forward one if it is missing.
    pub fn ensure_reverse(&mut self) {
        if self.reverse.is_some() {
            return;
        }
        let mut reverse = vec![Vec::new(); self.forward.len()];
        for (from, edge) in self.edges() {
            reverse[edge.to].push(Edge {
                weight: edge.weight,
                to: from,
            });
        }
        self.reverse = Some(reverse);
    }

    pub(crate) fn forward_adjacency(&self) -> &[Vec<Edge<W>>] {
        &self.forward
    }

    pub(crate) fn reverse_adjacency(&self) -> Option<&[Vec<Edge<W>>]> {
        self.reverse.as_deref()
    }
}

impl<W: Weight> Extend<(NodeId, NodeId, W)> for Graph<W> {
    fn extend<I: IntoIterator<Item = (NodeId, NodeId, W)>>(&mut self, iter: I) {
        for (from, to, weight) in iter {
            self.add_edge(from, to, weight);
        }
    }
}
