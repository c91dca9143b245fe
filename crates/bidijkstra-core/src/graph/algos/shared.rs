//! Label-setting search state shared by both engines
//!
//! One `SearchState` is a single Dijkstra frontier together with its distance
//! labels and, optionally, its predecessor records. The single-source engine
//! drives one instance; the bidirectional engine drives two.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::types::{Edge, NodeId, PathStep, Weight};

/// Frontier entry, ordered by tentative distance then node id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeapEntry<W> {
    pub distance: W,
    pub node: NodeId,
}

/// Predecessor record: the weight of the edge that reached a node and the node
/// it came from. The search root has `node: None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Predecessor<W> {
    pub weight: W,
    pub node: Option<NodeId>,
}

/// Result of popping the frontier minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pop<W> {
    /// Frontier is exhausted
    Empty,
    /// Entry superseded by a shorter label (lazy deletion)
    Stale(HeapEntry<W>),
    /// Entry whose distance is now final
    Settled(HeapEntry<W>),
}

/// State tracked during one label-setting search
#[derive(Debug, Clone)]
pub struct SearchState<W> {
    distances: Vec<Option<W>>,
    predecessors: Option<Vec<Option<Predecessor<W>>>>,
    heap: BinaryHeap<Reverse<HeapEntry<W>>>,
    settled: usize,
}

impl<W: Weight> SearchState<W> {
    /// Start a search rooted at `root`. `root` must be in `0..node_count`.
    ///
    /// Predecessors are only recorded when `track_paths` is set.
    pub fn new(node_count: usize, root: NodeId, track_paths: bool) -> Self {
        let mut distances = vec![None; node_count];
        distances[root] = Some(W::ZERO);

        let predecessors = track_paths.then(|| {
            let mut predecessors = vec![None; node_count];
            predecessors[root] = Some(Predecessor {
                weight: W::ZERO,
                node: None,
            });
            predecessors
        });

        let mut heap = BinaryHeap::new();
        heap.push(Reverse(HeapEntry {
            distance: W::ZERO,
            node: root,
        }));

        Self {
            distances,
            predecessors,
            heap,
            settled: 0,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of nodes settled so far
    pub fn settled(&self) -> usize {
        self.settled
    }

    pub fn distance(&self, node: NodeId) -> Option<W> {
        self.distances.get(node).copied().flatten()
    }

    /// Pop the frontier minimum, classifying it as settled or stale.
    pub fn pop(&mut self) -> Pop<W> {
        let Some(Reverse(entry)) = self.heap.pop() else {
            return Pop::Empty;
        };
        match self.distances[entry.node] {
            Some(best) if best < entry.distance => Pop::Stale(entry),
            _ => {
                self.settled += 1;
                Pop::Settled(entry)
            }
        }
    }

    /// Relax `edge` out of `from`, whose settled distance is `from_distance`.
    ///
    /// Returns true when the head's label improved (including first reach).
    pub fn relax(&mut self, from: NodeId, from_distance: W, edge: &Edge<W>) -> bool {
        let Some(candidate) = from_distance.checked_add(edge.weight) else {
            return false;
        };
        let improves = match self.distances[edge.to] {
            None => true,
            Some(current) => candidate < current,
        };
        if !improves {
            return false;
        }

        self.distances[edge.to] = Some(candidate);
        if let Some(predecessors) = self.predecessors.as_mut() {
            predecessors[edge.to] = Some(Predecessor {
                weight: edge.weight,
                node: Some(from),
            });
        }
        self.heap.push(Reverse(HeapEntry {
            distance: candidate,
            node: edge.to,
        }));
        true
    }

    fn predecessor(&self, node: NodeId) -> Option<Predecessor<W>> {
        self.predecessors.as_ref()?.get(node).copied().flatten()
    }

    /// Steps from the root to `node`, root first.
    ///
    /// Empty when `node` is unreached or predecessors are not tracked.
    pub fn trace(&self, node: NodeId) -> Vec<PathStep<W>> {
        let mut steps = Vec::new();
        let mut current = Some(node);
        while let Some(at) = current {
            let Some(predecessor) = self.predecessor(at) else {
                break;
            };
            steps.push(PathStep {
                weight: predecessor.weight,
                node: at,
            });
            current = predecessor.node;
        }
        steps.reverse();
        steps
    }

    /// Steps from `node` toward the root, excluding `node` itself.
    ///
    /// Used on a search over the transposed graph: each step is the original
    /// edge leaving the previous node, so the walk is already in forward order.
    pub fn trace_toward_root(&self, node: NodeId) -> Vec<PathStep<W>> {
        let mut steps = Vec::new();
        let mut current = node;
        while let Some(Predecessor {
            weight,
            node: Some(next),
        }) = self.predecessor(current)
        {
            steps.push(PathStep { weight, node: next });
            current = next;
        }
        steps
    }
}
