//! Bidirectional (meet-in-the-middle) Dijkstra
//!
//! Two label-setting searches run in alternation: forward from the source over
//! the graph, backward from the target over its transpose. They are coupled
//! only through a [`Meeting`], which tracks the best complete path seen so far
//! and decides when to stop.
//!
//! Stopping when the frontiers first touch a common node is wrong: the best
//! path need not pass through that node. Instead every scanned edge whose head
//! the opposite search has labelled offers a candidate total, and the search
//! stops once the two frontier lower bounds sum to at least the best candidate.

use tracing::{debug, trace};

use crate::error::{PathError, Result};
use crate::graph::algos::shared::{Pop, SearchState};
use crate::graph::engine::ShortestPathEngine;
use crate::graph::store::Graph;
use crate::graph::types::{Edge, NodeId, PathStep, ShortestPath, Weight};

/// Which of the two coupled searches a half-round advances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Edge whose relaxation produced the best known complete path, with endpoints
/// in original-graph order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinEdge<W> {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: W,
}

/// Best-estimate tracker shared by the forward and backward half-rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meeting<W> {
    estimate: Option<W>,
    join: Option<JoinEdge<W>>,
    top_forward: Option<W>,
    top_backward: Option<W>,
}

impl<W: Weight> Default for Meeting<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Weight> Meeting<W> {
    pub fn new() -> Self {
        Self {
            estimate: None,
            join: None,
            top_forward: None,
            top_backward: None,
        }
    }

    /// Best complete source-to-target distance found so far
    pub fn estimate(&self) -> Option<W> {
        self.estimate
    }

    pub fn join(&self) -> Option<JoinEdge<W>> {
        self.join
    }

    pub fn top(&self, direction: Direction) -> Option<W> {
        match direction {
            Direction::Forward => self.top_forward,
            Direction::Backward => self.top_backward,
        }
    }

    /// Record the distance just settled by one search; it bounds everything
    /// that search will settle later.
    pub fn record_top(&mut self, direction: Direction, distance: W) {
        match direction {
            Direction::Forward => self.top_forward = Some(distance),
            Direction::Backward => self.top_backward = Some(distance),
        }
    }

    /// Offer a complete path of cost `total` through `join`.
    ///
    /// Returns true when it becomes the new best estimate.
    pub fn offer(&mut self, total: W, join: JoinEdge<W>) -> bool {
        if self.estimate.is_some_and(|best| total >= best) {
            return false;
        }
        self.estimate = Some(total);
        self.join = Some(join);
        true
    }

    /// True once no undiscovered path can beat the estimate.
    pub fn should_stop(&self) -> bool {
        match (self.estimate, self.top_forward, self.top_backward) {
            // An overflowing bound already exceeds every representable estimate.
            (Some(best), Some(forward), Some(backward)) => forward
                .checked_add(backward)
                .is_none_or(|bound| bound >= best),
            _ => false,
        }
    }
}

/// Advance one search by a single pop.
///
/// Every scanned edge whose head the opposite search has labelled is offered
/// to the meeting, whether or not it relaxed. The distance is the same as when
/// only relaxing edges are offered, but among equal-cost paths the join edge
/// (and so the returned path) may differ.
///
/// Returns false when the frontier was already exhausted.
fn half_round<W: Weight>(
    direction: Direction,
    adjacency: &[Vec<Edge<W>>],
    search: &mut SearchState<W>,
    opposite: &SearchState<W>,
    meeting: &mut Meeting<W>,
) -> bool {
    let entry = match search.pop() {
        Pop::Empty => return false,
        Pop::Stale(entry) => {
            trace!(?direction, node = entry.node, distance = %entry.distance, "skip_stale");
            return true;
        }
        Pop::Settled(entry) => entry,
    };
    trace!(?direction, node = entry.node, distance = %entry.distance, "settle");
    meeting.record_top(direction, entry.distance);

    for edge in &adjacency[entry.node] {
        if search.relax(entry.node, entry.distance, edge) {
            trace!(?direction, from = entry.node, to = edge.to, "relax");
        }

        let Some(remaining) = opposite.distance(edge.to) else {
            continue;
        };
        let Some(total) = entry
            .distance
            .checked_add(edge.weight)
            .and_then(|partial| partial.checked_add(remaining))
        else {
            continue;
        };
        let join = match direction {
            Direction::Forward => JoinEdge {
                from: entry.node,
                to: edge.to,
                weight: edge.weight,
            },
            Direction::Backward => JoinEdge {
                from: edge.to,
                to: entry.node,
                weight: edge.weight,
            },
        };
        if meeting.offer(total, join) {
            debug!(estimate = %total, from = join.from, to = join.to, "estimate_updated");
        }
    }

    true
}

/// Bidirectional Dijkstra over a graph that maintains its reverse adjacency.
///
/// Requires non-negative weights.
#[derive(Debug, Clone, Copy)]
pub struct BidirectionalDijkstra<'g, W> {
    graph: &'g Graph<W>,
    reverse: &'g [Vec<Edge<W>>],
}

impl<'g, W: Weight> BidirectionalDijkstra<'g, W> {
    /// Fails with `MissingReverseAdjacency` for a forward-only graph; see
    /// [`Graph::with_reverse`] and [`Graph::ensure_reverse`].
    pub fn new(graph: &'g Graph<W>) -> Result<Self> {
        let reverse = graph
            .reverse_adjacency()
            .ok_or(PathError::MissingReverseAdjacency)?;
        Ok(Self { graph, reverse })
    }

    /// Run both searches until the stopping rule fires or a frontier empties.
    ///
    /// Both endpoints must be in range and distinct.
    fn meet(
        &self,
        source: NodeId,
        target: NodeId,
        track_paths: bool,
    ) -> (Meeting<W>, SearchState<W>, SearchState<W>) {
        let node_count = self.graph.node_count();
        let forward_adjacency = self.graph.forward_adjacency();
        let mut forward = SearchState::new(node_count, source, track_paths);
        let mut backward = SearchState::new(node_count, target, track_paths);
        let mut meeting = Meeting::new();
        let mut rounds = 0usize;

        while !forward.is_exhausted() && !backward.is_exhausted() {
            rounds += 1;
            half_round(
                Direction::Forward,
                forward_adjacency,
                &mut forward,
                &backward,
                &mut meeting,
            );
            half_round(
                Direction::Backward,
                self.reverse,
                &mut backward,
                &forward,
                &mut meeting,
            );
            if meeting.should_stop() {
                break;
            }
        }

        debug!(
            source,
            target,
            rounds,
            settled_forward = forward.settled(),
            settled_backward = backward.settled(),
            found = meeting.estimate().is_some(),
            top_forward = ?meeting.top(Direction::Forward),
            top_backward = ?meeting.top(Direction::Backward),
            "meet_done"
        );
        (meeting, forward, backward)
    }

    /// Stitch the forward tree path to `join.from`, the join edge, and the
    /// backward tree path from `join.to` to the target.
    fn stitch(
        join: JoinEdge<W>,
        forward: &SearchState<W>,
        backward: &SearchState<W>,
    ) -> Vec<PathStep<W>> {
        let mut steps = forward.trace(join.from);
        steps.push(PathStep {
            weight: join.weight,
            node: join.to,
        });
        steps.extend(backward.trace_toward_root(join.to));
        steps
    }
}

impl<W: Weight> ShortestPathEngine<W> for BidirectionalDijkstra<'_, W> {
    fn graph(&self) -> &Graph<W> {
        self.graph
    }

    /// One independent point-to-point query per node. Prefer the
    /// single-source engine when every target is wanted.
    #[tracing::instrument(level = "debug", skip(self), fields(engine = "bidirectional"))]
    fn dijkstra(&self, source: NodeId) -> Vec<Option<ShortestPath<W>>> {
        if !self.graph.is_valid_node(source) {
            return Vec::new();
        }
        (0..self.graph.node_count())
            .map(|target| self.shortest_path(source, target))
            .collect()
    }

    #[tracing::instrument(level = "debug", skip(self), fields(engine = "bidirectional"))]
    fn shortest_path(&self, source: NodeId, target: NodeId) -> Option<ShortestPath<W>> {
        if !self.graph.is_valid_node(source) || !self.graph.is_valid_node(target) {
            return None;
        }
        if source == target {
            return Some(ShortestPath::trivial(source));
        }

        let (meeting, forward, backward) = self.meet(source, target, true);
        let distance = meeting.estimate()?;
        let join = meeting.join()?;
        Some(ShortestPath {
            distance,
            steps: Self::stitch(join, &forward, &backward),
        })
    }

    #[tracing::instrument(level = "debug", skip(self), fields(engine = "bidirectional"))]
    fn shortest_distance(&self, source: NodeId, target: NodeId) -> Option<W> {
        if !self.graph.is_valid_node(source) || !self.graph.is_valid_node(target) {
            return None;
        }
        if source == target {
            return Some(W::ZERO);
        }

        self.meet(source, target, false).0.estimate()
    }
}
