use serde::Serialize;
use std::fmt;
use std::ops::Add;

/// Node identifier, valid in `0..node_count`.
pub type NodeId = usize;

/// Edge weight.
///
/// Weights must be non-negative. Dijkstra's label-setting discipline finalises
/// a node the moment it is popped, which is only sound when no later edge can
/// shorten it. Insertion checks this with a debug assertion only; release builds
/// silently return wrong answers on negative weights.
///
/// Distances are summed with [`Weight::checked_add`]. A path whose length does
/// not fit in `Self` is never relaxed or joined, so the engines treat it as
/// absent rather than wrapping around.
pub trait Weight: Copy + Ord + Add<Output = Self> + fmt::Debug + fmt::Display {
    /// Additive identity, the distance of a search root to itself.
    const ZERO: Self;

    /// `self + other`, or `None` on overflow.
    fn checked_add(self, other: Self) -> Option<Self>;
}

macro_rules! impl_weight {
    ($($t:ty),* $(,)?) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0;

                fn checked_add(self, other: Self) -> Option<Self> {
                    <$t>::checked_add(self, other)
                }
            }
        )*
    };
}

impl_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Adjacency entry: an edge of `weight` leading to `to`.
///
/// In the reverse adjacency `to` is the tail of the original edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge<W> {
    pub weight: W,
    pub to: NodeId,
}

/// One `(edge weight, node)` element of a path.
///
/// The first step of a path carries a zero weight since the source has no
/// incoming edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PathStep<W> {
    pub weight: W,
    pub node: NodeId,
}

impl<W> From<(W, NodeId)> for PathStep<W> {
    fn from((weight, node): (W, NodeId)) -> Self {
        PathStep { weight, node }
    }
}

/// A reached target: its distance and the source-to-target steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath<W> {
    pub distance: W,
    pub steps: Vec<PathStep<W>>,
}

impl<W: Weight> ShortestPath<W> {
    /// Path from a node to itself.
    pub fn trivial(node: NodeId) -> Self {
        ShortestPath {
            distance: W::ZERO,
            steps: vec![PathStep {
                weight: W::ZERO,
                node,
            }],
        }
    }

    pub fn source(&self) -> Option<NodeId> {
        self.steps.first().map(|step| step.node)
    }

    pub fn target(&self) -> Option<NodeId> {
        self.steps.last().map(|step| step.node)
    }

    /// Node ids in source-to-target order
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.steps.iter().map(|step| step.node)
    }

    /// Per-step edge weights, including the leading zero of the source
    pub fn costs(&self) -> impl Iterator<Item = W> + '_ {
        self.steps.iter().map(|step| step.weight)
    }

    /// Sum of the edge weights actually traversed.
    pub fn edge_total(&self) -> W {
        self.steps
            .iter()
            .skip(1)
            .fold(W::ZERO, |acc, step| acc + step.weight)
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Outcome of a point-to-point query that keeps apart the cases the plain
/// query API folds into "no path".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Route<W> {
    Reached(ShortestPath<W>),
    Unreachable,
    InvalidNode { node: NodeId },
}

impl<W: Weight> Route<W> {
    pub fn distance(&self) -> Option<W> {
        match self {
            Route::Reached(path) => Some(path.distance),
            Route::Unreachable | Route::InvalidNode { .. } => None,
        }
    }

    pub fn is_reached(&self) -> bool {
        matches!(self, Route::Reached(_))
    }

    pub fn into_path(self) -> Option<ShortestPath<W>> {
        match self {
            Route::Reached(path) => Some(path),
            Route::Unreachable | Route::InvalidNode { .. } => None,
        }
    }
}
