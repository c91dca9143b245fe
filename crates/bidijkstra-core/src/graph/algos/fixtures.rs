//! Graphs shared by the engine tests

use crate::graph::store::Graph;
use crate::graph::types::{NodeId, PathStep};

/// 8 nodes, node 7 unreachable from 0.
pub const LADDER_EDGES: [(NodeId, NodeId, i32); 9] = [
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

/// 9 nodes where the long chain to 8 loses to the two-hop detour through 5.
pub const DETOUR_EDGES: [(NodeId, NodeId, i32); 10] = [
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

pub fn build(node_count: usize, edges: &[(NodeId, NodeId, i32)]) -> Graph<i32> {
    let mut graph = Graph::with_reverse(node_count);
    graph.extend(edges.iter().copied());
    graph
}

pub fn ladder() -> Graph<i32> {
    build(8, &LADDER_EDGES)
}

pub fn detour() -> Graph<i32> {
    build(9, &DETOUR_EDGES)
}

pub fn steps(pairs: &[(i32, NodeId)]) -> Vec<PathStep<i32>> {
    pairs.iter().copied().map(PathStep::from).collect()
}

/// Expected `dijkstra(0)` over [`ladder`] as `(distance, steps)`.
pub fn ladder_from_zero() -> Vec<Option<(i32, Vec<PathStep<i32>>)>> {
    vec![
        Some((0, steps(&[(0, 0)]))),
        Some((2, steps(&[(0, 0), (2, 1)]))),
        Some((6, steps(&[(0, 0), (6, 2)]))),
        Some((7, steps(&[(0, 0), (2, 1), (5, 3)]))),
        Some((17, steps(&[(0, 0), (2, 1), (5, 3), (10, 4)]))),
        Some((20, steps(&[(0, 0), (2, 1), (5, 3), (10, 4), (3, 5)]))),
        Some((19, steps(&[(0, 0), (2, 1), (5, 3), (10, 4), (2, 6)]))),
        None,
    ]
}

/// Expected `dijkstra(0)` over [`detour`].
pub fn detour_from_zero() -> Vec<Option<(i32, Vec<PathStep<i32>>)>> {
    vec![
        Some((0, steps(&[(0, 0)]))),
        Some((1, steps(&[(0, 0), (1, 1)]))),
        Some((2, steps(&[(0, 0), (1, 1), (1, 2)]))),
        Some((3, steps(&[(0, 0), (1, 1), (1, 2), (1, 3)]))),
        Some((8, steps(&[(0, 0), (8, 4)]))),
        Some((4, steps(&[(0, 0), (4, 5)]))),
        Some((10, steps(&[(0, 0), (8, 4), (2, 6)]))),
        Some((4, steps(&[(0, 0), (1, 1), (1, 2), (1, 3), (1, 7)]))),
        Some((5, steps(&[(0, 0), (4, 5), (1, 8)]))),
    ]
}
