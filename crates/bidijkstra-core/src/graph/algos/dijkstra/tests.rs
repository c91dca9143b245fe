use super::*;
use crate::graph::algos::fixtures::{detour, detour_from_zero, ladder, ladder_from_zero, steps};
use crate::graph::types::Route;

fn as_pairs(
    results: Vec<Option<ShortestPath<i32>>>,
) -> Vec<Option<(i32, Vec<crate::graph::types::PathStep<i32>>)>> {
    results
        .into_iter()
        .map(|result| result.map(|path| (path.distance, path.steps)))
        .collect()
}

#[test]
fn test_dijkstra_all_targets_ladder() {
    let graph = ladder();
    let engine = Dijkstra::new(&graph);
    assert_eq!(as_pairs(engine.dijkstra(0)), ladder_from_zero());
}

#[test]
fn test_dijkstra_all_targets_detour() {
    let graph = detour();
    let engine = Dijkstra::new(&graph);
    assert_eq!(as_pairs(engine.dijkstra(0)), detour_from_zero());
}

#[test]
fn test_shortest_path_prefers_cheaper_detour() {
    let graph = detour();
    let engine = Dijkstra::new(&graph);

    let path = engine.shortest_path(0, 8).unwrap();
    assert_eq!(path.distance, 5);
    assert_eq!(path.steps, steps(&[(0, 0), (4, 5), (1, 8)]));
    assert_eq!(engine.shortest_distance(0, 8), Some(5));
}

#[test]
fn test_shortest_path_same_node() {
    let graph = ladder();
    let engine = Dijkstra::new(&graph);

    assert_eq!(engine.shortest_path(3, 3), Some(ShortestPath::trivial(3)));
    assert_eq!(engine.shortest_distance(3, 3), Some(0));
}

#[test]
fn test_unreachable_target() {
    let graph = ladder();
    let engine = Dijkstra::new(&graph);

    assert_eq!(engine.shortest_path(0, 7), None);
    assert_eq!(engine.shortest_distance(0, 7), None);
    // Edges only lead away from 0
    assert_eq!(engine.shortest_path(5, 0), None);
}

#[test]
fn test_out_of_range_nodes() {
    let graph = ladder();
    let engine = Dijkstra::new(&graph);

    assert_eq!(engine.shortest_path(0, 9), None);
    assert_eq!(engine.shortest_path(8, 0), None);
    assert_eq!(engine.shortest_distance(0, 9), None);
    assert!(engine.dijkstra(8).is_empty());
}

#[test]
fn test_route_distinguishes_outcomes() {
    let graph = ladder();
    let engine = Dijkstra::new(&graph);

    assert_eq!(engine.route(0, 9), Route::InvalidNode { node: 9 });
    assert_eq!(engine.route(12, 0), Route::InvalidNode { node: 12 });
    assert_eq!(engine.route(0, 7), Route::Unreachable);
    assert_eq!(engine.route(0, 5).distance(), Some(20));
}

#[test]
fn test_parallel_edges_cheaper_wins() {
    let mut parallel = Graph::new(3);
    parallel.add_edge(0, 1, 3);
    parallel.add_edge(0, 1, 1);
    parallel.add_edge(1, 2, 4);

    let mut single = Graph::new(3);
    single.add_edge(0, 1, 1);
    single.add_edge(1, 2, 4);

    let parallel_engine = Dijkstra::new(&parallel);
    let single_engine = Dijkstra::new(&single);
    assert_eq!(parallel_engine.dijkstra(0), single_engine.dijkstra(0));
    assert_eq!(
        parallel_engine.shortest_path(0, 2).unwrap().steps,
        steps(&[(0, 0), (1, 1), (4, 2)])
    );
}

#[test]
fn test_undirected_graph() {
    // Bidirectional edges of the ladder, queried from node 2
    let mut graph = Graph::new(7);
    for (u, v, w) in crate::graph::algos::fixtures::LADDER_EDGES {
        graph.add_bidirectional_edge(u, v, w);
    }
    let engine = Dijkstra::new(&graph);

    let path = engine.shortest_path(2, 6).unwrap();
    assert_eq!(path.distance, 20);
    assert_eq!(path.nodes().collect::<Vec<_>>(), vec![2, 3, 4, 6]);
    assert_eq!(engine.shortest_distance(2, 0), Some(6));
    assert_eq!(engine.shortest_distance(6, 2), Some(20));
}

#[test]
fn test_zero_weight_edges_and_self_loops() {
    let mut graph = Graph::new(3);
    graph.add_edge(0, 0, 0);
    graph.add_edge(0, 1, 0);
    graph.add_edge(1, 1, 5);
    graph.add_edge(1, 2, 0);
    let engine = Dijkstra::new(&graph);

    let path = engine.shortest_path(0, 2).unwrap();
    assert_eq!(path.distance, 0);
    assert_eq!(path.nodes().collect::<Vec<_>>(), vec![0, 1, 2]);
}

#[test]
fn test_works_on_forward_only_graph_with_other_weights() {
    let mut graph: Graph<u64> = Graph::new(3);
    graph.add_edge(0, 1, 10_000_000_000);
    graph.add_edge(1, 2, 1);
    let engine = Dijkstra::new(&graph);
    assert_eq!(engine.shortest_distance(0, 2), Some(10_000_000_001));
}

#[test]
fn test_repeated_queries_are_identical() {
    let graph = detour();
    let engine = Dijkstra::new(&graph);

    let first = engine.dijkstra(0);
    assert_eq!(engine.dijkstra(0), first);
    assert_eq!(engine.shortest_path(0, 7), engine.shortest_path(0, 7));
}

#[test]
fn test_path_weights_sum_to_distance() {
    let graph = ladder();
    let engine = Dijkstra::new(&graph);

    for source in 0..graph.node_count() {
        for path in engine.dijkstra(source).into_iter().flatten() {
            assert_eq!(path.edge_total(), path.distance);
            assert_eq!(path.source(), Some(source));
        }
    }
}

#[test]
fn test_overflowing_paths_are_unreachable() {
    let mut graph = Graph::new(3);
    graph.extend([(0, 1, i64::MAX), (1, 2, 1)]);
    let engine = Dijkstra::new(&graph);
    assert_eq!(engine.shortest_distance(0, 1), Some(i64::MAX));
    assert_eq!(engine.shortest_distance(0, 2), None);
    assert_eq!(engine.route(0, 2), Route::Unreachable);

    graph.add_edge(0, 2, 5);
    let engine = Dijkstra::new(&graph);
    assert_eq!(engine.shortest_distance(0, 2), Some(5));
}

#[test]
fn test_narrow_weights_stop_at_type_limit() {
    let mut graph: Graph<u8> = Graph::new(4);
    graph.extend([(0, 1, 200), (1, 2, 100), (0, 3, 100), (3, 2, 100)]);
    let engine = Dijkstra::new(&graph);
    let path = engine.shortest_path(0, 2).unwrap();
    assert_eq!(path.distance, 200);
    assert_eq!(path.nodes().collect::<Vec<_>>(), vec![0, 3, 2]);
    assert_eq!(engine.dijkstra(0)[2].as_ref().map(|p| p.distance), Some(200));
}
