//! Bidijkstra Core Library
//!
//! Shortest paths in weighted directed graphs: a graph store plus a
//! single-source Dijkstra engine and a bidirectional (meet-in-the-middle)
//! Dijkstra engine sharing the same relaxation machinery.
//!
//! ```
//! use bidijkstra_core::graph::{BidirectionalDijkstra, Graph, ShortestPathEngine};
//!
//! let mut graph = Graph::with_reverse(3);
//! graph.add_edge(0, 1, 2);
//! graph.add_edge(1, 2, 3);
//! graph.add_edge(0, 2, 9);
//!
//! let engine = BidirectionalDijkstra::new(&graph)?;
//! assert_eq!(engine.shortest_distance(0, 2), Some(5));
//! # Ok::<(), bidijkstra_core::error::PathError>(())
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
