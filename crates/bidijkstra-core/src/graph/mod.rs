//! Graph store and shortest-path engines
//!
//! - `store`: adjacency lists with an optional transpose
//! - `algos`: single-source and bidirectional Dijkstra
//! - `engine`: the query trait both engines implement

pub mod algos;
pub mod engine;
pub mod store;
pub mod types;

pub use algos::{BidirectionalDijkstra, Dijkstra, JoinEdge, Meeting};
pub use engine::{EngineKind, ShortestPathEngine};
pub use store::Graph;
pub use types::{Edge, NodeId, PathStep, Route, ShortestPath, Weight};
