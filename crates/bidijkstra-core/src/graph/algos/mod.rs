//! Shortest-path engine implementations
//!
//! - `dijkstra`: single-source label-setting search
//! - `bidirectional`: meet-in-the-middle search over the graph and its transpose
//! - `shared`: frontier, labels and predecessor records used by both

pub mod bidirectional;
pub mod dijkstra;
pub mod shared;

#[cfg(test)]
pub(crate) mod fixtures;

pub use bidirectional::{BidirectionalDijkstra, Direction, JoinEdge, Meeting};
pub use dijkstra::Dijkstra;
pub use shared::{HeapEntry, Pop, Predecessor, SearchState};
