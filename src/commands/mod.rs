//! CLI commands for bidijkstra

pub mod all;
pub mod bench;
pub mod demo;
pub mod dispatch;
pub mod distance;
pub mod graph;
pub mod output;
pub mod path;
