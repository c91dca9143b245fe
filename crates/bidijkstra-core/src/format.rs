//! Output format handling for bidijkstra
//!
//! Supports two output formats:
//! - human: one aligned row per node with distance, `a->b->c` path and
//!   per-edge costs
//! - json: stable, machine-readable JSON

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PathError;
use crate::graph::{NodeId, ShortestPath, Weight};

/// Distance shown in human output for a node without a path
pub const UNREACHABLE_DISTANCE: &str = "-1";

/// Output format for bidijkstra commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(PathError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// One row of a result table, as emitted in JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow<W> {
    pub node: NodeId,
    pub distance: Option<W>,
    pub path: Vec<NodeId>,
    pub costs: Vec<W>,
}

impl<W: Weight> TableRow<W> {
    pub fn new(node: NodeId, result: Option<&ShortestPath<W>>) -> Self {
        match result {
            Some(path) => TableRow {
                node,
                distance: Some(path.distance),
                path: path.nodes().collect(),
                costs: path.costs().collect(),
            },
            None => TableRow {
                node,
                distance: None,
                path: Vec::new(),
                costs: Vec::new(),
            },
        }
    }
}

/// Rows for an all-targets result, indexed by node
pub fn table_rows<W: Weight>(results: &[Option<ShortestPath<W>>]) -> Vec<TableRow<W>> {
    results
        .iter()
        .enumerate()
        .map(|(node, result)| TableRow::new(node, result.as_ref()))
        .collect()
}

/// Render nodes as `a->b->c`
pub fn format_path<W: Weight>(path: &ShortestPath<W>) -> String {
    path.nodes()
        .map(|node| node.to_string())
        .collect::<Vec<_>>()
        .join("->")
}

/// Render per-step edge weights as `0, 2, 5`
pub fn format_costs<W: Weight>(path: &ShortestPath<W>) -> String {
    path.costs()
        .map(|cost| cost.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a single human-readable table row
pub fn format_row<W: Weight>(node: NodeId, result: Option<&ShortestPath<W>>) -> String {
    let (distance, path, costs) = match result {
        Some(path) => (
            path.distance.to_string(),
            format_path(path),
            format_costs(path),
        ),
        None => (UNREACHABLE_DISTANCE.to_string(), String::new(), String::new()),
    };
    format!("node: {node:<5} dist: {distance:<5} path: {path:<20} cost: {costs}")
        .trim_end()
        .to_string()
}

/// Render an all-targets result as one line per node
pub fn render_table<W: Weight>(results: &[Option<ShortestPath<W>>]) -> String {
    results
        .iter()
        .enumerate()
        .map(|(node, result)| format_row(node, result.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}
