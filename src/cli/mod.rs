//! CLI argument parsing for bidijkstra
//!
//! Uses clap for argument parsing.
//! Supports global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use bidijkstra_core::format::OutputFormat;
pub use args::{AllArgs, BenchArgs, GraphArgs, PairArgs};
use parse::parse_output_format;

/// Bidijkstra - shortest paths with single-source and bidirectional Dijkstra
#[derive(Parser, Debug)]
#[command(name = "bidijkstra")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to ./bidijkstra.toml when present)
    #[arg(long, global = true, env = "BIDIJKSTRA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format: human or json [default: human]
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, bidijkstra_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shortest path between two nodes
    Path(PairArgs),

    /// Shortest distance between two nodes, without the path
    Distance(PairArgs),

    /// Shortest paths from a source to every node
    All(AllArgs),

    /// Run the built-in example graphs
    Demo,

    /// Time both engines on a point-to-point distance query
    Bench(BenchArgs),
}
