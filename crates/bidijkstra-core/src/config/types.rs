//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;
use crate::graph::EngineKind;

/// File name looked up in the working directory when no `--config` is given
pub const CONFIG_FILE_NAME: &str = "bidijkstra.toml";

/// Default number of timed queries per engine for `bench`
pub const DEFAULT_BENCH_ITERATIONS: u32 = 1000;

/// Command-line defaults loaded from `bidijkstra.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Engine used by `path`, `distance` and `all`
    #[serde(default)]
    pub engine: EngineKind,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Add every `--edge` in both directions
    #[serde(default)]
    pub undirected: bool,

    /// Log level or filter directive (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Benchmark settings
    #[serde(default)]
    pub bench: BenchConfig,
}

/// Configuration for the `bench` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Timed queries per engine
    #[serde(default = "default_bench_iterations")]
    pub iterations: u32,
}

fn default_bench_iterations() -> u32 {
    DEFAULT_BENCH_ITERATIONS
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_BENCH_ITERATIONS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: EngineKind::default(),
            format: OutputFormat::default(),
            undirected: false,
            log_level: None,
            bench: BenchConfig::default(),
        }
    }
}
