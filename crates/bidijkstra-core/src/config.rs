//! Command-line configuration for bidijkstra
//!
//! Defaults come from `bidijkstra.toml` in the working directory, or from the
//! file named by `--config`. Command-line flags override both.

pub mod types;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PathError, Result};

pub use types::{BenchConfig, Config, CONFIG_FILE_NAME, DEFAULT_BENCH_ITERATIONS};

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        if config.bench.iterations == 0 {
            crate::bail_invalid!("bench.iterations", config.bench.iterations);
        }
        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must exist. Otherwise `CONFIG_FILE_NAME` in `dir` is
    /// used when present, and defaults apply when it is not.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(PathError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            debug!(path = %path.display(), "load_config");
            return Self::load(path);
        }

        let discovered = dir.join(CONFIG_FILE_NAME);
        if discovered.is_file() {
            debug!(path = %discovered.display(), "load_config");
            Self::load(&discovered)
        } else {
            Ok(Self::default())
        }
    }
}
