//! Error types and exit codes for bidijkstra
//!
//! Shortest-path queries never fail: an out-of-range node or an unreachable
//! target yields an absent result. The errors here come from strict graph
//! construction, argument parsing, configuration and I/O.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (node out of range, malformed edge, missing config)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

use crate::graph::NodeId;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph input or config (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during bidijkstra operations
#[derive(Error, Debug)]
pub enum PathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown engine: {0} (expected: dijkstra or bidirectional)")]
    UnknownEngine(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("node {node} out of range (graph has {node_count} nodes)")]
    NodeOutOfRange { node: NodeId, node_count: usize },

    #[error("invalid edge '{spec}': {reason}")]
    InvalidEdge { spec: String, reason: String },

    #[error("graph has no reverse adjacency (required for bidirectional search)")]
    MissingReverseAdjacency,

    #[error("config not found: {path:?}")]
    ConfigNotFound { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl PathError {
    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PathError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a malformed `u,v,w` edge description
    pub fn invalid_edge(spec: &str, reason: impl std::fmt::Display) -> Self {
        PathError::InvalidEdge {
            spec: spec.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PathError::UnknownFormat(_)
            | PathError::UnknownEngine(_)
            | PathError::UsageError(_)
            | PathError::InvalidValue { .. } => ExitCode::Usage,

            PathError::NodeOutOfRange { .. }
            | PathError::InvalidEdge { .. }
            | PathError::MissingReverseAdjacency
            | PathError::ConfigNotFound { .. } => ExitCode::Data,

            PathError::Io(_)
            | PathError::Json(_)
            | PathError::Toml(_)
            | PathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            PathError::UnknownFormat(_) => "unknown_format",
            PathError::UnknownEngine(_) => "unknown_engine",
            PathError::UsageError(_) => "usage_error",
            PathError::InvalidValue { .. } => "invalid_value",
            PathError::NodeOutOfRange { .. } => "node_out_of_range",
            PathError::InvalidEdge { .. } => "invalid_edge",
            PathError::MissingReverseAdjacency => "missing_reverse_adjacency",
            PathError::ConfigNotFound { .. } => "config_not_found",
            PathError::Io(_) => "io_error",
            PathError::Json(_) => "json_error",
            PathError::Toml(_) => "toml_error",
            PathError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for bidijkstra operations
pub type Result<T> = std::result::Result<T, PathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            PathError::UnknownFormat("xml".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            PathError::NodeOutOfRange {
                node: 9,
                node_count: 3
            }
            .exit_code(),
            ExitCode::Data
        );
        assert_eq!(PathError::Other("boom".into()).exit_code(), ExitCode::Failure);
        assert_eq!(i32::from(ExitCode::Data), 3);
    }

    #[test]
    fn test_display_messages() {
        let err = PathError::NodeOutOfRange {
            node: 9,
            node_count: 3,
        };
        assert_eq!(err.to_string(), "node 9 out of range (graph has 3 nodes)");

        let err = PathError::invalid_edge("1,x,3", "bad node id");
        assert_eq!(err.to_string(), "invalid edge '1,x,3': bad node id");
    }

    #[test]
    fn test_to_json_envelope() {
        let json = PathError::MissingReverseAdjacency.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "missing_reverse_adjacency");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("reverse adjacency"));
    }

    #[test]
    fn test_bail_invalid() {
        fn invalid() -> Result<()> {
            crate::bail_invalid!("iterations", 0);
        }

        let err = invalid().unwrap_err();
        assert!(matches!(err, PathError::InvalidValue { .. }));
        assert_eq!(err.to_string(), "invalid iterations: 0");
    }

    #[test]
    fn test_json_error_converts() {
        fn parse() -> Result<serde_json::Value> {
            Ok(serde_json::from_str("{")?)
        }

        let err = parse().unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::Failure);
        assert_eq!(err.error_type(), "json_error");
    }
}
