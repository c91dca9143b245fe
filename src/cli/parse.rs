use super::args::EdgeSpec;
use bidijkstra_core::error::PathError;
use bidijkstra_core::format::OutputFormat;
use bidijkstra_core::graph::EngineKind;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse engine kind from string
pub fn parse_engine(s: &str) -> std::result::Result<EngineKind, String> {
    s.parse::<EngineKind>().map_err(|e| e.to_string())
}

/// Parse an edge given as `from,to,weight`
pub fn parse_edge(s: &str) -> std::result::Result<EdgeSpec, String> {
    edge_spec(s).map_err(|e| e.to_string())
}

fn edge_spec(s: &str) -> Result<EdgeSpec, PathError> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [from, to, weight] = parts.as_slice() else {
        return Err(PathError::invalid_edge(s, "expected from,to,weight"));
    };

    let from = from
        .parse()
        .map_err(|_| PathError::invalid_edge(s, format!("bad node id '{from}'")))?;
    let to = to
        .parse()
        .map_err(|_| PathError::invalid_edge(s, format!("bad node id '{to}'")))?;
    let weight: i64 = weight
        .parse()
        .map_err(|_| PathError::invalid_edge(s, format!("bad weight '{weight}'")))?;
    if weight < 0 {
        return Err(PathError::invalid_edge(s, "weights must be non-negative"));
    }

    Ok(EdgeSpec { from, to, weight })
}
