//! Rendering for query results, in text and JSON forms.
//!
//! Not-found outcomes are results, not failures: they render to stdout
//! lines just as paths do, each kind with its own wording.

use hopgraph_core::{HopError, HopResult, VertexId};
use hopgraph_engine::{GraphStats, ShortestPath};
use serde_json::json;

/// One line for a shortest-path outcome.
pub fn query_outcome_line(result: &HopResult<ShortestPath>, json_mode: bool) -> String {
    match result {
        Ok(path) => {
            if json_mode {
                json!({ "vertices": path.vertices(), "hops": path.hops() }).to_string()
            } else {
                path.to_string()
            }
        }
        Err(err) => error_line(err, json_mode),
    }
}

/// One line for a neighbors query.
pub fn neighbors_outcome_line(
    id: VertexId,
    result: &HopResult<Vec<VertexId>>,
    json_mode: bool,
) -> String {
    match result {
        Ok(neighbors) => {
            if json_mode {
                json!({ "id": id, "neighbors": neighbors }).to_string()
            } else if neighbors.is_empty() {
                format!("{id} has no neighbors")
            } else {
                let joined = neighbors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{id}: {joined}")
            }
        }
        Err(err) => error_line(err, json_mode),
    }
}

/// One line of graph counts.
pub fn stats_line(stats: &GraphStats, json_mode: bool) -> String {
    if json_mode {
        json!({ "vertices": stats.vertices, "connections": stats.connections }).to_string()
    } else {
        format!(
            "{} vertices, {} connections",
            stats.vertices, stats.connections
        )
    }
}

/// One line for any error, ordinary query outcomes included.
pub fn error_line(err: &HopError, json_mode: bool) -> String {
    if json_mode {
        json!({ "error": error_code(err), "message": err.to_string() }).to_string()
    } else {
        err.to_string()
    }
}

fn error_code(err: &HopError) -> &'static str {
    match err {
        HopError::VertexNotFound { .. } => "vertex_not_found",
        HopError::PathNotFound { .. } => "path_not_found",
        HopError::CapacityExceeded { .. } => "capacity_exceeded",
        HopError::InvalidInput { .. } => "invalid_input",
        HopError::Io { .. } => "io",
    }
}
