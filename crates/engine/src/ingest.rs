//! CSV connection ingest.
//!
//! Input format: a header line (discarded unexamined), then one
//! `<integer>,<integer>` connection per line. A row is applied only when it
//! parses as exactly two integers separated by one comma, with no quoting
//! and no whitespace tolerance beyond what integer parsing permits. Anything
//! else
//! is a malformed row: skipped where it stands, counted, logged at debug
//! level, never an error.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use hopgraph_core::{HopError, HopResult, VertexId};
use serde::{Deserialize, Serialize};

use crate::graph::ConnectionGraph;

/// Work accounting for one CSV load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestSummary {
    /// Data rows parsed and applied, duplicates included.
    pub rows_applied: usize,
    /// Data rows skipped as malformed.
    pub rows_skipped: usize,
}

/// Loads connections from the file at `path` into `graph`.
///
/// An unopenable file is fatal for the run: reported as [`HopError::Io`]
/// with the path in the message, leaving `graph` untouched.
pub fn load_csv_file(
    graph: &mut ConnectionGraph,
    path: impl AsRef<Path>,
) -> HopResult<IngestSummary> {
    let path = path.as_ref();
    let file =
        File::open(path).map_err(|e| HopError::io(format!("cannot open {}", path.display()), e))?;
    let summary = load_csv(graph, BufReader::new(file))?;
    tracing::info!(
        target: "hopgraph::ingest",
        path = %path.display(),
        rows_applied = summary.rows_applied,
        rows_skipped = summary.rows_skipped,
        vertices = graph.vertex_count(),
        "csv load complete"
    );
    Ok(summary)
}

/// Loads connections from any line-oriented reader into `graph`.
///
/// The first line is a header and is discarded whatever it contains. Read
/// failures and capacity rejections abort the load; malformed rows do not.
pub fn load_csv<R: BufRead>(graph: &mut ConnectionGraph, reader: R) -> HopResult<IngestSummary> {
    let mut summary = IngestSummary::default();
    let mut lines = reader.lines();

    if let Some(header) = lines.next() {
        header.map_err(|e| HopError::io("failed reading csv header", e))?;
    }

    for (offset, line) in lines.enumerate() {
        let line =
            line.map_err(|e| HopError::io(format!("failed reading csv line {}", offset + 2), e))?;
        match parse_connection(&line) {
            Some((origin, destination)) => {
                graph.add_connection(origin, destination)?;
                summary.rows_applied += 1;
            }
            None => {
                summary.rows_skipped += 1;
                tracing::debug!(
                    target: "hopgraph::ingest",
                    line = offset + 2,
                    content = %line,
                    "skipping malformed csv row"
                );
            }
        }
    }

    Ok(summary)
}

/// Parses one data row; `None` marks it malformed. A trailing `\r` left by
/// CRLF line endings belongs to the line terminator, not the field, and is
/// stripped before parsing.
fn parse_connection(line: &str) -> Option<(VertexId, VertexId)> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let (origin, destination) = line.split_once(',')?;
    let origin = origin.parse::<VertexId>().ok()?;
    let destination = destination.parse::<VertexId>().ok()?;
    Some((origin, destination))
}
