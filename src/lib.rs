//! hopgraph: undirected connection graphs with fewest-hop path queries.
//!
//! Feed the engine `origin,destination` identifier pairs (usually from a
//! headered CSV), then ask for shortest paths by edge count:
//!
//! ```
//! use hopgraph::{load_csv, ConnectionGraph, VertexId};
//!
//! let mut graph = ConnectionGraph::new();
//! let csv = "origin,destination\n1,2\n2,3\n";
//! load_csv(&mut graph, csv.as_bytes()).unwrap();
//!
//! let path = graph
//!     .shortest_path(VertexId::new(1), VertexId::new(3))
//!     .unwrap();
//! assert_eq!(path.to_string(), "1 -> 2 -> 3");
//! ```
//!
//! External identifiers are arbitrary `i64` values; internally they are
//! interned to dense indices in first-seen order, which also fixes the
//! deterministic tie-break among equally short paths. Unknown-vertex and
//! no-path outcomes come back as distinguishable [`HopError`] variants, not
//! panics or sentinel values.

pub mod types;

pub use hopgraph_core::{HopError, HopResult, VertexId};
pub use hopgraph_engine::{
    load_csv, load_csv_file, ConnectionGraph, GraphConfig, GraphStats, IngestSummary, ShortestPath,
};
