//! Graph engine for hopgraph.
//!
//! Owns the full data path: identifier interning (registry), symmetric
//! adjacency storage, CSV ingest, and the breadth-first shortest-path
//! engine. The lifecycle is build-then-freeze: a graph is mutated only
//! while connections load, then queried through `&self` methods that keep
//! all working state per call.

pub mod config;
pub mod graph;
pub mod ingest;

pub use config::{GraphConfig, MAX_VERTEX_COUNT};
pub use graph::{AdjacencyIndex, ConnectionGraph, GraphStats, ShortestPath, VertexRegistry};
pub use ingest::{load_csv, load_csv_file, IngestSummary};
