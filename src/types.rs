//! Public types for the hopgraph unified API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Public API types - these are what users should use
// ============================================================================

// Identifier types
pub use hopgraph_core::VertexId;
pub use hopgraph_core::VertexIdx;

// Error taxonomy
pub use hopgraph_core::{HopError, HopResult};

// Graph and query results
pub use hopgraph_engine::{ConnectionGraph, GraphStats, ShortestPath};

// Configuration
pub use hopgraph_engine::{GraphConfig, MAX_VERTEX_COUNT};

// Ingest results
pub use hopgraph_engine::IngestSummary;
