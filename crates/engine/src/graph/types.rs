//! Result types for graph queries.

use std::fmt;

use hopgraph_core::VertexId;
use serde::{Deserialize, Serialize};

/// A fewest-hop path between two vertices, origin to destination inclusive.
///
/// Never empty: a self-query yields a single-vertex path with zero hops.
/// `Display` renders the query-interface wire form: identifiers joined by
/// `" -> "`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPath {
    vertices: Vec<VertexId>,
}

impl ShortestPath {
    pub(crate) fn new(vertices: Vec<VertexId>) -> Self {
        debug_assert!(!vertices.is_empty());
        ShortestPath { vertices }
    }

    /// The vertices in origin-to-destination order.
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Number of edges traversed, one less than the vertex count.
    pub fn hops(&self) -> usize {
        self.vertices.len() - 1
    }

    /// First vertex of the path.
    pub fn origin(&self) -> VertexId {
        self.vertices[0]
    }

    /// Last vertex of the path.
    pub fn destination(&self) -> VertexId {
        self.vertices[self.vertices.len() - 1]
    }
}

impl fmt::Display for ShortestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", id)?;
        }
        Ok(())
    }
}

/// Structural counts for one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    /// Distinct vertices registered.
    pub vertices: usize,
    /// Distinct undirected connections (self-loops count once).
    pub connections: usize,
}
