//! Undirected connection graph.
//!
//! [`ConnectionGraph`] owns the identifier registry and the adjacency index.
//! The build phase feeds connection pairs through [`ConnectionGraph::add_connection`];
//! after that the graph is queried through `&self` methods only. Because no
//! query mutates or caches anything inside the graph, a finished graph is
//! safe to share read-only across threads.

pub mod adjacency;
pub mod registry;
pub mod traversal;
pub mod types;

pub use adjacency::AdjacencyIndex;
pub use registry::VertexRegistry;
pub use types::{GraphStats, ShortestPath};

use hopgraph_core::{HopError, HopResult, VertexId};

use crate::config::GraphConfig;

/// An undirected graph over external integer identifiers.
#[derive(Debug, Clone, Default)]
pub struct ConnectionGraph {
    registry: VertexRegistry,
    adjacency: AdjacencyIndex,
}

impl ConnectionGraph {
    /// An empty graph with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty graph honoring the limits in `config`.
    pub fn with_config(config: GraphConfig) -> Self {
        ConnectionGraph {
            registry: VertexRegistry::with_capacity_limit(config.max_vertices),
            adjacency: AdjacencyIndex::new(),
        }
    }

    // ===== Construction =====

    /// Records one undirected connection, registering unseen endpoints in
    /// first-seen order.
    ///
    /// Duplicate connections are idempotent. On a capacity rejection the
    /// graph gains no edge; an endpoint registered before the rejection
    /// stays registered as an isolated vertex.
    pub fn add_connection(&mut self, origin: VertexId, destination: VertexId) -> HopResult<()> {
        let u = self.registry.resolve_or_create(origin)?;
        let v = self.registry.resolve_or_create(destination)?;
        self.adjacency.add_edge(u, v);
        Ok(())
    }

    // ===== Queries =====

    /// Whether `id` appeared in any ingested connection.
    pub fn contains(&self, id: VertexId) -> bool {
        self.registry.contains(id)
    }

    /// Direct neighbors of `id`, in the ascending internal-index order the
    /// traversal uses (first-seen order, not numeric identifier order).
    pub fn neighbors_of(&self, id: VertexId) -> HopResult<Vec<VertexId>> {
        let idx = self
            .registry
            .resolve_existing(id)
            .ok_or_else(|| HopError::vertex_not_found(id))?;
        Ok(self
            .adjacency
            .neighbors(idx)
            .iter()
            .map(|&n| self.registry.external_of(n))
            .collect())
    }

    /// Distinct vertices registered.
    pub fn vertex_count(&self) -> usize {
        self.registry.len()
    }

    /// Distinct undirected connections.
    pub fn connection_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    /// True when no vertex has been registered.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Structural counts.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            vertices: self.vertex_count(),
            connections: self.connection_count(),
        }
    }
}
