//! Breadth-first shortest-path queries.
//!
//! Querying never mutates the graph: every call allocates its own traversal
//! state sized to the current vertex count and drops it on return. BFS
//! explores in non-decreasing distance order, so the first dequeue of the
//! destination yields a minimum-hop path. Ties among equal-length paths are
//! broken by the ascending-index neighbor order the adjacency lists
//! maintain, which is first-seen order. The tie-break is canonical for
//! reproducibility only, not a semantic preference.

use std::collections::VecDeque;

use hopgraph_core::{HopError, HopResult, VertexId, VertexIdx};

use super::types::ShortestPath;
use super::ConnectionGraph;

/// Per-query working set: per-vertex visited marks and predecessor links,
/// plus the FIFO frontier.
///
/// Owned by exactly one in-flight query and never reused, so no marks can
/// leak from one query into the next.
#[derive(Debug)]
struct TraversalState {
    visited: Vec<bool>,
    predecessor: Vec<Option<VertexIdx>>,
    frontier: VecDeque<VertexIdx>,
}

impl TraversalState {
    fn new(vertex_count: usize) -> Self {
        TraversalState {
            visited: vec![false; vertex_count],
            predecessor: vec![None; vertex_count],
            frontier: VecDeque::new(),
        }
    }

    fn is_visited(&self, v: VertexIdx) -> bool {
        self.visited[v.index()]
    }

    /// Marks `v` discovered through `from` and queues it for expansion.
    fn discover(&mut self, v: VertexIdx, from: Option<VertexIdx>) {
        self.visited[v.index()] = true;
        self.predecessor[v.index()] = from;
        self.frontier.push_back(v);
    }
}

impl ConnectionGraph {
    /// Finds a fewest-hop path between two external identifiers.
    ///
    /// Fails with [`HopError::VertexNotFound`] when either identifier never
    /// appeared in an ingested connection (the origin is checked first), and
    /// with [`HopError::PathNotFound`] when both are known but no sequence
    /// of connections joins them. Querying a vertex against itself returns
    /// the single-vertex path. Both failures are ordinary outcomes a caller
    /// branches on by variant.
    ///
    /// Each vertex is visited at most once: O(V + E) time, O(V) auxiliary
    /// space per call.
    pub fn shortest_path(
        &self,
        origin: VertexId,
        destination: VertexId,
    ) -> HopResult<ShortestPath> {
        let src = self
            .registry
            .resolve_existing(origin)
            .ok_or_else(|| HopError::vertex_not_found(origin))?;
        let dst = self
            .registry
            .resolve_existing(destination)
            .ok_or_else(|| HopError::vertex_not_found(destination))?;

        let mut state = TraversalState::new(self.vertex_count());
        state.discover(src, None);

        while let Some(current) = state.frontier.pop_front() {
            if current == dst {
                return Ok(self.reconstruct_path(&state, current));
            }
            for &neighbor in self.adjacency.neighbors(current) {
                if !state.is_visited(neighbor) {
                    state.discover(neighbor, Some(current));
                }
            }
        }

        Err(HopError::path_not_found(origin, destination))
    }

    /// Walks predecessor links back from `end` (the origin carries no
    /// predecessor), reverses into origin-to-destination order, and maps
    /// each index to its external identifier.
    fn reconstruct_path(&self, state: &TraversalState, end: VertexIdx) -> ShortestPath {
        let mut indices = Vec::new();
        let mut cursor = Some(end);
        while let Some(v) = cursor {
            indices.push(v);
            cursor = state.predecessor[v.index()];
        }
        indices.reverse();

        let vertices = indices
            .into_iter()
            .map(|v| self.registry.external_of(v))
            .collect();
        ShortestPath::new(vertices)
    }
}
