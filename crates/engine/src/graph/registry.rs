//! Bidirectional identifier registry.
//!
//! Maps sparse external identifiers to dense internal indices assigned in
//! first-seen order. The forward direction is a hash map; the inverse is a
//! plain vector indexed by [`VertexIdx`], which keeps `external_of` an O(1)
//! array read on the path-reconstruction hot path.

use hopgraph_core::{HopError, HopResult, VertexId, VertexIdx};
use rustc_hash::FxHashMap;

use crate::config::MAX_VERTEX_COUNT;

/// First-seen interning of external identifiers.
///
/// Invariant: `forward` and `reverse` describe one bijection; the entry
/// `id -> idx` exists iff `reverse[idx] == id`. Indices are allocated
/// sequentially from 0 with no holes, and the registry never shrinks.
#[derive(Debug, Clone)]
pub struct VertexRegistry {
    forward: FxHashMap<VertexId, VertexIdx>,
    reverse: Vec<VertexId>,
    max_vertices: usize,
}

impl VertexRegistry {
    /// A registry bounded only by the index space.
    pub fn new() -> Self {
        Self::with_capacity_limit(MAX_VERTEX_COUNT)
    }

    /// A registry admitting at most `max_vertices` distinct identifiers,
    /// clamped to the index-space ceiling.
    pub fn with_capacity_limit(max_vertices: usize) -> Self {
        VertexRegistry {
            forward: FxHashMap::default(),
            reverse: Vec::new(),
            max_vertices: max_vertices.min(MAX_VERTEX_COUNT),
        }
    }

    /// Returns the index for `id`, allocating the next unused one on first
    /// sight.
    ///
    /// Fails with [`HopError::CapacityExceeded`] when admitting a new
    /// identifier would pass the configured limit; the failed call mutates
    /// nothing.
    pub fn resolve_or_create(&mut self, id: VertexId) -> HopResult<VertexIdx> {
        if let Some(&idx) = self.forward.get(&id) {
            return Ok(idx);
        }
        let assigned = self.reverse.len();
        if assigned >= self.max_vertices {
            return Err(HopError::capacity_exceeded(
                "vertices",
                self.max_vertices as u64,
                assigned as u64 + 1,
            ));
        }
        let idx = VertexIdx::new(assigned as u32);
        self.forward.insert(id, idx);
        self.reverse.push(id);
        Ok(idx)
    }

    /// Read-only lookup; `None` when `id` was never registered.
    pub fn resolve_existing(&self, id: VertexId) -> Option<VertexIdx> {
        self.forward.get(&id).copied()
    }

    /// Inverse lookup for an index this registry produced.
    ///
    /// Indexing is deliberate: an out-of-range index means the bijection
    /// invariant was broken by a bug, not a user error.
    pub fn external_of(&self, idx: VertexIdx) -> VertexId {
        self.reverse[idx.index()]
    }

    /// Whether `id` has been registered.
    pub fn contains(&self, id: VertexId) -> bool {
        self.forward.contains_key(&id)
    }

    /// Number of distinct identifiers registered.
    pub fn len(&self) -> usize {
        self.reverse.len()
    }

    /// True when nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.reverse.is_empty()
    }

    /// The effective admission limit.
    pub fn capacity_limit(&self) -> usize {
        self.max_vertices
    }
}

impl Default for VertexRegistry {
    fn default() -> Self {
        Self::new()
    }
}
