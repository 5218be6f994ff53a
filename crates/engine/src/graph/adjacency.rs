//! Adjacency storage over dense vertex indices.
//!
//! Neighbor lists are kept sorted by binary-search insertion; the one
//! mechanism gives idempotent edge insertion and the ascending-index
//! enumeration order that makes equal-length path selection deterministic.

use hopgraph_core::VertexIdx;
use smallvec::SmallVec;

/// Inline capacity sized for the short neighbor lists of sparse graphs.
type NeighborList = SmallVec<[VertexIdx; 8]>;

/// Symmetric adjacency lists indexed by [`VertexIdx`].
///
/// Invariant: for u != v, u appears in v's list iff v appears in u's.
/// Every list is strictly ascending.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    lists: Vec<NeighborList>,
    edges: usize,
}

impl AdjacencyIndex {
    /// An empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grows the index so `v` has a (possibly empty) neighbor list.
    pub fn ensure_vertex(&mut self, v: VertexIdx) {
        if v.index() >= self.lists.len() {
            self.lists.resize_with(v.index() + 1, NeighborList::new);
        }
    }

    /// Marks `u` and `v` adjacent in both directions.
    ///
    /// Idempotent: re-adding an existing edge changes neither the lists nor
    /// the edge count. Self-loops store a single entry and count once.
    pub fn add_edge(&mut self, u: VertexIdx, v: VertexIdx) {
        self.ensure_vertex(u);
        self.ensure_vertex(v);
        let inserted = insert_sorted(&mut self.lists[u.index()], v);
        if u != v {
            insert_sorted(&mut self.lists[v.index()], u);
        }
        if inserted {
            self.edges += 1;
        }
    }

    /// Neighbors of `v` in ascending index order. Indices the store has
    /// never seen have no neighbors.
    pub fn neighbors(&self, v: VertexIdx) -> &[VertexIdx] {
        match self.lists.get(v.index()) {
            Some(list) => list.as_slice(),
            None => &[],
        }
    }

    /// Number of vertices adjacent to `v`.
    pub fn degree(&self, v: VertexIdx) -> usize {
        self.neighbors(v).len()
    }

    /// Number of vertex slots the index covers.
    pub fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    /// Number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges
    }
}

/// Returns true when `v` was not already present.
fn insert_sorted(list: &mut NeighborList, v: VertexIdx) -> bool {
    match list.binary_search(&v) {
        Ok(_) => false,
        Err(pos) => {
            list.insert(pos, v);
            true
        }
    }
}
