//! Identifier newtypes.
//!
//! External identifiers are arbitrary `i64` values from a sparse, unbounded
//! range; the registry maps them to dense zero-based `u32` indices. Keeping
//! the two spaces as distinct types makes it impossible to feed an external
//! identifier into an index-addressed structure by accident.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Externally visible vertex identifier, as it appears in the input CSV
/// and in query arguments. Negative values are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(i64);

impl VertexId {
    /// Wraps a raw identifier value.
    pub const fn new(id: i64) -> Self {
        VertexId(id)
    }

    /// The raw identifier value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for VertexId {
    fn from(id: i64) -> Self {
        VertexId(id)
    }
}

impl FromStr for VertexId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(VertexId)
    }
}

/// Dense internal vertex index, allocated sequentially from 0 by the
/// registry in first-seen order. The `u32` width bounds a graph at
/// `u32::MAX` distinct vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct VertexIdx(u32);

impl VertexIdx {
    /// Wraps a raw index.
    pub const fn new(raw: u32) -> Self {
        VertexIdx(raw)
    }

    /// The raw index value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The index widened for slice addressing.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VertexIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
