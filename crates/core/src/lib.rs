//! Core layer for hopgraph.
//!
//! Holds what every other crate shares: the [`HopError`] taxonomy and the
//! two identifier newtypes ([`VertexId`] for the external space, [`VertexIdx`]
//! for the dense internal space). No graph logic lives here.

pub mod error;
pub mod types;

pub use error::{HopError, HopResult};
pub use types::{VertexId, VertexIdx};
