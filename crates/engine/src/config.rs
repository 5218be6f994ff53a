//! Engine configuration.
//!
//! No configuration file backs these values; they come from code or from
//! CLI flags. The only tunable is the vertex admission limit.

/// Hard ceiling on distinct vertices, fixed by the `u32` index width.
pub const MAX_VERTEX_COUNT: usize = u32::MAX as usize;

/// Construction-time limits for a [`ConnectionGraph`](crate::graph::ConnectionGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// Maximum distinct external identifiers the registry admits. Values
    /// above [`MAX_VERTEX_COUNT`] are clamped to it.
    pub max_vertices: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            max_vertices: MAX_VERTEX_COUNT,
        }
    }
}

impl GraphConfig {
    /// Sets the vertex admission limit.
    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }
}
