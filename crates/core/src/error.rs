//! Error taxonomy for hopgraph.
//!
//! One enum covers the whole system. The two query outcomes
//! ([`HopError::VertexNotFound`], [`HopError::PathNotFound`]) are ordinary,
//! expected results that callers branch on by variant; the remaining variants
//! are genuine failures. Malformed CSV rows never become errors; the ingest
//! layer skips them locally.

use thiserror::Error;

use crate::types::VertexId;

/// Result alias used across the workspace.
pub type HopResult<T> = Result<T, HopError>;

/// All errors produced by hopgraph.
#[derive(Debug, Error)]
pub enum HopError {
    /// A query referenced an identifier that never appeared in any
    /// ingested connection.
    #[error("vertex not found: {id}")]
    VertexNotFound {
        /// The unknown external identifier.
        id: VertexId,
    },

    /// Both endpoints are known but no sequence of connections joins them.
    #[error("no path between {origin} and {destination}")]
    PathNotFound {
        /// Query origin.
        origin: VertexId,
        /// Query destination.
        destination: VertexId,
    },

    /// Admitting another distinct identifier would exceed a configured or
    /// structural bound. Recoverable: the registry rejects the identifier
    /// and mutates nothing.
    #[error("capacity exceeded for {resource}: limit {limit}, requested {requested}")]
    CapacityExceeded {
        /// Which bound was hit.
        resource: String,
        /// The configured limit.
        limit: u64,
        /// What admitting the input would have required.
        requested: u64,
    },

    /// Malformed arguments at an interface boundary (REPL/CLI parsing).
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Human-readable description.
        message: String,
    },

    /// The input source could not be opened or read. Fatal for a run:
    /// with no graph there is nothing to query.
    #[error("{message}")]
    Io {
        /// What was being attempted, with path context.
        message: String,
        /// Underlying I/O error, when one exists.
        #[source]
        source: Option<std::io::Error>,
    },
}

impl HopError {
    /// An unknown-identifier query outcome.
    pub fn vertex_not_found(id: VertexId) -> Self {
        HopError::VertexNotFound { id }
    }

    /// A disconnected-pair query outcome.
    pub fn path_not_found(origin: VertexId, destination: VertexId) -> Self {
        HopError::PathNotFound {
            origin,
            destination,
        }
    }

    /// A capacity rejection for the named resource.
    pub fn capacity_exceeded(resource: impl Into<String>, limit: u64, requested: u64) -> Self {
        HopError::CapacityExceeded {
            resource: resource.into(),
            limit,
            requested,
        }
    }

    /// An interface-layer validation failure.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        HopError::InvalidInput {
            message: message.into(),
        }
    }

    /// An I/O failure with its cause attached.
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        HopError::Io {
            message: message.into(),
            source: Some(source),
        }
    }
}
