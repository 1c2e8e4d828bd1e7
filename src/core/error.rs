//! Error types for graph mutation and host-side lookups.

use thiserror::Error;

/// Errors raised when a graph operation is given invalid input.
///
/// Read-only queries never return these: an out-of-range vertex passed to
/// a query panics instead, see `Graph::neighbors`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Vertex index outside `0..order`.
    #[error("vertex {vertex} out of range for graph of order {order}")]
    VertexOutOfRange { vertex: usize, order: usize },

    /// Both endpoints of an edge are the same vertex.
    #[error("self-loop on vertex {vertex} is not allowed")]
    SelfLoop { vertex: usize },

    /// Edges must carry a positive weight; zero means "no edge".
    #[error("edge ({from}, {to}) must have a positive weight")]
    ZeroWeight { from: usize, to: usize },

    /// Location name not registered in a `LocationIndex`.
    #[error("unknown location '{name}'")]
    UnknownLocation { name: String },
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
