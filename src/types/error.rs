//! Error types for the labeled graph library.

use thiserror::Error;

use super::{EdgeId, GraphId, VertexId};
use crate::graph::ConstructionKind;

/// All fatal errors that can occur while building a graph.
///
/// Recoverable conditions (cross-graph clones, duplicate edges) are not
/// errors; they surface as [`GraphWarning`](super::GraphWarning)s.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A vertex or edge was constructed outside its owning graph's factory.
    #[error("Construction of {kind} not permitted: {kind}s must be created through their graph")]
    ConstructionNotPermitted { kind: ConstructionKind },

    /// The construction gate was opened while a construction of the same kind was pending.
    #[error("Construction of {kind} already in progress")]
    ConstructionInProgress { kind: ConstructionKind },

    /// An edge endpoint does not resolve in the owning graph.
    #[error("Edge endpoint {0} is missing from the graph")]
    MissingEndpoint(VertexId),

    /// A relationship was started from a vertex the graph does not own.
    #[error("Vertex {vertex} is not owned by graph {graph}")]
    ForeignVertex { vertex: VertexId, graph: GraphId },

    /// The graph rejects edges whose endpoint belongs to another graph.
    #[error("Vertex {vertex} belongs to graph {source_graph}, not {target_graph}")]
    CrossGraphEdge {
        vertex: VertexId,
        source_graph: GraphId,
        target_graph: GraphId,
    },

    /// Vertex not found by ID.
    #[error("Vertex {0} not found")]
    VertexNotFound(VertexId),

    /// Edge not found by ID.
    #[error("Edge {0} not found")]
    EdgeNotFound(EdgeId),

    /// Configuration could not be parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
