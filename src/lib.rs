//! LabeledGraph: in-memory graph construction through a fluent relationship API.
//!
//! Vertices are minted only by their owning [`Graph`]; edges only by a vertex's
//! relationship methods or by chaining from another edge. Edges are
//! deduplicated by structure, and edges that would span two graphs are
//! resolved by the graph's [`CrossGraphPolicy`].

pub mod config;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::{CrossGraphPolicy, GraphConfig};
pub use graph::{
    ConstructionGate, ConstructionKind, EdgeCursor, Graph, GraphBuilder, Target,
};
pub use types::{
    canonical_text, Direction, Edge, EdgeId, EdgeKey, EdgeView, GraphError, GraphId,
    GraphResult, GraphWarning, Payload, Vertex, VertexId,
};
