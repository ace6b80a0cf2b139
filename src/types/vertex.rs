//! The vertex struct and its gated constructor.

use std::fmt;

use serde::Serialize;

use super::{canonical_text, GraphId, GraphResult, Payload, VertexId};
use crate::graph::{ConstructionKind, Graph};

/// A node holding an opaque value, owned by exactly one graph.
///
/// Vertices are immutable once minted, so the copy handed back by
/// [`Graph::create_vertex`] never drifts from the one the graph stores.
/// Relationship methods live in [`crate::graph::relate`].
#[derive(Debug, Clone, Serialize)]
pub struct Vertex<V> {
    id: VertexId,
    graph: GraphId,
    value: V,
}

impl<V> Vertex<V> {
    /// Construct a vertex owned by `graph`.
    ///
    /// Only succeeds while the graph's construction gate is open for a
    /// vertex, which is the case solely inside [`Graph::create_vertex`].
    /// Any other caller gets [`GraphError::ConstructionNotPermitted`](super::GraphError).
    pub fn new<W>(graph: &Graph<V, W>, value: V) -> GraphResult<Self> {
        graph.gate().admit(ConstructionKind::Vertex, graph.id())?;
        Ok(Self {
            id: VertexId::mint(),
            graph: graph.id(),
            value,
        })
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    /// The graph that owns this vertex. Fixed at creation.
    pub fn graph(&self) -> GraphId {
        self.graph
    }

    pub fn value(&self) -> &V {
        &self.value
    }
}

impl<V: Payload> fmt::Display for Vertex<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(value: {})", canonical_text(&self.value))
    }
}
