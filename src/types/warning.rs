//! Non-fatal diagnostics raised while relationships are built.

use std::fmt;

use super::{EdgeId, GraphId, VertexId};

/// A recoverable condition. The operation that raised it still completes
/// and returns a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphWarning {
    /// An endpoint belonged to another graph and was cloned into this one.
    CrossGraphClone {
        original: VertexId,
        source_graph: GraphId,
        clone: VertexId,
        target_graph: GraphId,
    },
    /// A structurally identical edge was already stored; the stored edge was kept.
    DuplicateEdge {
        existing: EdgeId,
        discarded: EdgeId,
        rendered: String,
    },
}

impl fmt::Display for GraphWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CrossGraphClone {
                original,
                source_graph,
                clone,
                target_graph,
            } => write!(
                f,
                "Vertex {} belongs to graph {}; cloned into graph {} as {}",
                original, source_graph, target_graph, clone
            ),
            Self::DuplicateEdge { rendered, .. } => {
                write!(f, "Edge '{}' already exists", rendered)
            }
        }
    }
}
