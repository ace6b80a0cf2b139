//! Single-slot construction permits.
//!
//! Each graph carries its own gate, so there is no process-wide permit
//! state. A permit authorizes exactly one pending construction per kind and
//! is not reentrant: opening an occupied slot fails.

use std::fmt;

use serde::Serialize;

use crate::types::{GraphError, GraphId, GraphResult};

/// The restricted types whose construction is gated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConstructionKind {
    Vertex,
    Edge,
}

impl ConstructionKind {
    /// Return a human-readable name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Edge => "edge",
        }
    }
}

impl fmt::Display for ConstructionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Per-graph admission control for vertex and edge constructors.
#[derive(Debug, Default)]
pub struct ConstructionGate {
    vertex: Option<GraphId>,
    edge: Option<GraphId>,
}

impl ConstructionGate {
    /// Create a gate with both slots closed.
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, kind: ConstructionKind) -> &Option<GraphId> {
        match kind {
            ConstructionKind::Vertex => &self.vertex,
            ConstructionKind::Edge => &self.edge,
        }
    }

    fn slot_mut(&mut self, kind: ConstructionKind) -> &mut Option<GraphId> {
        match kind {
            ConstructionKind::Vertex => &mut self.vertex,
            ConstructionKind::Edge => &mut self.edge,
        }
    }

    /// Authorize one construction of `kind` on behalf of `owner`.
    pub(crate) fn open_for(&mut self, kind: ConstructionKind, owner: GraphId) -> GraphResult<()> {
        let slot = self.slot_mut(kind);
        if slot.is_some() {
            return Err(GraphError::ConstructionInProgress { kind });
        }
        *slot = Some(owner);
        Ok(())
    }

    /// Clear the authorization for `kind`.
    pub(crate) fn close(&mut self, kind: ConstructionKind) {
        *self.slot_mut(kind) = None;
    }

    /// Whether a construction of `kind` is currently authorized.
    pub fn is_open_for(&self, kind: ConstructionKind) -> bool {
        self.slot(kind).is_some()
    }

    /// Check performed by the restricted constructors.
    pub fn admit(&self, kind: ConstructionKind, owner: GraphId) -> GraphResult<()> {
        match self.slot(kind) {
            Some(authorized) if *authorized == owner => Ok(()),
            _ => Err(GraphError::ConstructionNotPermitted { kind }),
        }
    }
}
