//! Edge direction, the core edge struct, and its structural key.

use std::fmt;

use serde::Serialize;

use super::{canonical_text, EdgeId, GraphError, GraphId, GraphResult, Payload, Vertex, VertexId};
use crate::graph::{ConstructionKind, Graph};

/// Which endpoint an edge's arrow points toward. Purely a label: it does
/// not restrict how the edge may be followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    /// Arrow points from `vertex2` toward `vertex1`.
    Left,
    /// Arrow points from `vertex1` toward `vertex2`.
    Right,
    /// No arrow.
    None,
}

impl Direction {
    /// Return a human-readable name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::None => "none",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Structural identity of an edge: two edges with equal keys are duplicates
/// regardless of their own ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub vertex1: VertexId,
    pub vertex2: VertexId,
    pub direction: Direction,
    /// Canonical text of the weight, `None` when unset.
    pub weight: Option<String>,
}

/// A directed or undirected connector between two vertices of one graph.
#[derive(Debug, Clone, Serialize)]
pub struct Edge<W> {
    id: EdgeId,
    graph: GraphId,
    vertex1: VertexId,
    vertex2: VertexId,
    direction: Direction,
    weight: Option<W>,
}

impl<W> Edge<W> {
    /// Construct an edge owned by `graph`.
    ///
    /// Only succeeds while the graph's construction gate is open for an
    /// edge, i.e. inside one of the relationship methods. Both endpoints
    /// must already be vertices of `graph`.
    pub fn new<V>(
        graph: &Graph<V, W>,
        vertex1: VertexId,
        vertex2: VertexId,
        direction: Direction,
        weight: Option<W>,
    ) -> GraphResult<Self> {
        graph.gate().admit(ConstructionKind::Edge, graph.id())?;
        for endpoint in [vertex1, vertex2] {
            if !graph.contains_vertex(endpoint) {
                return Err(GraphError::MissingEndpoint(endpoint));
            }
        }
        Ok(Self {
            id: EdgeId::mint(),
            graph: graph.id(),
            vertex1,
            vertex2,
            direction,
            weight,
        })
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// The graph that owns this edge and both of its endpoints.
    pub fn graph(&self) -> GraphId {
        self.graph
    }

    pub fn vertex1(&self) -> VertexId {
        self.vertex1
    }

    pub fn vertex2(&self) -> VertexId {
        self.vertex2
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn weight(&self) -> Option<&W> {
        self.weight.as_ref()
    }

    pub(crate) fn set_weight(&mut self, weight: Option<W>) {
        self.weight = weight;
    }
}

impl<W: Payload> Edge<W> {
    /// Derive the structural key used for deduplication.
    pub fn key(&self) -> EdgeKey {
        EdgeKey {
            vertex1: self.vertex1,
            vertex2: self.vertex2,
            direction: self.direction,
            weight: self.weight.as_ref().map(canonical_text),
        }
    }
}

/// An edge together with its resolved endpoints, ready for rendering.
#[derive(Debug)]
pub struct EdgeView<'g, V, W> {
    pub edge: &'g Edge<W>,
    pub vertex1: &'g Vertex<V>,
    pub vertex2: &'g Vertex<V>,
}

impl<V: Payload, W: Payload> fmt::Display for EdgeView<'_, V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weight = match self.edge.weight() {
            Some(weight) => format!("weight: {}", canonical_text(weight)),
            None => String::new(),
        };
        let rel = match self.edge.direction() {
            Direction::Left => format!("<--[{}]--", weight),
            Direction::Right => format!("--[{}]-->", weight),
            Direction::None => format!("--[{}]--", weight),
        };
        write!(f, "{} {} {}", self.vertex1, rel, self.vertex2)
    }
}
