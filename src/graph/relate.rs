//! Fluent relationship building: vertex edge methods and the edge cursor.
//!
//! ```
//! use labeled_graph::Graph;
//!
//! let mut g: Graph<i64, &str> = Graph::new();
//! let v1 = g.create_vertex(1)?;
//! let v2 = g.create_vertex(2)?;
//! let v3 = g.create_vertex(3)?;
//!
//! let e = v1.redge(&mut g, &v2, Some("W"))?.edge(&v3, None)?;
//! assert_eq!(e.to_string(), "(value: 2) --[]-- (value: 3)");
//! assert_eq!(g.edge_count(), 2);
//! # Ok::<(), labeled_graph::GraphError>(())
//! ```

use std::fmt;

use crate::config::CrossGraphPolicy;
use crate::types::{
    Direction, Edge, EdgeId, EdgeView, GraphError, GraphResult, Payload, Vertex, VertexId,
};

use super::gate::ConstructionKind;
use super::Graph;

impl<V: Payload> Vertex<V> {
    /// Join `self` to `other` with an undirected edge.
    pub fn edge<'g, W: Payload>(
        &self,
        graph: &'g mut Graph<V, W>,
        other: &Vertex<V>,
        weight: Option<W>,
    ) -> GraphResult<EdgeCursor<'g, V, W>> {
        graph.relate(self, other, Direction::None, weight)
    }

    /// Join `self` to `other` with an edge whose arrow points at `self`.
    pub fn ledge<'g, W: Payload>(
        &self,
        graph: &'g mut Graph<V, W>,
        other: &Vertex<V>,
        weight: Option<W>,
    ) -> GraphResult<EdgeCursor<'g, V, W>> {
        graph.relate(self, other, Direction::Left, weight)
    }

    /// Join `self` to `other` with an edge whose arrow points at `other`.
    pub fn redge<'g, W: Payload>(
        &self,
        graph: &'g mut Graph<V, W>,
        other: &Vertex<V>,
        weight: Option<W>,
    ) -> GraphResult<EdgeCursor<'g, V, W>> {
        graph.relate(self, other, Direction::Right, weight)
    }
}

impl<V: Payload, W: Payload> Graph<V, W> {
    /// Shared algorithm behind every relationship method.
    pub(crate) fn relate(
        &mut self,
        from: &Vertex<V>,
        to: &Vertex<V>,
        direction: Direction,
        weight: Option<W>,
    ) -> GraphResult<EdgeCursor<'_, V, W>> {
        if from.graph() != self.id() || !self.contains_vertex(from.id()) {
            return Err(GraphError::ForeignVertex {
                vertex: from.id(),
                graph: self.id(),
            });
        }
        let target = self.resolve_target(to)?;

        let edge = self.gated(ConstructionKind::Edge, |graph| {
            Edge::new(graph, from.id(), target, direction, weight)
        })?;
        let idx = self.absorb_edge(edge);
        Ok(EdgeCursor { graph: self, idx })
    }

    /// Apply the cross-graph policy to an edge's second endpoint.
    fn resolve_target(&mut self, to: &Vertex<V>) -> GraphResult<VertexId> {
        if to.graph() == self.id() {
            return Ok(to.id());
        }
        match self.config().cross_graph {
            CrossGraphPolicy::Clone => Ok(self.clone_foreign(to)?.id()),
            CrossGraphPolicy::Reject => Err(GraphError::CrossGraphEdge {
                vertex: to.id(),
                source_graph: to.graph(),
                target_graph: self.id(),
            }),
        }
    }
}

/// What an edge cursor may chain onto.
#[derive(Debug)]
pub enum Target<'a, V, W> {
    /// Chain onto a vertex directly.
    Vertex(&'a Vertex<V>),
    /// Chain onto the first endpoint of an edge stored in the cursor's graph.
    Edge(&'a Edge<W>),
    /// Chain onto the first endpoint of a resolved edge, possibly owned by
    /// another graph. A foreign endpoint goes through cross-graph resolution.
    View(EdgeView<'a, V, W>),
}

impl<'a, V, W> From<&'a Vertex<V>> for Target<'a, V, W> {
    fn from(vertex: &'a Vertex<V>) -> Self {
        Self::Vertex(vertex)
    }
}

impl<'a, V, W> From<&'a Edge<W>> for Target<'a, V, W> {
    fn from(edge: &'a Edge<W>) -> Self {
        Self::Edge(edge)
    }
}

impl<'a, V, W> From<EdgeView<'a, V, W>> for Target<'a, V, W> {
    fn from(view: EdgeView<'a, V, W>) -> Self {
        Self::View(view)
    }
}

/// A handle on a stored edge that keeps the graph borrowed, so weights can be
/// updated and further hops chained fluently.
///
/// A cursor always points at the edge the graph actually stores: when a
/// relationship turns out to be a duplicate, it points at the existing edge.
pub struct EdgeCursor<'g, V, W> {
    graph: &'g mut Graph<V, W>,
    idx: usize,
}

impl<'g, V: Payload, W: Payload> EdgeCursor<'g, V, W> {
    /// The stored edge.
    pub fn as_edge(&self) -> &Edge<W> {
        &self.graph.edges()[self.idx]
    }

    pub fn id(&self) -> EdgeId {
        self.as_edge().id()
    }

    /// First endpoint, resolved through the graph.
    pub fn vertex1(&self) -> Option<&Vertex<V>> {
        self.graph.vertex(self.as_edge().vertex1())
    }

    /// Second endpoint, resolved through the graph. After a cross-graph
    /// clone this is the clone, not the caller's original vertex.
    pub fn vertex2(&self) -> Option<&Vertex<V>> {
        self.graph.vertex(self.as_edge().vertex2())
    }

    /// The graph this cursor borrows.
    pub fn graph(&self) -> &Graph<V, W> {
        &*self.graph
    }

    /// Set the weight in place.
    ///
    /// If the reweighted edge becomes structurally identical to another
    /// stored edge, it is merged into that edge and the cursor moves there.
    pub fn update(mut self, weight: W) -> Self {
        self.idx = self.graph.reweigh(self.idx, Some(weight));
        self
    }

    /// Remove the weight in place. Same merge rule as [`EdgeCursor::update`].
    pub fn clear_weight(mut self) -> Self {
        self.idx = self.graph.reweigh(self.idx, None);
        self
    }

    /// Continue the path with an undirected edge from this edge's second endpoint.
    pub fn edge<'a>(
        self,
        other: impl Into<Target<'a, V, W>>,
        weight: Option<W>,
    ) -> GraphResult<EdgeCursor<'g, V, W>>
    where
        V: 'a,
        W: 'a,
    {
        self.chain(other.into(), Direction::None, weight)
    }

    /// Continue the path with a left-pointing edge from this edge's second endpoint.
    pub fn ledge<'a>(
        self,
        other: impl Into<Target<'a, V, W>>,
        weight: Option<W>,
    ) -> GraphResult<EdgeCursor<'g, V, W>>
    where
        V: 'a,
        W: 'a,
    {
        self.chain(other.into(), Direction::Left, weight)
    }

    /// Continue the path with a right-pointing edge from this edge's second endpoint.
    pub fn redge<'a>(
        self,
        other: impl Into<Target<'a, V, W>>,
        weight: Option<W>,
    ) -> GraphResult<EdgeCursor<'g, V, W>>
    where
        V: 'a,
        W: 'a,
    {
        self.chain(other.into(), Direction::Right, weight)
    }

    /// `e.edge(x)` behaves as `e.vertex2.edge(x)`; an edge target stands for
    /// its first endpoint.
    fn chain(
        self,
        target: Target<'_, V, W>,
        direction: Direction,
        weight: Option<W>,
    ) -> GraphResult<EdgeCursor<'g, V, W>> {
        let from_id = self.as_edge().vertex2();
        let from = self
            .graph
            .vertex(from_id)
            .cloned()
            .ok_or(GraphError::MissingEndpoint(from_id))?;
        let to = match target {
            Target::Vertex(vertex) => vertex.clone(),
            Target::View(view) => view.vertex1.clone(),
            // Bare ids only resolve here; pass an `EdgeView` for foreign edges.
            Target::Edge(edge) => self
                .graph
                .vertex(edge.vertex1())
                .cloned()
                .ok_or(GraphError::MissingEndpoint(edge.vertex1()))?,
        };
        let graph = self.graph;
        graph.relate(&from, &to, direction, weight)
    }
}

impl<V: Payload, W: Payload> fmt::Display for EdgeCursor<'_, V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.graph.view_at(self.idx) {
            Some(view) => fmt::Display::fmt(&view, f),
            None => Err(fmt::Error),
        }
    }
}

impl<V: Payload, W: Payload> fmt::Debug for EdgeCursor<'_, V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeCursor")
            .field("edge", self.as_edge())
            .finish()
    }
}
