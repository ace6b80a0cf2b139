//! Core graph structure: vertex and edge arenas plus the structural-key index.

use std::collections::HashMap;

use crate::config::GraphConfig;
use crate::types::{
    Edge, EdgeId, EdgeKey, EdgeView, GraphError, GraphId, GraphResult, GraphWarning, Payload,
    Vertex, VertexId,
};

use super::gate::{ConstructionGate, ConstructionKind};

/// A graph of vertices valued `V` joined by edges weighted `W`.
///
/// The graph is the sole authority for minting vertices and exclusively owns
/// both collections. Vertices and edges refer to each other by id and are
/// resolved through the graph on demand.
pub struct Graph<V, W = V> {
    id: GraphId,
    config: GraphConfig,
    gate: ConstructionGate,
    /// All vertices, in creation order.
    vertices: Vec<Vertex<V>>,
    /// VertexId -> position in `vertices`.
    vertex_index: HashMap<VertexId, usize>,
    /// All stored edges.
    edges: Vec<Edge<W>>,
    /// EdgeId -> position in `edges`.
    edge_index: HashMap<EdgeId, usize>,
    /// Structural key -> the one stored edge carrying it.
    edge_keys: HashMap<EdgeKey, EdgeId>,
    /// Journal of diagnostics not yet taken by the caller.
    warnings: Vec<GraphWarning>,
}

impl<V, W> Graph<V, W> {
    /// Create a new empty graph with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create a new empty graph with an explicit configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            id: GraphId::mint(),
            config,
            gate: ConstructionGate::new(),
            vertices: Vec::new(),
            vertex_index: HashMap::new(),
            edges: Vec::new(),
            edge_index: HashMap::new(),
            edge_keys: HashMap::new(),
            warnings: Vec::new(),
        }
    }

    pub fn id(&self) -> GraphId {
        self.id
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// The construction gate guarding this graph's vertices and edges.
    pub fn gate(&self) -> &ConstructionGate {
        &self.gate
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get all vertices (immutable slice).
    pub fn vertices(&self) -> &[Vertex<V>] {
        &self.vertices
    }

    /// Get all stored edges (immutable slice).
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Get a vertex by ID.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<V>> {
        self.vertex_index.get(&id).map(|&idx| &self.vertices[idx])
    }

    /// Get an edge by ID.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge<W>> {
        self.edge_index.get(&id).map(|&idx| &self.edges[idx])
    }

    /// Get a vertex by ID, failing with [`GraphError::VertexNotFound`].
    pub fn try_vertex(&self, id: VertexId) -> GraphResult<&Vertex<V>> {
        self.vertex(id).ok_or(GraphError::VertexNotFound(id))
    }

    /// Get an edge by ID, failing with [`GraphError::EdgeNotFound`].
    pub fn try_edge(&self, id: EdgeId) -> GraphResult<&Edge<W>> {
        self.edge(id).ok_or(GraphError::EdgeNotFound(id))
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertex_index.contains_key(&id)
    }

    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edge_index.contains_key(&id)
    }

    /// Look up the stored edge carrying a structural key.
    pub fn find_edge(&self, key: &EdgeKey) -> Option<&Edge<W>> {
        self.edge_keys.get(key).and_then(|id| self.edge(*id))
    }

    /// Resolve an edge and both endpoints for rendering.
    pub fn edge_view(&self, id: EdgeId) -> Option<EdgeView<'_, V, W>> {
        let idx = *self.edge_index.get(&id)?;
        self.view_at(idx)
    }

    /// Iterate over renderable views of every stored edge.
    pub fn edge_views(&self) -> impl Iterator<Item = EdgeView<'_, V, W>> + '_ {
        (0..self.edges.len()).filter_map(move |idx| self.view_at(idx))
    }

    pub(crate) fn view_at(&self, idx: usize) -> Option<EdgeView<'_, V, W>> {
        let edge = self.edges.get(idx)?;
        Some(EdgeView {
            edge,
            vertex1: self.vertex(edge.vertex1())?,
            vertex2: self.vertex(edge.vertex2())?,
        })
    }

    /// Diagnostics recorded since the last call to [`Graph::take_warnings`].
    pub fn warnings(&self) -> &[GraphWarning] {
        &self.warnings
    }

    /// Drain the diagnostics journal.
    pub fn take_warnings(&mut self) -> Vec<GraphWarning> {
        std::mem::take(&mut self.warnings)
    }

    /// Emit a diagnostic on the log stream and, if configured, journal it.
    pub(crate) fn warn(&mut self, warning: GraphWarning) {
        log::warn!("{}", warning);
        if self.config.record_warnings {
            self.warnings.push(warning);
        }
    }

    /// Run a restricted constructor with the gate open for `kind`.
    ///
    /// The gate is closed again before the constructor's result is inspected.
    pub(crate) fn gated<T>(
        &mut self,
        kind: ConstructionKind,
        build: impl FnOnce(&Self) -> GraphResult<T>,
    ) -> GraphResult<T> {
        self.gate.open_for(kind, self.id)?;
        let built = build(&*self);
        self.gate.close(kind);
        built
    }
}

impl<V: Payload, W: Payload> Graph<V, W> {
    /// Mint a vertex with a fresh identity and add it to the graph.
    ///
    /// Returns a copy of the stored vertex; vertices are immutable, so the
    /// copy stays identical to the stored one.
    pub fn create_vertex(&mut self, value: V) -> GraphResult<Vertex<V>> {
        let vertex = self.gated(ConstructionKind::Vertex, |graph| Vertex::new(graph, value))?;
        log::debug!("Created vertex {} in graph {}", vertex.id(), self.id);
        self.vertex_index.insert(vertex.id(), self.vertices.len());
        self.vertices.push(vertex.clone());
        Ok(vertex)
    }

    /// Mint a same-valued copy of a vertex owned by another graph.
    pub(crate) fn clone_foreign(&mut self, foreign: &Vertex<V>) -> GraphResult<Vertex<V>> {
        let clone = self.create_vertex(foreign.value().clone())?;
        self.warn(GraphWarning::CrossGraphClone {
            original: foreign.id(),
            source_graph: foreign.graph(),
            clone: clone.id(),
            target_graph: self.id,
        });
        Ok(clone)
    }

    /// Absorb a freshly built edge under the structural-dedup check.
    ///
    /// Returns the position of the stored edge carrying the new edge's key:
    /// the new edge itself, or the already stored one when it is a duplicate.
    pub(crate) fn absorb_edge(&mut self, edge: Edge<W>) -> usize {
        let key = edge.key();
        let stored = self
            .edge_keys
            .get(&key)
            .and_then(|id| self.edge_index.get(id).map(|&idx| (*id, idx)));
        if let Some((existing, idx)) = stored {
            let rendered = self.render_at(idx);
            self.warn(GraphWarning::DuplicateEdge {
                existing,
                discarded: edge.id(),
                rendered,
            });
            return idx;
        }

        log::debug!("Stored edge {} in graph {}", edge.id(), self.id);
        let idx = self.edges.len();
        self.edge_keys.insert(key, edge.id());
        self.edge_index.insert(edge.id(), idx);
        self.edges.push(edge);
        idx
    }

    /// Replace the weight of the stored edge at `idx`, keeping the key index
    /// consistent.
    ///
    /// If the new key collides with another stored edge, the reweighted edge
    /// is dropped in favor of the stored one and its position is returned.
    pub(crate) fn reweigh(&mut self, idx: usize, weight: Option<W>) -> usize {
        let old_key = self.edges[idx].key();
        self.edges[idx].set_weight(weight);
        let new_key = self.edges[idx].key();
        if new_key == old_key {
            return idx;
        }

        self.edge_keys.remove(&old_key);
        let stored = self
            .edge_keys
            .get(&new_key)
            .and_then(|id| self.edge_index.get(id).map(|&pos| (*id, pos)));
        match stored {
            Some((existing, pos)) => {
                let last = self.edges.len() - 1;
                let rendered = self.render_at(idx);
                let dropped = self.remove_edge_at(idx);
                self.warn(GraphWarning::DuplicateEdge {
                    existing,
                    discarded: dropped.id(),
                    rendered,
                });
                // swap_remove moved the last edge into the vacated slot.
                if pos == last {
                    idx
                } else {
                    pos
                }
            }
            None => {
                self.edge_keys.insert(new_key, self.edges[idx].id());
                idx
            }
        }
    }

    fn remove_edge_at(&mut self, idx: usize) -> Edge<W> {
        let edge = self.edges.swap_remove(idx);
        self.edge_index.remove(&edge.id());
        if let Some(moved) = self.edges.get(idx) {
            self.edge_index.insert(moved.id(), idx);
        }
        edge
    }

    pub(crate) fn render_at(&self, idx: usize) -> String {
        self.view_at(idx)
            .map(|view| view.to_string())
            .unwrap_or_default()
    }
}

impl<V, W> Default for Graph<V, W> {
    fn default() -> Self {
        Self::new()
    }
}
