//! Fluent API for building Graph instances.

use crate::config::{CrossGraphPolicy, GraphConfig};
use crate::types::{GraphResult, Payload, Vertex};

use super::Graph;

/// Fluent builder for constructing a Graph, optionally seeded with vertices.
pub struct GraphBuilder<V> {
    config: GraphConfig,
    values: Vec<V>,
}

impl<V: Payload> GraphBuilder<V> {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create a new builder from an explicit configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            values: Vec::new(),
        }
    }

    /// Choose how edges to vertices of other graphs are resolved.
    pub fn cross_graph(mut self, policy: CrossGraphPolicy) -> Self {
        self.config.cross_graph = policy;
        self
    }

    /// Keep (or stop keeping) a journal of warnings on the graph.
    pub fn record_warnings(mut self, record: bool) -> Self {
        self.config.record_warnings = record;
        self
    }

    /// Queue a vertex to be minted when the graph is built.
    pub fn vertex(mut self, value: V) -> Self {
        self.values.push(value);
        self
    }

    /// Queue several vertices, in order.
    pub fn vertices(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.values.extend(values);
        self
    }

    /// Build the graph. Seeded vertices are returned in the order they were queued.
    pub fn build<W: Payload>(self) -> GraphResult<(Graph<V, W>, Vec<Vertex<V>>)> {
        let mut graph = Graph::with_config(self.config);
        let mut vertices = Vec::with_capacity(self.values.len());
        for value in self.values {
            vertices.push(graph.create_vertex(value)?);
        }
        Ok((graph, vertices))
    }
}

impl<V: Payload> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
