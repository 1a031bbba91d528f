//! Fluent API for building Graph instances.

use crate::types::{GraphResult, NodeId};

use super::Graph;

/// Fluent builder for constructing a Graph.
///
/// The IDs it hands out are the IDs the built graph assigns, so they can be
/// used for lookups on the result.
pub struct GraphBuilder<N, E> {
    nodes: Vec<Option<N>>,
    links: Vec<(NodeId, NodeId, Option<E>)>,
}

impl<N, E> GraphBuilder<N, E> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Add a node with a payload.
    pub fn add_node(&mut self, value: N) -> NodeId {
        self.push_node(Some(value))
    }

    /// Add a node without a payload.
    pub fn add_empty_node(&mut self) -> NodeId {
        self.push_node(None)
    }

    fn push_node(&mut self, value: Option<N>) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(value);
        id
    }

    /// Add an edge with a payload between two nodes.
    pub fn link(&mut self, source: NodeId, destination: NodeId, value: E) -> &mut Self {
        self.links.push((source, destination, Some(value)));
        self
    }

    /// Add an edge without a payload between two nodes.
    pub fn link_empty(&mut self, source: NodeId, destination: NodeId) -> &mut Self {
        self.links.push((source, destination, None));
        self
    }

    /// Build the final Graph. Fails with `NodeNotFound` if a link names a
    /// node this builder never added.
    pub fn build(self) -> GraphResult<Graph<N, E>> {
        let mut graph = Graph::with_capacity(self.nodes.len(), self.links.len());
        for value in self.nodes {
            graph.add_node(value);
        }
        for (source, destination, value) in self.links {
            graph.add_edge(source, destination, value)?;
        }
        Ok(graph)
    }
}

impl<N, E> Default for GraphBuilder<N, E> {
    fn default() -> Self {
        Self::new()
    }
}
