//! Borrowed views that pair an entity with the graph that owns it.
//!
//! Adjacency is stored as ids; a view resolves those ids through its graph.
//! While a view is alive the graph is immutably borrowed, so no structural
//! mutation can happen under an open enumeration.

use std::fmt;
use std::ops::Deref;

use crate::types::{Edge, EdgeId, Node};

use super::Graph;

/// A node together with the graph that owns it.
pub struct NodeRef<'g, N, E> {
    graph: &'g Graph<N, E>,
    node: &'g Node<N>,
}

impl<'g, N, E> NodeRef<'g, N, E> {
    pub(crate) fn new(graph: &'g Graph<N, E>, node: &'g Node<N>) -> Self {
        Self { graph, node }
    }

    /// The underlying node, with the graph's lifetime.
    pub fn node(&self) -> &'g Node<N> {
        self.node
    }

    /// The payload, with the graph's lifetime.
    pub fn value(&self) -> Option<&'g N> {
        self.node.value()
    }

    /// The in-edge with this ID, if it ends at this node.
    pub fn in_edge(&self, id: EdgeId) -> Option<EdgeRef<'g, N, E>> {
        if self.node.has_in_edge(id) {
            self.graph.edge(id)
        } else {
            None
        }
    }

    /// The out-edge with this ID, if it starts at this node.
    pub fn out_edge(&self, id: EdgeId) -> Option<EdgeRef<'g, N, E>> {
        if self.node.has_out_edge(id) {
            self.graph.edge(id)
        } else {
            None
        }
    }

    /// Edges ending at this node. Order is unspecified.
    pub fn in_edges(&self) -> impl Iterator<Item = EdgeRef<'g, N, E>> + Clone + 'g {
        let graph = self.graph;
        let node = self.node;
        node.in_map().keys().filter_map(move |&id| graph.edge(id))
    }

    /// Edges starting at this node. Order is unspecified.
    pub fn out_edges(&self) -> impl Iterator<Item = EdgeRef<'g, N, E>> + Clone + 'g {
        let graph = self.graph;
        let node = self.node;
        node.out_map().keys().filter_map(move |&id| graph.edge(id))
    }

    /// Sources of all in-edges followed by destinations of all out-edges.
    ///
    /// One entry per incident edge: a self-loop yields this node twice and
    /// parallel edges yield repeated entries.
    pub fn neighbors(&self) -> Vec<NodeRef<'g, N, E>> {
        let graph = self.graph;
        self.node
            .in_map()
            .values()
            .chain(self.node.out_map().values())
            .map(|&id| NodeRef::new(graph, graph.node_entry(id)))
            .collect()
    }
}

impl<N, E> Deref for NodeRef<'_, N, E> {
    type Target = Node<N>;

    fn deref(&self) -> &Self::Target {
        self.node
    }
}

impl<N, E> Clone for NodeRef<'_, N, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N, E> Copy for NodeRef<'_, N, E> {}

impl<N, E> fmt::Display for NodeRef<'_, N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node {}", self.node.id())
    }
}

impl<N, E> fmt::Debug for NodeRef<'_, N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.node.id())
            .field("in_degree", &self.node.in_degree())
            .field("out_degree", &self.node.out_degree())
            .finish()
    }
}

/// An edge together with the graph that owns it.
pub struct EdgeRef<'g, N, E> {
    graph: &'g Graph<N, E>,
    edge: &'g Edge<E>,
}

impl<'g, N, E> EdgeRef<'g, N, E> {
    pub(crate) fn new(graph: &'g Graph<N, E>, edge: &'g Edge<E>) -> Self {
        Self { graph, edge }
    }

    /// The underlying edge, with the graph's lifetime.
    pub fn edge(&self) -> &'g Edge<E> {
        self.edge
    }

    /// The payload, with the graph's lifetime.
    pub fn value(&self) -> Option<&'g E> {
        self.edge.value()
    }

    /// The node this edge starts at.
    pub fn source(&self) -> NodeRef<'g, N, E> {
        NodeRef::new(self.graph, self.graph.node_entry(self.edge.source()))
    }

    /// The node this edge ends at.
    pub fn destination(&self) -> NodeRef<'g, N, E> {
        NodeRef::new(self.graph, self.graph.node_entry(self.edge.destination()))
    }
}

impl<N, E> Deref for EdgeRef<'_, N, E> {
    type Target = Edge<E>;

    fn deref(&self) -> &Self::Target {
        self.edge
    }
}

impl<N, E> Clone for EdgeRef<'_, N, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N, E> Copy for EdgeRef<'_, N, E> {}

impl<N, E> fmt::Display for EdgeRef<'_, N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge {}", self.edge.id())
    }
}

impl<N, E> fmt::Debug for EdgeRef<'_, N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeRef")
            .field("id", &self.edge.id())
            .field("source", &self.edge.source())
            .field("destination", &self.edge.destination())
            .finish()
    }
}
