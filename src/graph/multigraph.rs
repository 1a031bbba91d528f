//! Core graph structure: identifier-keyed arenas plus per-node adjacency.

use std::collections::HashMap;

use log::{debug, trace};

use crate::types::{
    Edge, EdgeId, GraphError, GraphResult, Node, NodeId, DEFAULT_EDGE_CAPACITY,
    DEFAULT_NODE_CAPACITY,
};

use super::view::{EdgeRef, NodeRef};

/// A directed multigraph whose nodes carry `N` payloads and whose edges
/// carry `E` payloads.
///
/// The graph is the sole owner of every node and edge. Nodes index their
/// incident edges by id and edges name their endpoints by id; all of those
/// are resolved through the graph at use time. After every mutation:
/// - each stored edge is in exactly one out-map (its source's) and one
///   in-map (its destination's), under its own id
/// - no edge names a node that is not stored
/// - identifiers are never reused
#[derive(Debug, Clone)]
pub struct Graph<N, E> {
    /// All nodes, keyed by ID.
    nodes: HashMap<NodeId, Node<N>>,
    /// All edges, keyed by ID.
    edges: HashMap<EdgeId, Edge<E>>,
    /// Next node ID to hand out.
    next_node_id: NodeId,
    /// Next edge ID to hand out.
    next_edge_id: EdgeId,
}

impl<N, E> Graph<N, E> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_NODE_CAPACITY, DEFAULT_EDGE_CAPACITY)
    }

    /// Create a new empty graph with room for the given number of entities.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: HashMap::with_capacity(nodes),
            edges: HashMap::with_capacity(edges),
            next_node_id: 0,
            next_edge_id: 0,
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The ID the next `add_node` will assign.
    pub fn next_node_id(&self) -> NodeId {
        self.next_node_id
    }

    /// The ID the next `add_edge` will assign.
    pub fn next_edge_id(&self) -> EdgeId {
        self.next_edge_id
    }

    /// Get a node by ID.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, N, E>> {
        self.nodes.get(&id).map(|node| NodeRef::new(self, node))
    }

    /// Get a node by ID for payload mutation.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<N>> {
        self.nodes.get_mut(&id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Get an edge by ID.
    pub fn edge(&self, id: EdgeId) -> Option<EdgeRef<'_, N, E>> {
        self.edges.get(&id).map(|edge| EdgeRef::new(self, edge))
    }

    /// Get an edge by ID for payload mutation.
    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge<E>> {
        self.edges.get_mut(&id)
    }

    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.contains_key(&id)
    }

    /// Iterate over all nodes. Order is unspecified.
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'_, N, E>> + Clone {
        self.nodes.values().map(move |node| NodeRef::new(self, node))
    }

    /// Iterate over all edges. Order is unspecified.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_, N, E>> + Clone {
        self.edges.values().map(move |edge| EdgeRef::new(self, edge))
    }

    /// Iterate over all node IDs. Order is unspecified.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + Clone + '_ {
        self.nodes.keys().copied()
    }

    /// Iterate over all edge IDs. Order is unspecified.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + Clone + '_ {
        self.edges.keys().copied()
    }

    /// Add a node, returns the assigned ID.
    pub fn add_node(&mut self, value: Option<N>) -> NodeId {
        let id = self.next_node_id;
        self.next_node_id += 1;

        self.nodes.insert(id, Node::new(id, value));
        trace!("added node {}", id);
        id
    }

    /// Remove a node and every edge incident on it. Payloads are dropped.
    ///
    /// Returns false (and changes nothing) if the ID is unknown.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        let Some(node) = self.nodes.remove(&id) else {
            return false;
        };

        let incident = node.incident_edge_ids();
        let mut removed = 0usize;
        for edge_id in incident {
            // A self-loop is listed twice; the second removal is a no-op.
            if self.remove_edge(edge_id) {
                removed += 1;
            }
        }
        debug!("removed node {} with {} incident edges", id, removed);
        true
    }

    /// Add an edge between two existing nodes, returns the assigned ID.
    ///
    /// Fails with `NodeNotFound` if either endpoint is not in this graph;
    /// the source is checked first.
    pub fn add_edge(
        &mut self,
        source: NodeId,
        destination: NodeId,
        value: Option<E>,
    ) -> GraphResult<EdgeId> {
        if !self.nodes.contains_key(&source) {
            return Err(GraphError::NodeNotFound(source));
        }
        if !self.nodes.contains_key(&destination) {
            return Err(GraphError::NodeNotFound(destination));
        }
        Ok(self.connect(source, destination, value))
    }

    /// Register a new edge in storage and in both endpoints' adjacency maps.
    /// Callers have already checked that both endpoints are stored.
    fn connect(&mut self, source: NodeId, destination: NodeId, value: Option<E>) -> EdgeId {
        let id = self.next_edge_id;
        self.next_edge_id += 1;

        self.edges
            .insert(id, Edge::new(id, source, destination, value));
        if let Some(node) = self.nodes.get_mut(&source) {
            node.attach_out(id, destination);
        }
        if let Some(node) = self.nodes.get_mut(&destination) {
            node.attach_in(id, source);
        }
        trace!("added edge {} ({} -> {})", id, source, destination);
        id
    }

    /// Remove an edge. Its endpoints stay; its payload is dropped.
    ///
    /// Returns false (and changes nothing) if the ID is unknown.
    pub fn remove_edge(&mut self, id: EdgeId) -> bool {
        let Some(edge) = self.edges.remove(&id) else {
            return false;
        };

        // Either endpoint may already be gone when called from remove_node.
        if let Some(node) = self.nodes.get_mut(&edge.source()) {
            node.detach_out(id);
        }
        if let Some(node) = self.nodes.get_mut(&edge.destination()) {
            node.detach_in(id);
        }
        trace!("removed edge {}", id);
        true
    }

    /// Drop every node and edge. ID counters keep counting.
    pub fn clear(&mut self) {
        debug!(
            "clearing graph ({} nodes, {} edges)",
            self.nodes.len(),
            self.edges.len()
        );
        self.nodes.clear();
        self.edges.clear();
    }

    pub(crate) fn node_entry(&self, id: NodeId) -> &Node<N> {
        // Every edge endpoint is stored; views only ask for those.
        &self.nodes[&id]
    }
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}
