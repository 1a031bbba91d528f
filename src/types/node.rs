//! The node entity and its adjacency index.

use std::collections::HashMap;

use super::{EdgeId, NodeId};

/// A graph vertex: an optional payload plus the ids of its incident edges.
///
/// Nodes are created only by `Graph::add_node` and destroyed only by
/// `Graph::remove_node`. The adjacency maps are lookup handles into the
/// owning graph, never owners:
/// - `in_edges`: edge id -> source node of that edge
/// - `out_edges`: edge id -> destination node of that edge
#[derive(Debug, Clone)]
pub struct Node<N> {
    id: NodeId,
    value: Option<N>,
    in_edges: HashMap<EdgeId, NodeId>,
    out_edges: HashMap<EdgeId, NodeId>,
}

impl<N> Node<N> {
    pub(crate) fn new(id: NodeId, value: Option<N>) -> Self {
        Self {
            id,
            value,
            in_edges: HashMap::new(),
            out_edges: HashMap::new(),
        }
    }

    /// Graph-assigned identifier.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The payload, if any.
    pub fn value(&self) -> Option<&N> {
        self.value.as_ref()
    }

    /// Mutable access to the payload, if any.
    pub fn value_mut(&mut self) -> Option<&mut N> {
        self.value.as_mut()
    }

    /// Replace the payload, returning the previous one.
    pub fn set_value(&mut self, value: Option<N>) -> Option<N> {
        std::mem::replace(&mut self.value, value)
    }

    /// Remove and return the payload.
    pub fn take_value(&mut self) -> Option<N> {
        self.value.take()
    }

    /// Number of in-edges.
    pub fn in_degree(&self) -> usize {
        self.in_edges.len()
    }

    /// Number of out-edges.
    pub fn out_degree(&self) -> usize {
        self.out_edges.len()
    }

    pub fn degree(&self) -> usize {
        self.in_degree() + self.out_degree()
    }

    /// True if `edge` ends at this node.
    pub fn has_in_edge(&self, edge: EdgeId) -> bool {
        self.in_edges.contains_key(&edge)
    }

    /// True if `edge` starts at this node.
    pub fn has_out_edge(&self, edge: EdgeId) -> bool {
        self.out_edges.contains_key(&edge)
    }

    /// Ids of the edges ending at this node.
    pub fn in_edge_ids(&self) -> impl Iterator<Item = EdgeId> + Clone + '_ {
        self.in_edges.keys().copied()
    }

    /// Ids of the edges starting at this node.
    pub fn out_edge_ids(&self) -> impl Iterator<Item = EdgeId> + Clone + '_ {
        self.out_edges.keys().copied()
    }

    pub(crate) fn in_map(&self) -> &HashMap<EdgeId, NodeId> {
        &self.in_edges
    }

    pub(crate) fn out_map(&self) -> &HashMap<EdgeId, NodeId> {
        &self.out_edges
    }

    pub(crate) fn attach_in(&mut self, edge: EdgeId, source: NodeId) {
        self.in_edges.insert(edge, source);
    }

    pub(crate) fn attach_out(&mut self, edge: EdgeId, destination: NodeId) {
        self.out_edges.insert(edge, destination);
    }

    pub(crate) fn detach_in(&mut self, edge: EdgeId) {
        self.in_edges.remove(&edge);
    }

    pub(crate) fn detach_out(&mut self, edge: EdgeId) {
        self.out_edges.remove(&edge);
    }

    /// Every incident edge id, in-edges first. Collected so the caller may
    /// mutate the graph while walking it.
    pub(crate) fn incident_edge_ids(&self) -> Vec<EdgeId> {
        self.in_edges
            .keys()
            .chain(self.out_edges.keys())
            .copied()
            .collect()
    }
}
