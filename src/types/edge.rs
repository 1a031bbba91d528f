//! The edge entity.

use super::{EdgeId, NodeId};

/// A directed arc between two nodes of the same graph.
///
/// Source and destination are fixed at construction. They are node ids
/// resolved through the owning graph, so an edge never keeps a node alive.
#[derive(Debug, Clone)]
pub struct Edge<E> {
    id: EdgeId,
    source: NodeId,
    destination: NodeId,
    value: Option<E>,
}

impl<E> Edge<E> {
    pub(crate) fn new(id: EdgeId, source: NodeId, destination: NodeId, value: Option<E>) -> Self {
        Self {
            id,
            source,
            destination,
            value,
        }
    }

    /// Graph-assigned identifier.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Node this edge starts at.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Node this edge ends at.
    pub fn destination(&self) -> NodeId {
        self.destination
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }

    /// The payload, if any.
    pub fn value(&self) -> Option<&E> {
        self.value.as_ref()
    }

    /// Mutable access to the payload, if any.
    pub fn value_mut(&mut self) -> Option<&mut E> {
        self.value.as_mut()
    }

    /// Replace the payload, returning the previous one.
    pub fn set_value(&mut self, value: Option<E>) -> Option<E> {
        std::mem::replace(&mut self.value, value)
    }

    /// Remove and return the payload.
    pub fn take_value(&mut self) -> Option<E> {
        self.value.take()
    }
}
