//! Error types for the generic graph library.

use thiserror::Error;

use super::{EdgeId, NodeId};

/// Why a snapshot could not be turned back into a graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconstructionError {
    /// A node record lists an outgoing edge that has no edge record.
    #[error("Node {node} lists out-edge {edge}, which has no edge record")]
    MissingEdge { node: NodeId, edge: EdgeId },

    /// An edge record points at a node that has no node record.
    #[error("Edge {edge} has destination {destination}, which has no node record")]
    MissingDestination { edge: EdgeId, destination: NodeId },
}

/// All errors that can occur in the generic graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Node not found by ID.
    #[error("Node ID {0} not found")]
    NodeNotFound(NodeId),

    /// A snapshot references entities it does not contain.
    #[error("Reconstruction failed: {0}")]
    Reconstruction(#[from] ReconstructionError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot text could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_ids() {
        let err = GraphError::NodeNotFound(7);
        assert_eq!(err.to_string(), "Node ID 7 not found");

        let err: GraphError = ReconstructionError::MissingEdge { node: 1, edge: 4 }.into();
        assert_eq!(
            err.to_string(),
            "Reconstruction failed: Node 1 lists out-edge 4, which has no edge record"
        );
    }
}
