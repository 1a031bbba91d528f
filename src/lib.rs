//! GenericGraph: an in-memory directed multigraph with arbitrary node and
//! edge payloads.
//!
//! The graph owns every node and edge in identifier-keyed storage; nodes
//! index their incident edges by id in both directions. A graph can be
//! flattened into a serializable [`GraphSpec`] and rebuilt from one.

pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{EdgeSpec, GraphSpec, NodeSpec, SpecReader, SpecWriter};
pub use graph::{EdgeRef, Graph, GraphBuilder, NodeRef};
pub use types::{
    Edge, EdgeId, GraphError, GraphResult, Node, NodeId, ReconstructionError,
    DEFAULT_EDGE_CAPACITY, DEFAULT_NODE_CAPACITY,
};
