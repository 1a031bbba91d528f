//! Identifiers, entity types and errors for the generic graph library.

pub mod edge;
pub mod error;
pub mod node;

pub use edge::Edge;
pub use error::{GraphError, GraphResult, ReconstructionError};
pub use node::Node;

/// Graph-assigned node identifier. Unique within any one graph.
pub type NodeId = u64;

/// Graph-assigned edge identifier. Unique within any one graph.
pub type EdgeId = u64;

/// Initial node slots reserved by `Graph::new`.
pub const DEFAULT_NODE_CAPACITY: usize = 16;

/// Initial edge slots reserved by `Graph::new`.
pub const DEFAULT_EDGE_CAPACITY: usize = 32;
