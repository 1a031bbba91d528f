//! In-memory graph operations: the core data structure.

pub mod builder;
pub mod multigraph;
pub mod view;

pub use builder::GraphBuilder;
pub use multigraph::Graph;
pub use view::{EdgeRef, NodeRef};
