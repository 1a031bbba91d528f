//! Snapshot schema, reconstruction, and its JSON text form.

pub mod reader;
pub mod spec;
pub mod writer;

pub use reader::SpecReader;
pub use spec::{EdgeSpec, GraphSpec, NodeSpec};
pub use writer::SpecWriter;
