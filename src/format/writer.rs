//! Writes graph snapshots as JSON text.

use std::io::Write;
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::graph::Graph;
use crate::types::GraphResult;

use super::GraphSpec;

/// Writer for JSON snapshot files.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecWriter {
    pretty: bool,
}

impl SpecWriter {
    /// Create a new writer. `pretty` selects indented output.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Write a snapshot to a file, replacing its contents.
    pub fn write_to_file<N, E>(&self, spec: &GraphSpec<N, E>, path: &Path) -> GraphResult<()>
    where
        N: Serialize,
        E: Serialize,
    {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(spec, &mut writer)?;
        debug!("wrote snapshot to {}", path.display());
        Ok(())
    }

    /// Snapshot a graph and write it to a file.
    pub fn write_graph_to_file<N, E>(&self, graph: &Graph<N, E>, path: &Path) -> GraphResult<()>
    where
        N: Serialize + Clone,
        E: Serialize + Clone,
    {
        self.write_to_file(&graph.snapshot(), path)
    }

    /// Write a snapshot to any writer.
    pub fn write_to<N, E>(&self, spec: &GraphSpec<N, E>, writer: &mut impl Write) -> GraphResult<()>
    where
        N: Serialize,
        E: Serialize,
    {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, spec)?;
        } else {
            serde_json::to_writer(&mut *writer, spec)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Encode a snapshot as a string.
    pub fn write_to_string<N, E>(&self, spec: &GraphSpec<N, E>) -> GraphResult<String>
    where
        N: Serialize,
        E: Serialize,
    {
        let text = if self.pretty {
            serde_json::to_string_pretty(spec)?
        } else {
            serde_json::to_string(spec)?
        };
        Ok(text)
    }
}
