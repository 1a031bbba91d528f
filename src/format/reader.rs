//! Reads graph snapshots from JSON text.

use std::io::Read;
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;

use crate::graph::Graph;
use crate::types::GraphResult;

use super::GraphSpec;

/// Reader for JSON snapshot files.
pub struct SpecReader;

impl SpecReader {
    /// Decode a snapshot from a file.
    pub fn read_from_file<N, E>(path: &Path) -> GraphResult<GraphSpec<N, E>>
    where
        N: DeserializeOwned,
        E: DeserializeOwned,
    {
        let file = std::fs::File::open(path)?;
        let spec: GraphSpec<N, E> = Self::read_from(std::io::BufReader::new(file))?;
        debug!(
            "read snapshot from {}: {} nodes, {} edges",
            path.display(),
            spec.node_count(),
            spec.edge_count()
        );
        Ok(spec)
    }

    /// Decode a snapshot from a file and rebuild the graph it describes.
    pub fn read_graph_from_file<N, E>(path: &Path) -> GraphResult<Graph<N, E>>
    where
        N: DeserializeOwned,
        E: DeserializeOwned + Clone,
    {
        Self::read_from_file(path)?.into_graph()
    }

    /// Decode a snapshot from any reader.
    pub fn read_from<N, E>(reader: impl Read) -> GraphResult<GraphSpec<N, E>>
    where
        N: DeserializeOwned,
        E: DeserializeOwned,
    {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Decode a snapshot from a string.
    pub fn read_from_str<N, E>(text: &str) -> GraphResult<GraphSpec<N, E>>
    where
        N: DeserializeOwned,
        E: DeserializeOwned,
    {
        Ok(serde_json::from_str(text)?)
    }
}
