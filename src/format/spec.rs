//! Flattened, serializable snapshot of a graph, and reconstruction from it.
//!
//! Schema (identifiers are the ones the source graph assigned; they are not
//! preserved by reconstruction):
//! - `nodes`: node id -> `{ value, outEdges: [edge id] }`
//! - `edges`: edge id -> `{ value, destination: node id }`
//!
//! An edge's source is not stored on the edge record. It is whichever node
//! lists the edge in its `outEdges`.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::types::{EdgeId, GraphResult, NodeId, ReconstructionError};

/// Snapshot record for one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSpec<N> {
    /// Omitted from the encoding when absent. An encoded `null` also
    /// decodes as absent, so for `N = Option<T>` a payload of `Some(None)`
    /// comes back as `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<N>,
    /// IDs of the edges starting at this node.
    #[serde(rename = "outEdges")]
    pub out_edges: BTreeSet<EdgeId>,
}

/// Snapshot record for one edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec<E> {
    /// Same encoding rules as `NodeSpec::value`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<E>,
    pub destination: NodeId,
}

/// Order-independent projection of a graph's topology and payloads.
///
/// Both mappings are ordered by id, so encoding the same graph twice gives
/// the same text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSpec<N, E> {
    pub nodes: BTreeMap<NodeId, NodeSpec<N>>,
    pub edges: BTreeMap<EdgeId, EdgeSpec<E>>,
}

impl<N, E> GraphSpec<N, E> {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Snapshot a live graph. Payloads are cloned.
    pub fn from_graph(graph: &Graph<N, E>) -> Self
    where
        N: Clone,
        E: Clone,
    {
        let nodes: BTreeMap<NodeId, NodeSpec<N>> = graph
            .nodes()
            .map(|node| {
                let spec = NodeSpec {
                    value: node.value().cloned(),
                    out_edges: node.out_edge_ids().collect(),
                };
                (node.id(), spec)
            })
            .collect();

        let edges: BTreeMap<EdgeId, EdgeSpec<E>> = graph
            .edges()
            .map(|edge| {
                let spec = EdgeSpec {
                    value: edge.value().cloned(),
                    destination: edge.edge().destination(),
                };
                (edge.id(), spec)
            })
            .collect();

        debug!(
            "snapshot taken: {} nodes, {} edges",
            nodes.len(),
            edges.len()
        );
        Self { nodes, edges }
    }

    /// Rebuild a graph from this snapshot, cloning payloads.
    pub fn build_graph(&self) -> GraphResult<Graph<N, E>>
    where
        N: Clone,
        E: Clone,
    {
        self.clone().into_graph()
    }

    /// Rebuild a graph from this snapshot, moving payloads into it.
    ///
    /// Nodes are added in ascending snapshot-id order, then each node's
    /// out-edges in ascending edge-id order. The new graph assigns its own
    /// ids; a translation table maps snapshot node ids to them. An edge
    /// record listed by several node records yields one edge per listing.
    pub fn into_graph(self) -> GraphResult<Graph<N, E>>
    where
        E: Clone,
    {
        let GraphSpec { nodes, mut edges } = self;
        let mut graph = Graph::with_capacity(nodes.len(), edges.len());

        let mut translation: HashMap<NodeId, NodeId> = HashMap::with_capacity(nodes.len());
        let mut pending: Vec<(NodeId, BTreeSet<EdgeId>)> = Vec::with_capacity(nodes.len());
        for (old_id, NodeSpec { value, out_edges }) in nodes {
            let new_id = graph.add_node(value);
            trace!("snapshot node {} -> node {}", old_id, new_id);
            translation.insert(old_id, new_id);
            pending.push((old_id, out_edges));
        }

        // How many node records still list each edge record. The last
        // listing moves the payload out; earlier ones clone it.
        let mut listings: HashMap<EdgeId, usize> = HashMap::new();
        for (_, out_edges) in &pending {
            for &edge_id in out_edges {
                *listings.entry(edge_id).or_insert(0) += 1;
            }
        }
        let orphans: Vec<EdgeId> = edges
            .keys()
            .filter(|id| !listings.contains_key(id))
            .copied()
            .collect();

        for (old_source, out_edges) in pending {
            let source = translation[&old_source];
            for edge_id in out_edges {
                let Some(record) = edges.get_mut(&edge_id) else {
                    return Err(ReconstructionError::MissingEdge {
                        node: old_source,
                        edge: edge_id,
                    }
                    .into());
                };
                let destination = record.destination;
                let Some(&target) = translation.get(&destination) else {
                    return Err(ReconstructionError::MissingDestination {
                        edge: edge_id,
                        destination,
                    }
                    .into());
                };

                let remaining = listings.entry(edge_id).or_insert(1);
                *remaining -= 1;
                let value = if *remaining == 0 {
                    record.value.take()
                } else {
                    record.value.clone()
                };
                graph.add_edge(source, target, value)?;
            }
        }

        if !orphans.is_empty() {
            warn!(
                "ignoring {} edge records not listed by any node: {:?}",
                orphans.len(),
                orphans
            );
        }
        debug!(
            "graph rebuilt: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

impl<N, E> Default for GraphSpec<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone, E: Clone> From<&Graph<N, E>> for GraphSpec<N, E> {
    fn from(graph: &Graph<N, E>) -> Self {
        Self::from_graph(graph)
    }
}

impl<N: Clone, E: Clone> Graph<N, E> {
    /// Take a snapshot of this graph.
    pub fn snapshot(&self) -> GraphSpec<N, E> {
        GraphSpec::from_graph(self)
    }
}
