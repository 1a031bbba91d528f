//! Phase 1 tests: graph ownership, adjacency and identifier rules.

use generic_graph::{Graph, GraphError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Every stored edge sits in exactly one out-map and one in-map under its
/// own id, and degree sums agree with the edge count.
fn assert_adjacency_consistent<N, E>(graph: &Graph<N, E>) {
    for edge in graph.edges() {
        let listed_out = graph
            .nodes()
            .filter(|n| n.out_edge(edge.id()).is_some())
            .count();
        let listed_in = graph
            .nodes()
            .filter(|n| n.in_edge(edge.id()).is_some())
            .count();
        assert_eq!(listed_out, 1, "edge {} in {} out-maps", edge.id(), listed_out);
        assert_eq!(listed_in, 1, "edge {} in {} in-maps", edge.id(), listed_in);

        let source = edge.source();
        let destination = edge.destination();
        assert!(graph.contains_node(source.id()));
        assert!(graph.contains_node(destination.id()));
        assert_eq!(source.out_edge(edge.id()).map(|e| e.id()), Some(edge.id()));
        assert_eq!(
            destination.in_edge(edge.id()).map(|e| e.id()),
            Some(edge.id())
        );
    }

    let out_sum: usize = graph.nodes().map(|n| n.out_degree()).sum();
    let in_sum: usize = graph.nodes().map(|n| n.in_degree()).sum();
    assert_eq!(out_sum, graph.edge_count());
    assert_eq!(in_sum, graph.edge_count());
    for node in graph.nodes() {
        assert_eq!(node.degree(), node.in_degree() + node.out_degree());
    }
    assert_eq!(graph.edges().count(), graph.edge_count());
    assert_eq!(graph.nodes().count(), graph.node_count());
}

// ==================== Node & Edge Tests ====================

#[test]
fn test_add_node_assigns_sequential_ids() {
    let mut graph: Graph<&str, ()> = Graph::new();
    let a = graph.add_node(Some("a"));
    let b = graph.add_node(None);
    assert_eq!(a, 0);
    assert_eq!(b, 1);
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.node(a).unwrap().value(), Some(&"a"));
    assert!(graph.node(b).unwrap().value().is_none());
    assert_eq!(graph.node(a).unwrap().degree(), 0);
}

#[test]
fn test_add_edge_registers_both_directions() {
    let mut graph: Graph<&str, i32> = Graph::new();
    let a = graph.add_node(Some("a"));
    let b = graph.add_node(Some("b"));
    let e = graph.add_edge(a, b, Some(7)).unwrap();

    assert_eq!(graph.edge_count(), 1);
    let node_a = graph.node(a).unwrap();
    let node_b = graph.node(b).unwrap();
    assert_eq!(node_a.out_degree(), 1);
    assert_eq!(node_a.in_degree(), 0);
    assert_eq!(node_b.in_degree(), 1);
    assert_eq!(node_b.out_degree(), 0);
    assert_eq!(node_a.out_edge(e).unwrap().value(), Some(&7));
    assert_eq!(node_b.in_edge(e).unwrap().source().id(), a);
    assert_adjacency_consistent(&graph);
}

#[test]
fn test_add_edge_unknown_endpoint() {
    let mut graph: Graph<(), ()> = Graph::new();
    let a = graph.add_node(None);

    match graph.add_edge(a, 99, None) {
        Err(GraphError::NodeNotFound(99)) => {}
        other => panic!("Expected NodeNotFound(99), got {:?}", other),
    }
    match graph.add_edge(42, a, None) {
        Err(GraphError::NodeNotFound(42)) => {}
        other => panic!("Expected NodeNotFound(42), got {:?}", other),
    }
    // Source is reported first when both are unknown
    match graph.add_edge(5, 6, None) {
        Err(GraphError::NodeNotFound(5)) => {}
        other => panic!("Expected NodeNotFound(5), got {:?}", other),
    }
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.next_edge_id(), 0);
}

#[test]
fn test_self_loop_and_parallel_edges() {
    let mut graph: Graph<&str, &str> = Graph::new();
    let a = graph.add_node(Some("a"));
    let b = graph.add_node(Some("b"));
    graph.add_edge(a, a, Some("loop")).unwrap();
    graph.add_edge(a, b, Some("p1")).unwrap();
    graph.add_edge(a, b, Some("p2")).unwrap();

    let node_a = graph.node(a).unwrap();
    assert_eq!(node_a.in_degree(), 1);
    assert_eq!(node_a.out_degree(), 3);

    let mut neighbors: Vec<&str> = node_a
        .neighbors()
        .iter()
        .filter_map(|n| n.value().copied())
        .collect();
    neighbors.sort_unstable();
    assert_eq!(neighbors, vec!["a", "a", "b", "b"]);

    let node_b = graph.node(b).unwrap();
    let back: Vec<_> = node_b.neighbors().iter().map(|n| n.id()).collect();
    assert_eq!(back, vec![a, a]);
    assert_adjacency_consistent(&graph);
}

#[test]
fn test_incident_edge_sequences() {
    let mut graph: Graph<(), u32> = Graph::new();
    let hub = graph.add_node(None);
    let spokes: Vec<_> = (0..3).map(|_| graph.add_node(None)).collect();
    for (i, &s) in spokes.iter().enumerate() {
        graph.add_edge(hub, s, Some(i as u32)).unwrap();
        graph.add_edge(s, hub, Some(10 + i as u32)).unwrap();
    }

    let node = graph.node(hub).unwrap();
    let mut out: Vec<u32> = node.out_edges().filter_map(|e| e.value().copied()).collect();
    out.sort_unstable();
    assert_eq!(out, vec![0, 1, 2]);

    let mut ins = node.in_edges();
    assert_eq!(ins.clone().count(), 3);
    assert!(ins.all(|e| e.destination().id() == hub));
}

#[test]
fn test_payload_mutation() {
    let mut graph: Graph<String, u32> = Graph::new();
    let a = graph.add_node(Some("a".to_string()));
    let e = graph.add_edge(a, a, None).unwrap();

    graph.node_mut(a).unwrap().value_mut().unwrap().push('!');
    assert_eq!(graph.edge_mut(e).unwrap().set_value(Some(3)), None);

    assert_eq!(graph.node(a).unwrap().value().map(String::as_str), Some("a!"));
    assert_eq!(graph.edge(e).unwrap().value(), Some(&3));
    assert!(graph.node_mut(77).is_none());
}

// ==================== Removal Tests ====================

#[test]
fn test_remove_node_drops_incident_edges() {
    init_logger();
    let mut graph: Graph<&str, ()> = Graph::new();
    let a = graph.add_node(Some("a"));
    let b = graph.add_node(Some("b"));
    let c = graph.add_node(Some("c"));
    graph.add_edge(a, b, None).unwrap();
    graph.add_edge(b, a, None).unwrap();
    graph.add_edge(b, b, None).unwrap();
    let kept = graph.add_edge(a, c, None).unwrap();

    let incident = 3;
    assert!(graph.remove_node(b));
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 4 - incident);
    assert!(graph.node(b).is_none());
    assert!(graph.edge(kept).is_some());
    assert_eq!(graph.node(a).unwrap().degree(), 1);
    assert_adjacency_consistent(&graph);
}

#[test]
fn test_remove_unknown_is_noop() {
    let mut graph: Graph<(), ()> = Graph::new();
    let a = graph.add_node(None);
    graph.add_edge(a, a, None).unwrap();

    assert!(!graph.remove_node(12));
    assert!(!graph.remove_edge(12));
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_remove_edge_keeps_nodes() {
    let mut graph: Graph<(), ()> = Graph::new();
    let a = graph.add_node(None);
    let b = graph.add_node(None);
    let e = graph.add_edge(a, b, None).unwrap();

    assert!(graph.remove_edge(e));
    assert!(!graph.remove_edge(e));
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.node(a).unwrap().out_degree(), 0);
    assert_eq!(graph.node(b).unwrap().in_degree(), 0);
}

#[test]
fn test_ids_not_reused_after_removal() {
    let mut graph: Graph<(), ()> = Graph::new();
    let a = graph.add_node(None);
    let b = graph.add_node(None);
    let e = graph.add_edge(a, b, None).unwrap();
    graph.remove_node(b);

    let c = graph.add_node(None);
    let f = graph.add_edge(a, c, None).unwrap();
    assert_ne!(c, b);
    assert_ne!(f, e);
    assert_eq!(graph.next_node_id(), 3);
    assert_eq!(graph.next_edge_id(), 2);
}

// ==================== Randomized Invariant Tests ====================

#[test]
fn test_random_mutations_preserve_invariants() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut graph: Graph<u32, u32> = Graph::new();
    let mut last_node_id = None;
    let mut last_edge_id = None;

    for step in 0..2_000u32 {
        match rng.gen_range(0..10) {
            0..=2 => {
                let id = graph.add_node(Some(step));
                if let Some(prev) = last_node_id {
                    assert!(id > prev);
                }
                last_node_id = Some(id);
            }
            3..=6 => {
                let ids: Vec<_> = graph.node_ids().collect();
                if ids.is_empty() {
                    continue;
                }
                let source = ids[rng.gen_range(0..ids.len())];
                let destination = ids[rng.gen_range(0..ids.len())];
                let id = graph.add_edge(source, destination, Some(step)).unwrap();
                if let Some(prev) = last_edge_id {
                    assert!(id > prev);
                }
                last_edge_id = Some(id);
            }
            7 => {
                let id = rng.gen_range(0..graph.next_node_id().max(1));
                let before_nodes = graph.node_count();
                let before_edges = graph.edge_count();
                let incident = graph.node(id).map(|n| {
                    let loops = n.out_edges().filter(|e| e.is_self_loop()).count();
                    n.degree() - loops
                });
                let removed = graph.remove_node(id);
                assert_eq!(removed, incident.is_some());
                match incident {
                    Some(k) => {
                        assert_eq!(graph.node_count(), before_nodes - 1);
                        assert_eq!(graph.edge_count(), before_edges - k);
                    }
                    None => {
                        assert_eq!(graph.node_count(), before_nodes);
                        assert_eq!(graph.edge_count(), before_edges);
                    }
                }
            }
            _ => {
                let id = rng.gen_range(0..graph.next_edge_id().max(1));
                let existed = graph.contains_edge(id);
                let before_nodes = graph.node_count();
                assert_eq!(graph.remove_edge(id), existed);
                assert_eq!(graph.node_count(), before_nodes);
            }
        }
        if step % 50 == 0 {
            assert_adjacency_consistent(&graph);
        }
    }
    assert_adjacency_consistent(&graph);
}
