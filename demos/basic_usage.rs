//! Basic build -> snapshot -> save -> reload flow.

use generic_graph::*;

fn main() -> GraphResult<()> {
    // Create a new graph
    let mut graph: Graph<String, String> = Graph::new();

    let inbox = graph.add_node(Some("inbox".to_string()));
    let review = graph.add_node(Some("review".to_string()));
    let done = graph.add_node(Some("done".to_string()));

    // Link them, including a retry loop
    graph.add_edge(inbox, review, Some("triage".to_string()))?;
    graph.add_edge(review, done, Some("approve".to_string()))?;
    graph.add_edge(review, inbox, Some("reject".to_string()))?;
    graph.add_edge(review, review, Some("retry".to_string()))?;

    println!(
        "Graph created with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    if let Some(node) = graph.node(review) {
        println!("{} has degree {}:", node, node.degree());
        for edge in node.out_edges() {
            println!(
                "  {} --{}--> {}",
                node.value().map(String::as_str).unwrap_or("?"),
                edge.value().map(String::as_str).unwrap_or("?"),
                edge.destination().value().map(String::as_str).unwrap_or("?")
            );
        }
    }

    // Save to file
    let path = std::env::temp_dir().join("generic_graph_example.json");
    SpecWriter::new(true).write_graph_to_file(&graph, &path)?;
    println!("\nSaved to {}", path.display());

    // Reload and verify
    let loaded: Graph<String, String> = SpecReader::read_graph_from_file(&path)?;
    println!(
        "Reloaded: {} nodes, {} edges",
        loaded.node_count(),
        loaded.edge_count()
    );

    Ok(())
}
