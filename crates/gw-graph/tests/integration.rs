//! Integration tests for gw-graph.

use gw_graph::{AdjacencyView, EdgeRecord, Graph, GraphError, parse_edge_lines};
use proptest::prelude::*;

#[test]
fn square_with_diagonal_free_text() {
    let text = "A B\nB C\nC D\nA D\n";
    let graph = Graph::from_records(&parse_edge_lines(text).unwrap()).unwrap();

    let names: Vec<_> = graph.nodes().iter().map(|n| n.name.clone()).collect();
    assert_eq!(names, ["A", "B", "C", "D"]);

    let keys: Vec<_> = graph.edges().iter().map(|e| e.key.clone()).collect();
    assert_eq!(keys, ["A-B-0", "B-C-1", "C-D-2", "A-D-3"]);

    let a = graph.node_by_name("A").unwrap().id;
    let d = graph.node_by_name("D").unwrap().id;
    assert_eq!(graph.edge_between(d, a).unwrap().key, "A-D-3");
    assert_eq!(graph.incident_edges(a).count(), 2);
}

#[test]
fn edge_between_prefers_first_parallel_edge() {
    let records = vec![
        EdgeRecord::new("X", "Y"),
        EdgeRecord::weighted("Y", "X", "2"),
    ];
    let graph = Graph::from_records(&records).unwrap();
    let x = graph.node_by_name("X").unwrap().id;
    let y = graph.node_by_name("Y").unwrap().id;
    assert_eq!(graph.edge_between(y, x).unwrap().key, "X-Y-0");
    assert_eq!(graph.edge_by_key("Y-X-1").unwrap().weight.as_deref(), Some("2"));
}

#[test]
fn labels_default_to_names() {
    let graph = Graph::from_records(&[EdgeRecord::new("root", "leaf")]).unwrap();
    for node in graph.nodes() {
        assert_eq!(node.label, node.name);
    }
}

#[test]
fn malformed_line_never_builds() {
    let err = parse_edge_lines("A B\nlonely\nC D").unwrap_err();
    assert!(matches!(err, GraphError::MalformedLine { line_no: 2, .. }));
}

#[test]
fn endpoint_names_keep_orientation() {
    let graph = Graph::from_records(&parse_edge_lines("B A\nA C").unwrap()).unwrap();
    assert_eq!(
        graph.endpoint_names(),
        vec![("B".to_string(), "A".to_string()), ("A".to_string(), "C".to_string())]
    );
}

proptest! {
    #[test]
    fn keys_unique_and_adjacency_sums_to_twice_edges(
        pairs in prop::collection::vec((0u8..6, 0u8..6), 0..30)
    ) {
        let records: Vec<_> = pairs
            .iter()
            .map(|(a, b)| EdgeRecord::new(format!("n{a}"), format!("n{b}")))
            .collect();
        let graph = Graph::from_records(&records).unwrap();
        prop_assert_eq!(graph.edges().len(), records.len());

        let adj = AdjacencyView::build(&graph);
        let total: usize = graph.nodes().iter().map(|n| adj.degree(n.id)).sum();
        prop_assert_eq!(total, 2 * records.len());
    }
}
