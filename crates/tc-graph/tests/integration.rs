//! Integration tests for tc-graph.

use tc_core::Id;
use tc_graph::{EdgeKind, NodeKind, build_graph};
use tc_matrix::IncidenceMatrix;

#[test]
fn seed_network_with_partition() {
    let matrix = IncidenceMatrix::seed();
    let tree = [1, 2, 3];
    let graph = build_graph(&matrix, Some(&tree[..])).unwrap();

    // 3 independent nodes + reference, reference last
    assert_eq!(graph.nodes().len(), 4);
    let labels: Vec<&str> = graph.nodes().iter().map(|n| n.label.as_str()).collect();
    assert_eq!(labels, ["1", "2", "3", "4"]);
    assert_eq!(graph.nodes()[3].kind, NodeKind::Reference);
    assert!(graph.nodes()[..3].iter().all(|n| n.kind == NodeKind::Independent));

    // One edge per branch, in column order, none looping on the reference
    assert_eq!(graph.edges().len(), 6);
    let reference = graph.reference_id();
    for (j, edge) in graph.edges().iter().enumerate() {
        assert_eq!(edge.id, Id::from_index(j));
        assert_eq!(edge.label, format!("b{}", j + 1));
        assert!(!(edge.source == reference && edge.target == reference));
    }

    let endpoints: Vec<(usize, usize)> = graph
        .edges()
        .iter()
        .map(|e| (e.source.label(), e.target.label()))
        .collect();
    assert_eq!(endpoints, [(4, 1), (1, 2), (1, 3), (2, 4), (2, 3), (3, 4)]);
}

#[test]
fn classification_matches_partition() {
    let matrix = IncidenceMatrix::seed();
    let tree = [2, 4, 5];
    let links = [1, 3, 6];
    let graph = build_graph(&matrix, Some(&tree[..])).unwrap();

    for edge in graph.edges() {
        let branch = edge.id.label();
        if tree.contains(&branch) {
            assert_eq!(edge.kind, EdgeKind::Tree, "b{branch}");
        } else {
            assert!(links.contains(&branch));
            assert_eq!(edge.kind, EdgeKind::Link, "b{branch}");
        }
    }
    assert_eq!(graph.tree_edges().count(), 3);
    assert_eq!(graph.link_edges().count(), 3);
}

#[test]
fn missing_partition_leaves_edges_unclassified() {
    let graph = build_graph(&IncidenceMatrix::seed(), None).unwrap();
    assert!(graph.edges().iter().all(|e| e.kind == EdgeKind::Unclassified));
    assert_eq!(graph.tree_edges().count(), 0);
}

#[test]
fn endpoint_resolution_rules() {
    // b1: +1 at row 1, -1 at row 2
    // b2: only -1 at row 3 -> source is reference
    // b3: only +1 at row 2 -> target is reference
    let matrix = IncidenceMatrix::from_rows(vec![
        vec![1.0, 0.0, 0.0],
        vec![-1.0, 0.0, 1.0],
        vec![0.0, -1.0, 0.0],
    ])
    .unwrap();
    let graph = build_graph(&matrix, None).unwrap();
    let reference = graph.reference_id();
    let n = |i: usize| graph.nodes()[i].id;

    let b1 = &graph.edges()[0];
    assert_eq!((b1.source, b1.target), (n(0), n(1)));
    let b2 = &graph.edges()[1];
    assert_eq!((b2.source, b2.target), (reference, n(2)));
    let b3 = &graph.edges()[2];
    assert_eq!((b3.source, b3.target), (n(1), reference));
}

#[test]
fn node_adjacency_follows_edges() {
    let graph = build_graph(&IncidenceMatrix::seed(), None).unwrap();
    let n1 = graph.nodes()[0].id;
    let b = |label: usize| Id::from_label(label).unwrap();
    assert_eq!(graph.node_edges(n1), [b(1), b(2), b(3)]);
    assert_eq!(graph.node_edges(graph.reference_id()), [b(1), b(4), b(6)]);
    assert!(graph.node_edges(Id::from_index(99)).is_empty());
}
