//! Graph validation logic.

use tc_core::{BranchId, NodeId};

use crate::error::{GraphError, GraphResult};
use crate::graph::{Edge, Node};

/// Validate the graph structure and return the reference node's ID.
///
/// Checks that IDs are contiguous, exactly one reference node exists, and
/// every edge endpoint names an existing node.
pub(crate) fn validate_structure(nodes: &[Node], edges: &[Edge]) -> GraphResult<NodeId> {
    for (i, node) in nodes.iter().enumerate() {
        if node.id.index() != i {
            return Err(GraphError::NonContiguousId {
                what: "Node",
                position: i,
            });
        }
    }
    for (i, edge) in edges.iter().enumerate() {
        if edge.id.index() != i {
            return Err(GraphError::NonContiguousId {
                what: "Branch",
                position: i,
            });
        }
    }

    let mut references = nodes.iter().filter(|n| n.is_reference());
    let reference = references.next().ok_or(GraphError::MissingReference)?.id;
    let extra = references.count();
    if extra > 0 {
        return Err(GraphError::DuplicateReference { count: extra + 1 });
    }

    for edge in edges {
        for node in [edge.source, edge.target] {
            if node.index() >= nodes.len() {
                return Err(GraphError::InvalidEndpoint {
                    edge: edge.id,
                    node,
                });
            }
        }
    }

    Ok(reference)
}

/// Validate adjacency consistency: every edge listed under a node touches that node.
pub(crate) fn validate_adjacency(
    nodes: &[Node],
    edges: &[Edge],
    node_edge_offsets: &[usize],
    node_edges: &[BranchId],
) -> GraphResult<()> {
    for (i, node) in nodes.iter().enumerate() {
        let start = node_edge_offsets[i];
        let end = node_edge_offsets[i + 1];
        for &edge_id in &node_edges[start..end] {
            let touches = edges
                .get(edge_id.index())
                .is_some_and(|e| e.source == node.id || e.target == node.id);
            if !touches {
                return Err(GraphError::InconsistentAdjacency {
                    edge: edge_id,
                    node: node.id,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeKind, NodeKind};
    use tc_core::Id;

    fn node(index: usize, kind: NodeKind) -> Node {
        Node {
            id: Id::from_index(index),
            label: (index + 1).to_string(),
            kind,
        }
    }

    #[test]
    fn validate_reference_only() {
        let nodes = vec![node(0, NodeKind::Reference)];
        let reference = validate_structure(&nodes, &[]).unwrap();
        assert_eq!(reference, Id::from_index(0));
    }

    #[test]
    fn validate_invalid_endpoint() {
        let nodes = vec![node(0, NodeKind::Independent), node(1, NodeKind::Reference)];
        let edges = vec![Edge {
            id: Id::from_index(0),
            label: "b1".into(),
            source: Id::from_index(0),
            target: Id::from_index(99), // Invalid!
            kind: EdgeKind::Link,
        }];

        let err = validate_structure(&nodes, &edges).unwrap_err();
        assert!(matches!(err, GraphError::InvalidEndpoint { .. }));
    }

    #[test]
    fn validate_duplicate_reference() {
        let nodes = vec![node(0, NodeKind::Reference), node(1, NodeKind::Reference)];
        let err = validate_structure(&nodes, &[]).unwrap_err();
        assert_eq!(err, GraphError::DuplicateReference { count: 2 });
    }

    #[test]
    fn validate_non_contiguous_ids() {
        let nodes = vec![node(1, NodeKind::Reference)];
        let err = validate_structure(&nodes, &[]).unwrap_err();
        assert!(matches!(err, GraphError::NonContiguousId { what: "Node", .. }));
    }

    #[test]
    fn validate_adjacency_mismatch() {
        let nodes = vec![node(0, NodeKind::Independent), node(1, NodeKind::Reference)];
        let edges = vec![Edge {
            id: Id::from_index(0),
            label: "b1".into(),
            source: Id::from_index(1),
            target: Id::from_index(1),
            kind: EdgeKind::Link,
        }];
        // Claim node 1 (index 0) is incident to b1, which only touches the reference node.
        let offsets = vec![0, 1, 1];
        let flat = vec![Id::from_index(0)];
        let err = validate_adjacency(&nodes, &edges, &offsets, &flat).unwrap_err();
        assert!(matches!(err, GraphError::InconsistentAdjacency { .. }));
    }
}
