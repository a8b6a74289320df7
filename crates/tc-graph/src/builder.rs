//! Incremental graph builder.

use std::collections::HashMap;
use tc_core::{BranchId, NodeId};

use crate::error::GraphResult;
use crate::graph::{Edge, EdgeKind, Graph, Node, NodeKind};
use crate::validate;

/// Builder for constructing a graph incrementally.
///
/// Use `add_node` and `add_edge` to build up the graph,
/// then call `build()` to validate and freeze it into an immutable `Graph`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with room for the given counts.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
        }
    }

    /// Add a node to the graph and return its ID.
    pub fn add_node(&mut self, label: impl Into<String>, kind: NodeKind) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(Node {
            id,
            label: label.into(),
            kind,
        });
        id
    }

    /// Add a directed branch from `source` to `target` and return its branch ID.
    pub fn add_edge(
        &mut self,
        label: impl Into<String>,
        source: NodeId,
        target: NodeId,
        kind: EdgeKind,
    ) -> BranchId {
        let id = BranchId::from_index(self.edges.len());
        self.edges.push(Edge {
            id,
            label: label.into(),
            source,
            target,
            kind,
        });
        id
    }

    /// Build and validate the graph, returning an immutable `Graph`.
    ///
    /// This performs validation and constructs compact adjacency lists.
    pub fn build(self) -> GraphResult<Graph> {
        let reference = validate::validate_structure(&self.nodes, &self.edges)?;

        let (node_edge_offsets, node_edges) = Self::build_adjacency(&self.nodes, &self.edges);

        validate::validate_adjacency(&self.nodes, &self.edges, &node_edge_offsets, &node_edges)?;

        Ok(Graph {
            nodes: self.nodes,
            edges: self.edges,
            reference,
            node_edge_offsets,
            node_edges,
        })
    }

    /// Build compact adjacency lists: for each node, collect its incident edges.
    fn build_adjacency(nodes: &[Node], edges: &[Edge]) -> (Vec<usize>, Vec<BranchId>) {
        let mut node_to_edges: HashMap<NodeId, Vec<BranchId>> = HashMap::new();
        for edge in edges {
            node_to_edges.entry(edge.source).or_default().push(edge.id);
            node_to_edges.entry(edge.target).or_default().push(edge.id);
        }

        // Sort each node's edge list for determinism
        for edge_list in node_to_edges.values_mut() {
            edge_list.sort();
        }

        let mut offsets = Vec::with_capacity(nodes.len() + 1);
        let mut flat_edges = Vec::new();
        offsets.push(0);

        for node in nodes {
            if let Some(edge_list) = node_to_edges.get(&node.id) {
                flat_edges.extend_from_slice(edge_list);
            }
            offsets.push(flat_edges.len());
        }

        (offsets, flat_edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    #[test]
    fn builder_basic() {
        let mut builder = GraphBuilder::new();
        let n1 = builder.add_node("1", NodeKind::Independent);
        let r = builder.add_node("2", NodeKind::Reference);
        let b1 = builder.add_edge("b1", n1, r, EdgeKind::Tree);

        assert_eq!(n1.label(), 1);
        assert_eq!(r.label(), 2);
        assert_eq!(b1.label(), 1);
        assert_eq!(builder.nodes.len(), 2);
        assert_eq!(builder.edges.len(), 1);
    }

    #[test]
    fn builder_build_simple() {
        let mut builder = GraphBuilder::new();
        let n1 = builder.add_node("1", NodeKind::Independent);
        let n2 = builder.add_node("2", NodeKind::Independent);
        let r = builder.add_node("3", NodeKind::Reference);
        builder.add_edge("b1", n1, n2, EdgeKind::Tree);
        builder.add_edge("b2", r, r, EdgeKind::Link);

        let graph = builder.build().unwrap();
        assert_eq!(graph.nodes().len(), 3);
        assert_eq!(graph.edges().len(), 2);
        assert_eq!(graph.reference_id(), r);

        assert_eq!(graph.node_edges(n1).len(), 1);
        assert_eq!(graph.node_edges(n2).len(), 1);
        // Self-loop counts at both ends
        assert_eq!(graph.node_edges(r).len(), 2);
    }

    #[test]
    fn builder_requires_reference() {
        let mut builder = GraphBuilder::new();
        builder.add_node("1", NodeKind::Independent);
        assert_eq!(builder.build().unwrap_err(), GraphError::MissingReference);
    }
}
