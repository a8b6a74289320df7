//! Core graph data structures.

use std::fmt;

use serde::Serialize;
use tc_core::{BranchId, NodeId};

/// Role of a node in the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A node with its own row in the incidence matrix.
    Independent,
    /// The datum node omitted from the reduced incidence matrix.
    Reference,
}

/// Classification of a branch against the spanning tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Tree,
    Link,
    /// No tree/link partition is known yet.
    Unclassified,
}

impl EdgeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeKind::Tree => "tree",
            EdgeKind::Link => "link",
            EdgeKind::Unclassified => "unclassified",
        }
    }
}

/// A node of the network graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    pub kind: NodeKind,
}

impl Node {
    pub fn is_reference(&self) -> bool {
        self.kind == NodeKind::Reference
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// A directed branch: leaves `source`, enters `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// Branch index (1-based, matches the matrix column).
    pub id: BranchId,
    pub label: String,
    pub source: NodeId,
    pub target: NodeId,
    pub kind: EdgeKind,
}

impl Edge {
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// The graph: a validated, immutable collection of nodes and branch edges.
///
/// Nodes and edges are stored in ID order. For each node the incident edges
/// are kept in a compact offset table.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) reference: NodeId,

    /// Offsets for node->edge adjacency: node i's edges are in
    /// `node_edges[node_edge_offsets[i]..node_edge_offsets[i + 1]]`.
    pub(crate) node_edge_offsets: Vec<usize>,

    /// Flat list of incident edge IDs (sorted by node ID then edge ID for determinism).
    pub(crate) node_edges: Vec<BranchId>,
}

impl Graph {
    /// Return all nodes; the reference node comes last when built by reconstruction.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Return all edges in branch order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get a node by ID (returns None if ID out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get an edge by branch ID (returns None if ID out of bounds).
    pub fn edge(&self, id: BranchId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// ID of the datum node. Validation guarantees exactly one exists.
    pub fn reference_id(&self) -> NodeId {
        self.reference
    }

    /// The datum node.
    pub fn reference_node(&self) -> &Node {
        &self.nodes[self.reference.index()]
    }

    /// Iterate over edges classified as spanning-tree branches.
    pub fn tree_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| e.kind == EdgeKind::Tree)
    }

    /// Iterate over edges classified as links.
    pub fn link_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| e.kind == EdgeKind::Link)
    }

    /// Branch IDs incident to a node (a self-loop appears twice).
    pub fn node_edges(&self, node_id: NodeId) -> &[BranchId] {
        let idx = node_id.index();
        if idx >= self.nodes.len() {
            return &[];
        }
        let start = self.node_edge_offsets[idx];
        let end = self.node_edge_offsets[idx + 1];
        &self.node_edges[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_core::Id;

    #[test]
    fn edge_kind_strings() {
        assert_eq!(EdgeKind::Tree.as_str(), "tree");
        assert_eq!(EdgeKind::Link.as_str(), "link");
        assert_eq!(EdgeKind::Unclassified.as_str(), "unclassified");
    }

    #[test]
    fn self_loop_detection() {
        let edge = Edge {
            id: Id::from_index(0),
            label: "b1".into(),
            source: Id::from_index(3),
            target: Id::from_index(3),
            kind: EdgeKind::Link,
        };
        assert!(edge.is_self_loop());
        assert_eq!(edge.to_string(), "b1");
    }
}
