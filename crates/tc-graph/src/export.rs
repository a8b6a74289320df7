//! Hand-off formats for rendering layers.

use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, EdgeReference, NodeIndex};
use serde::Serialize;

use crate::graph::{Edge, EdgeKind, Graph, Node};

/// petgraph form of the network; node and edge indices follow ID order.
pub type NetworkGraph = DiGraph<Node, Edge>;

/// Flat node/edge descriptors for a generic graph renderer.
#[derive(Debug, Clone, Serialize)]
pub struct GraphView<'a> {
    pub nodes: &'a [Node],
    pub edges: &'a [Edge],
}

impl Graph {
    pub fn view(&self) -> GraphView<'_> {
        GraphView {
            nodes: &self.nodes,
            edges: &self.edges,
        }
    }

    /// Copy into a petgraph `DiGraph`.
    pub fn to_petgraph(&self) -> NetworkGraph {
        let mut g = DiGraph::with_capacity(self.nodes.len(), self.edges.len());
        let indices: Vec<NodeIndex> = self.nodes.iter().map(|n| g.add_node(n.clone())).collect();
        for edge in &self.edges {
            g.add_edge(
                indices[edge.source.index()],
                indices[edge.target.index()],
                edge.clone(),
            );
        }
        g
    }

    /// Graphviz DOT text: tree branches solid, links dashed, the reference
    /// node drawn as a double circle.
    pub fn to_dot(&self) -> String {
        let g = self.to_petgraph();
        format!(
            "{}",
            Dot::with_attr_getters(
                &g,
                &[Config::NodeNoLabel, Config::EdgeNoLabel],
                &edge_attributes,
                &node_attributes,
            )
        )
    }
}

fn edge_attributes(_: &NetworkGraph, edge: EdgeReference<'_, Edge>) -> String {
    let e = edge.weight();
    let style = match e.kind {
        EdgeKind::Tree => "style = bold, color = \"#1f77b4\"",
        EdgeKind::Link => "style = dashed, color = \"#d62728\"",
        EdgeKind::Unclassified => "color = gray",
    };
    format!("label = \"{}\", {}", e.label, style)
}

fn node_attributes(_: &NetworkGraph, (_, node): (NodeIndex, &Node)) -> String {
    if node.is_reference() {
        format!("label = \"{}\", shape = doublecircle", node.label)
    } else {
        format!("label = \"{}\", shape = circle", node.label)
    }
}

#[cfg(test)]
mod tests {
    use crate::build_graph;
    use tc_matrix::IncidenceMatrix;

    #[test]
    fn petgraph_mirrors_graph() {
        let graph = build_graph(&IncidenceMatrix::seed(), None).unwrap();
        let g = graph.to_petgraph();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 6);
    }

    #[test]
    fn dot_marks_roles() {
        let graph = build_graph(&IncidenceMatrix::seed(), Some(&[1, 2, 3][..])).unwrap();
        let dot = graph.to_dot();
        assert!(dot.starts_with("digraph"));
        assert!(dot.contains("doublecircle"));
        assert!(dot.contains("label = \"b1\", style = bold"));
        assert!(dot.contains("label = \"b6\", style = dashed"));
    }

    #[test]
    fn view_serializes_flat() {
        let graph = build_graph(&IncidenceMatrix::seed(), Some(&[1, 2, 3][..])).unwrap();
        let json = serde_json::to_value(graph.view()).unwrap();
        assert_eq!(json["nodes"][3]["kind"], "reference");
        assert_eq!(json["nodes"][3]["label"], "4");
        assert_eq!(json["edges"][0]["source"], 4);
        assert_eq!(json["edges"][0]["target"], 1);
        assert_eq!(json["edges"][0]["kind"], "tree");
    }
}
