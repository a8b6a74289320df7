//! Rebuild the network graph from an incidence matrix.

use std::collections::HashSet;

use tc_core::{Incidence, NodeId};
use tc_matrix::{IncidenceMatrix, branch_label};
use tracing::debug;

use crate::builder::GraphBuilder;
use crate::error::GraphResult;
use crate::graph::{EdgeKind, Graph, NodeKind};

/// Reconstruct the directed graph described by `matrix`.
///
/// One node per matrix row (labelled `1..=rows`) is followed by the reference
/// node (labelled `rows + 1`). Each column becomes one edge, in column order:
/// the first row holding `+1` is the source and the first row holding `-1` is
/// the target; an endpoint with no such row is the reference node. When a
/// column carries several `+1` (or `-1`) entries the topmost wins; such input
/// is not a physical incidence column and is accepted without complaint.
///
/// `tree_indices` holds 1-based branch indices of the spanning tree. Edges in
/// it are `Tree`, all others `Link`; with no partition every edge is
/// `Unclassified`. Indices beyond the matrix width are ignored.
pub fn build_graph(matrix: &IncidenceMatrix, tree_indices: Option<&[usize]>) -> GraphResult<Graph> {
    let rows = matrix.rows();
    let cols = matrix.cols();
    let mut builder = GraphBuilder::with_capacity(rows + 1, cols);

    let row_nodes: Vec<NodeId> = (1..=rows)
        .map(|label| builder.add_node(label.to_string(), NodeKind::Independent))
        .collect();
    let reference = builder.add_node((rows + 1).to_string(), NodeKind::Reference);

    let tree: Option<HashSet<usize>> = tree_indices.map(|t| t.iter().copied().collect());

    for j in 0..cols {
        let (source, target) = resolve_endpoints(matrix, j);
        let kind = match &tree {
            None => EdgeKind::Unclassified,
            Some(tree) if tree.contains(&(j + 1)) => EdgeKind::Tree,
            Some(_) => EdgeKind::Link,
        };
        builder.add_edge(
            branch_label(j),
            source.map_or(reference, |i| row_nodes[i]),
            target.map_or(reference, |i| row_nodes[i]),
            kind,
        );
    }

    let graph = builder.build()?;
    debug!(
        nodes = graph.nodes().len(),
        edges = graph.edges().len(),
        classified = tree_indices.is_some(),
        "graph reconstructed"
    );
    Ok(graph)
}

/// Rows of the first `+1` and first `-1` in column `j`, scanning top to bottom.
fn resolve_endpoints(matrix: &IncidenceMatrix, j: usize) -> (Option<usize>, Option<usize>) {
    let mut source = None;
    let mut target = None;
    for (i, value) in matrix.column(j).enumerate() {
        match Incidence::of(value) {
            Incidence::Departs if source.is_none() => source = Some(i),
            Incidence::Arrives if target.is_none() => target = Some(i),
            _ => {}
        }
        if source.is_some() && target.is_some() {
            break;
        }
    }
    (source, target)
}
