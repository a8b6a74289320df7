//! Graph-specific error types.

use tc_core::{BranchId, NodeId, TcError};

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph construction and validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge refers to a node that doesn't exist.
    InvalidEndpoint { edge: BranchId, node: NodeId },

    /// The graph has no reference node.
    MissingReference,

    /// More than one node is marked as the reference node.
    DuplicateReference { count: usize },

    /// An ID doesn't match its position (IDs must be contiguous from 1).
    NonContiguousId { what: &'static str, position: usize },

    /// Adjacency list is inconsistent (edge in node's list but edge doesn't touch node).
    InconsistentAdjacency { edge: BranchId, node: NodeId },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::InvalidEndpoint { edge, node } => {
                write!(f, "Branch b{} refers to non-existent node {}", edge, node)
            }
            GraphError::MissingReference => write!(f, "Graph has no reference node"),
            GraphError::DuplicateReference { count } => {
                write!(f, "Graph has {} reference nodes (expected 1)", count)
            }
            GraphError::NonContiguousId { what, position } => {
                write!(f, "{} at position {} has a non-contiguous ID", what, position)
            }
            GraphError::InconsistentAdjacency { edge, node } => {
                write!(
                    f,
                    "Branch b{} in node {}'s adjacency list but doesn't touch that node",
                    edge, node
                )
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for TcError {
    fn from(err: GraphError) -> Self {
        TcError::Invariant {
            what: err.to_string(),
        }
    }
}
