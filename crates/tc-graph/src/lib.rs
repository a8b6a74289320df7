//! tc-graph: directed-graph view of an incidence matrix.
//!
//! Provides:
//! - Graph data structures (Node, Edge, Graph) with a synthetic reference node
//! - Incremental graph builder with validation
//! - Reconstruction of the graph from a matrix and a tree/link partition
//! - Export to petgraph, Graphviz DOT and a flat serializable view
//!
//! # Example
//!
//! ```
//! use tc_graph::{EdgeKind, build_graph};
//! use tc_matrix::IncidenceMatrix;
//!
//! let matrix = IncidenceMatrix::seed();
//! let graph = build_graph(&matrix, Some(&[1, 2, 3][..])).unwrap();
//!
//! assert_eq!(graph.nodes().len(), 4);
//! assert_eq!(graph.edges().len(), 6);
//! assert_eq!(graph.edges()[0].kind, EdgeKind::Tree);
//! assert_eq!(graph.edges()[5].kind, EdgeKind::Link);
//! ```

pub mod builder;
pub mod error;
pub mod export;
pub mod graph;
pub mod reconstruct;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::{GraphError, GraphResult};
pub use export::{GraphView, NetworkGraph};
pub use graph::{Edge, EdgeKind, Graph, Node, NodeKind};
pub use reconstruct::build_graph;
