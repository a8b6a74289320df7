//! tc-matrix: incidence-matrix state model.
//!
//! Provides:
//! - `IncidenceMatrix`: a fully populated, rectangular signed incidence matrix
//! - `MatrixStore`: the single owner of the live matrix, mutated only through
//!   resize and cell-edit transitions
//!
//! # Example
//!
//! ```
//! use tc_matrix::MatrixStore;
//!
//! let mut store = MatrixStore::new();
//! store.set_dimensions(2, 4);
//! store.set_cell(1, 3, "-1");
//!
//! assert_eq!(store.matrix().get(1, 3), Some(-1.0));
//! assert_eq!(store.matrix().cols(), 4);
//! ```

pub mod matrix;
pub mod store;

pub use matrix::{IncidenceMatrix, branch_label, node_label};
pub use store::MatrixStore;
