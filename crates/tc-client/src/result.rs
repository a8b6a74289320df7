//! Normalized solve result.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tc_core::Real;

use crate::error::ComputationError;
use crate::wire::SolveResponse;

/// Tree/link partition and derived matrices returned by the service.
///
/// Branch indices are 1-based. `column_order` lists branch labels with tree
/// branches first; `reordered_a`, `matrix_b` and `matrix_c` are aligned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyResult {
    pub tree_indices: Vec<usize>,
    pub link_indices: Vec<usize>,
    pub column_order: Vec<String>,
    pub reordered_a: Vec<Vec<Real>>,
    pub matrix_b: Vec<Vec<Real>>,
    pub matrix_c: Vec<Vec<Real>>,
}

impl TopologyResult {
    /// Normalize a success body for a matrix with `cols` branches.
    pub fn from_response(response: SolveResponse, cols: usize) -> Result<Self, ComputationError> {
        validate_partition(
            &response.tree_indices_original,
            &response.link_indices_original,
            cols,
        )
        .map_err(ComputationError::MalformedResult)?;

        if response.column_order.len() != cols {
            return Err(ComputationError::MalformedResult(format!(
                "column order lists {} branches, expected {}",
                response.column_order.len(),
                cols
            )));
        }

        Ok(Self {
            tree_indices: response.tree_indices_original,
            link_indices: response.link_indices_original,
            column_order: response.column_order,
            reordered_a: response.a_reordered,
            matrix_b: response.b_matrix,
            matrix_c: response.c_matrix,
        })
    }

    /// Number of branches covered by the partition.
    pub fn branch_count(&self) -> usize {
        self.tree_indices.len() + self.link_indices.len()
    }

    pub fn is_tree_branch(&self, branch: usize) -> bool {
        self.tree_indices.contains(&branch)
    }
}

/// Check that `tree` and `links` are disjoint and together cover `1..=cols`
/// exactly once.
pub fn validate_partition(tree: &[usize], links: &[usize], cols: usize) -> Result<(), String> {
    let mut seen = HashSet::with_capacity(cols);
    for &branch in tree.iter().chain(links) {
        if branch == 0 || branch > cols {
            return Err(format!("branch index {branch} outside 1..={cols}"));
        }
        if !seen.insert(branch) {
            return Err(format!("branch b{branch} appears more than once"));
        }
    }
    if seen.len() != cols {
        return Err(format!(
            "partition covers {} of {} branches",
            seen.len(),
            cols
        ));
    }
    Ok(())
}
