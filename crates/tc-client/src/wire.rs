//! JSON bodies exchanged with the service.

use serde::{Deserialize, Serialize};
use tc_core::Real;
use tc_matrix::IncidenceMatrix;

/// `POST /calculate_topology` body.
#[derive(Debug, Serialize)]
pub struct SolveRequest<'a> {
    #[serde(rename = "matrixA")]
    pub matrix_a: &'a IncidenceMatrix,
}

/// Success body. Extra fields (the service also sends `message`) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SolveResponse {
    pub tree_indices_original: Vec<usize>,
    pub link_indices_original: Vec<usize>,
    pub column_order: Vec<String>,
    #[serde(rename = "A_reordered")]
    pub a_reordered: Vec<Vec<Real>>,
    #[serde(rename = "B_matrix")]
    pub b_matrix: Vec<Vec<Real>>,
    #[serde(rename = "C_matrix")]
    pub c_matrix: Vec<Vec<Real>>,
}

/// Error body of a non-success response.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
