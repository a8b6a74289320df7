//! Owner of the live incidence matrix.

use tc_core::{Real, TcError, TcResult, parse_lenient};
use tracing::debug;

use crate::matrix::IncidenceMatrix;

/// Exclusive owner of the session's incidence matrix.
///
/// Every mutation is a whole-value replacement computed from the previous
/// matrix, so readers never observe a partially resized matrix.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatrixStore {
    matrix: IncidenceMatrix,
}

impl MatrixStore {
    /// Store holding the seed network.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_matrix(matrix: IncidenceMatrix) -> Self {
        Self { matrix }
    }

    /// Read-only view of the current matrix.
    pub fn matrix(&self) -> &IncidenceMatrix {
        &self.matrix
    }

    /// Owned copy of the current matrix.
    pub fn snapshot(&self) -> IncidenceMatrix {
        self.matrix.clone()
    }

    /// Replace the whole matrix (e.g. after loading an input file).
    pub fn replace(&mut self, matrix: IncidenceMatrix) {
        debug!(rows = matrix.rows(), cols = matrix.cols(), "matrix replaced");
        self.matrix = matrix;
    }

    /// Resize to `rows × cols`, keeping the overlapping block and zero-filling
    /// new cells. Calling it again with the same shape changes nothing.
    ///
    /// # Panics
    ///
    /// Panics if `rows × cols` overflows `usize`.
    pub fn set_dimensions(&mut self, rows: usize, cols: usize) {
        if rows == self.matrix.rows() && cols == self.matrix.cols() {
            return;
        }
        debug!(
            from_rows = self.matrix.rows(),
            from_cols = self.matrix.cols(),
            rows,
            cols,
            "resizing incidence matrix"
        );
        self.matrix = self.matrix.resized(rows, cols);
    }

    /// Edit one cell from raw user text; unparseable text stores `0`.
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` is outside the matrix. Front ends that take
    /// coordinates from user input should use [`MatrixStore::try_set_cell`].
    pub fn set_cell(&mut self, i: usize, j: usize, raw: &str) {
        self.set_value(i, j, parse_lenient(raw));
    }

    /// Edit one cell with an already-numeric value; NaN and infinities store `0`.
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` is outside the matrix.
    pub fn set_value(&mut self, i: usize, j: usize, value: Real) {
        debug!(row = i, col = j, value, "cell edit");
        self.matrix.set(i, j, value);
    }

    /// Bounds-checked variant of [`MatrixStore::set_cell`].
    pub fn try_set_cell(&mut self, i: usize, j: usize, raw: &str) -> TcResult<()> {
        if i >= self.matrix.rows() {
            return Err(TcError::IndexOob {
                what: "node row",
                index: i,
                len: self.matrix.rows(),
            });
        }
        if j >= self.matrix.cols() {
            return Err(TcError::IndexOob {
                what: "branch column",
                index: j,
                len: self.matrix.cols(),
            });
        }
        self.set_cell(i, j, raw);
        Ok(())
    }
}
