//! The signed reduced incidence matrix.

use serde::{Deserialize, Serialize};
use tc_core::{BranchId, NodeId, Real, TcError, TcResult, ensure_finite};

/// Seed network shown before the user edits anything: 3 independent nodes,
/// 6 branches.
const SEED: [[Real; 6]; 3] = [
    [-1.0, 1.0, 1.0, 0.0, 0.0, 0.0],
    [0.0, -1.0, 0.0, 1.0, 1.0, 0.0],
    [0.0, 0.0, -1.0, 0.0, -1.0, 1.0],
];

/// Reduced incidence matrix A: rows are independent nodes, columns are branches.
///
/// Cells are stored row-major, so the matrix is always exactly `rows × cols`
/// and every cell is populated. Values are expected in {-1, 0, 1} but any
/// finite number is accepted.
///
/// Serializes as a nested `number[][]`. A matrix with zero rows serializes
/// as `[]` and loses its column count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Real>>", into = "Vec<Vec<Real>>")]
pub struct IncidenceMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<Real>,
}

impl IncidenceMatrix {
    /// All-zero matrix of the given shape.
    ///
    /// # Panics
    ///
    /// Panics if `rows × cols` overflows `usize`.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        let Some(len) = rows.checked_mul(cols) else {
            panic!("incidence matrix shape {rows}x{cols} overflows the cell count");
        };
        Self {
            rows,
            cols,
            cells: vec![0.0; len],
        }
    }

    /// The default 3×6 network.
    pub fn seed() -> Self {
        let mut m = Self::zeros(SEED.len(), SEED[0].len());
        for (i, row) in SEED.iter().enumerate() {
            m.row_mut(i).copy_from_slice(row);
        }
        m
    }

    /// Build from nested rows. Ragged input or non-finite cells are rejected.
    pub fn from_rows(rows: Vec<Vec<Real>>) -> TcResult<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let len = n_rows.checked_mul(n_cols).ok_or_else(|| TcError::Invariant {
            what: format!("incidence matrix shape {n_rows}x{n_cols} overflows the cell count"),
        })?;
        let mut cells = Vec::with_capacity(len);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(TcError::Invariant {
                    what: format!(
                        "row {} has {} columns, expected {}",
                        i + 1,
                        row.len(),
                        n_cols
                    ),
                });
            }
            for v in row {
                cells.push(ensure_finite(v, "incidence cell")?);
            }
        }
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            cells,
        })
    }

    /// Number of independent nodes.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of branches.
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell value, or `None` outside the matrix.
    pub fn get(&self, i: usize, j: usize) -> Option<Real> {
        if i < self.rows && j < self.cols {
            Some(self.cells[i * self.cols + j])
        } else {
            None
        }
    }

    /// One node's row.
    pub fn row(&self, i: usize) -> Option<&[Real]> {
        if i < self.rows {
            Some(&self.cells[i * self.cols..(i + 1) * self.cols])
        } else {
            None
        }
    }

    /// One branch's column, top to bottom. Empty when `j` is out of range.
    pub fn column(&self, j: usize) -> impl Iterator<Item = Real> + '_ {
        (0..self.rows).filter_map(move |i| self.get(i, j))
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Real>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.cells.chunks(self.cols).map(<[Real]>::to_vec).collect()
    }

    /// New matrix of shape `rows × cols` keeping the overlapping top-left
    /// block and zero-filling everything else.
    pub fn resized(&self, rows: usize, cols: usize) -> Self {
        let mut out = Self::zeros(rows, cols);
        let keep_rows = rows.min(self.rows);
        let keep_cols = cols.min(self.cols);
        for i in 0..keep_rows {
            let src = &self.cells[i * self.cols..i * self.cols + keep_cols];
            out.cells[i * cols..i * cols + keep_cols].copy_from_slice(src);
        }
        out
    }

    /// Copy of this matrix with one cell replaced. NaN and infinities are
    /// stored as `0`.
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` is outside the matrix.
    pub fn with_cell(&self, i: usize, j: usize, value: Real) -> Self {
        let mut out = self.clone();
        out.set(i, j, value);
        out
    }

    /// Labels `b1..bN` for every branch.
    pub fn branch_labels(&self) -> Vec<String> {
        (0..self.cols).map(branch_label).collect()
    }

    /// Labels `n1..nN` for every independent node.
    pub fn node_labels(&self) -> Vec<String> {
        (0..self.rows).map(node_label).collect()
    }

    /// Non-finite values become `0` so every cell stays representable in JSON.
    pub(crate) fn set(&mut self, i: usize, j: usize, value: Real) {
        assert!(
            i < self.rows && j < self.cols,
            "cell ({i}, {j}) outside {}x{} incidence matrix",
            self.rows,
            self.cols
        );
        self.cells[i * self.cols + j] = if value.is_finite() { value } else { 0.0 };
    }

    fn row_mut(&mut self, i: usize) -> &mut [Real] {
        &mut self.cells[i * self.cols..(i + 1) * self.cols]
    }
}

impl Default for IncidenceMatrix {
    fn default() -> Self {
        Self::seed()
    }
}

impl TryFrom<Vec<Vec<Real>>> for IncidenceMatrix {
    type Error = TcError;

    fn try_from(rows: Vec<Vec<Real>>) -> TcResult<Self> {
        Self::from_rows(rows)
    }
}

impl From<IncidenceMatrix> for Vec<Vec<Real>> {
    fn from(m: IncidenceMatrix) -> Self {
        m.to_rows()
    }
}

/// Display label of a 0-based branch column (`b1`, `b2`, ...).
pub fn branch_label(j: usize) -> String {
    format!("b{}", BranchId::from_index(j))
}

/// Display label of a 0-based node row (`n1`, `n2`, ...).
pub fn node_label(i: usize) -> String {
    format!("n{}", NodeId::from_index(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_shape() {
        let m = IncidenceMatrix::seed();
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 6);
        assert_eq!(m.get(0, 0), Some(-1.0));
        assert_eq!(m.get(2, 5), Some(1.0));
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m.get(0, 6), None);
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let err = IncidenceMatrix::from_rows(vec![vec![1.0, 0.0], vec![1.0]]).unwrap_err();
        assert!(matches!(err, TcError::Invariant { .. }));
    }

    #[test]
    fn from_rows_rejects_non_finite() {
        let err = IncidenceMatrix::from_rows(vec![vec![1.0, f64::NAN]]).unwrap_err();
        assert!(matches!(err, TcError::NonFinite { .. }));
    }

    #[test]
    fn column_reads_top_to_bottom() {
        let m = IncidenceMatrix::seed();
        let col: Vec<Real> = m.column(4).collect();
        assert_eq!(col, vec![0.0, 1.0, -1.0]);
        assert_eq!(m.column(99).count(), 0);
    }

    #[test]
    fn zero_column_rows_survive_to_rows() {
        let m = IncidenceMatrix::zeros(2, 0);
        assert_eq!(m.to_rows(), vec![Vec::<Real>::new(), Vec::new()]);
    }

    #[test]
    fn labels() {
        assert_eq!(branch_label(0), "b1");
        assert_eq!(node_label(2), "n3");
        assert_eq!(IncidenceMatrix::zeros(1, 3).branch_labels(), ["b1", "b2", "b3"]);
    }

    #[test]
    fn with_cell_zeroes_non_finite() {
        let m = IncidenceMatrix::seed().with_cell(0, 1, f64::NEG_INFINITY);
        assert_eq!(m.get(0, 1), Some(0.0));
    }

    #[test]
    #[should_panic(expected = "overflows the cell count")]
    fn zeros_rejects_overflowing_shape() {
        IncidenceMatrix::zeros(usize::MAX / 2 + 1, 2);
    }

    #[test]
    #[should_panic(expected = "outside 3x6")]
    fn with_cell_out_of_range_panics() {
        IncidenceMatrix::seed().with_cell(3, 0, 1.0);
    }
}
