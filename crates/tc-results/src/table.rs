//! Row/column-labeled grids for result matrices.

use serde::Serialize;
use tc_client::TopologyResult;
use tc_core::Real;
use tc_matrix::{branch_label, node_label};

use crate::format::Precision;

/// A matrix with a title, column headers and row headers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledTable {
    pub title: String,
    pub column_labels: Vec<String>,
    pub row_labels: Vec<String>,
    pub rows: Vec<Vec<Real>>,
}

impl LabeledTable {
    pub fn new(
        title: impl Into<String>,
        column_labels: Vec<String>,
        row_labels: Vec<String>,
        rows: Vec<Vec<Real>>,
    ) -> Self {
        Self {
            title: title.into(),
            column_labels,
            row_labels,
            rows,
        }
    }

    /// Label rows positionally: `"{prefix} 1"`, `"{prefix} 2"`, ...
    fn positional(
        title: &str,
        prefix: &str,
        column_labels: &[String],
        rows: &[Vec<Real>],
    ) -> Self {
        let row_labels = (1..=rows.len()).map(|k| format!("{prefix} {k}")).collect();
        Self::new(title, column_labels.to_vec(), row_labels, rows.to_vec())
    }

    /// Render as aligned plain text: title line, header row, one line per row.
    ///
    /// Rows shorter than the header are padded with blanks; a missing row
    /// label renders empty.
    pub fn render(&self, precision: Precision) -> String {
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(|&v| precision.format(v)).collect())
            .collect();

        let n_cols = cells
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.column_labels.len()))
            .max()
            .unwrap_or(0);

        let label_width = self.row_labels.iter().map(String::len).max().unwrap_or(0);
        let mut widths = vec![0usize; n_cols];
        for (j, width) in widths.iter_mut().enumerate() {
            let header = self.column_labels.get(j).map_or(0, String::len);
            let body = cells
                .iter()
                .filter_map(|r| r.get(j))
                .map(String::len)
                .max()
                .unwrap_or(0);
            *width = header.max(body);
        }

        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');

        out.push_str(&format!("{:label_width$}", ""));
        for (j, width) in widths.iter().enumerate() {
            let header = self.column_labels.get(j).map_or("", String::as_str);
            out.push_str(&format!("  {header:>width$}"));
        }
        out.push('\n');

        for (i, row) in cells.iter().enumerate() {
            let label = self.row_labels.get(i).map_or("", String::as_str);
            out.push_str(&format!("{label:<label_width$}"));
            for (j, width) in widths.iter().enumerate() {
                let cell = row.get(j).map_or("", String::as_str);
                out.push_str(&format!("  {cell:>width$}"));
            }
            out.push('\n');
        }
        out
    }
}

/// Tie-set matrix B: one row per fundamental loop.
pub fn tie_set_table(result: &TopologyResult) -> LabeledTable {
    LabeledTable::positional(
        "B Matrix (Tie-Set) [Tree | Links]",
        "Loop",
        &result.column_order,
        &result.matrix_b,
    )
}

/// Cut-set matrix C: one row per fundamental cut-set.
pub fn cut_set_table(result: &TopologyResult) -> LabeledTable {
    LabeledTable::positional(
        "C Matrix (Cut-Set) [Tree | Links]",
        "Cut",
        &result.column_order,
        &result.matrix_c,
    )
}

/// Incidence matrix with columns in tree-first order; rows are `n1..nk`.
pub fn reordered_incidence_table(result: &TopologyResult) -> LabeledTable {
    LabeledTable::new(
        "A Matrix (Reordered: Tree | Links)",
        result.column_order.clone(),
        (0..result.reordered_a.len()).map(node_label).collect(),
        result.reordered_a.clone(),
    )
}

/// Comma-separated branch labels for 1-based indices: `"b1, b2, b3"`.
pub fn branch_list(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|&k| branch_label(k.saturating_sub(1)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Tree and link branch labels of a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartitionSummary {
    pub tree: Vec<String>,
    pub links: Vec<String>,
}

impl PartitionSummary {
    pub fn of(result: &TopologyResult) -> Self {
        let labels = |indices: &[usize]| -> Vec<String> {
            indices
                .iter()
                .map(|&k| branch_label(k.saturating_sub(1)))
                .collect()
        };
        Self {
            tree: labels(&result.tree_indices),
            links: labels(&result.link_indices),
        }
    }
}
