//! tc-results: labeled tabular views of a topology result.

pub mod format;
pub mod table;

pub use format::Precision;
pub use table::{
    LabeledTable, PartitionSummary, branch_list, cut_set_table, reordered_incidence_table,
    tie_set_table,
};
