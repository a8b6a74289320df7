//! Shared application layer for the topology calculator.
//!
//! Holds the explicit session state (live matrix + solve state) that a
//! front end drives, matrix input files, and the unified error type.

pub mod error;
pub mod input;
pub mod session;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use input::{MatrixDocument, load_matrix_file, parse_matrix_document};
pub use session::{Session, Solution, SolveState};
