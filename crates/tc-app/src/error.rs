//! Error types for the tc-app layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and provides a unified error interface for front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read matrix file: {path}")]
    MatrixFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid matrix document: {0}")]
    MatrixParse(String),

    #[error("A solve is already in progress")]
    SolveInFlight,

    #[error("No solve is in progress")]
    NotPending,

    /// A settled solve that failed; carries the user-facing message.
    #[error("{0}")]
    SolveFailed(String),

    #[error("{0}")]
    Computation(#[from] tc_client::ComputationError),

    #[error("Graph error: {0}")]
    Graph(#[from] tc_graph::GraphError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to encode output: {0}")]
    Encode(String),

    #[error(transparent)]
    Core(#[from] tc_core::TcError),
}

/// Result type for tc-app operations.
pub type AppResult<T> = Result<T, AppError>;
