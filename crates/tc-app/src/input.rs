//! Matrix input documents.
//!
//! A document carries the incidence matrix under the same key the service
//! expects, so a request body saved from elsewhere loads as-is:
//!
//! ```yaml
//! matrixA:
//!   - [-1, 1, 1, 0, 0, 0]
//!   - [0, -1, 0, 1, 1, 0]
//!   - [0, 0, -1, 0, -1, 1]
//! ```
//!
//! YAML is a superset of JSON, so `{"matrixA": [[...]]}` works too.

use std::path::Path;

use serde::Deserialize;
use tc_matrix::IncidenceMatrix;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatrixDocument {
    #[serde(rename = "matrixA")]
    pub matrix_a: IncidenceMatrix,
}

/// Parse a YAML or JSON matrix document.
pub fn parse_matrix_document(content: &str) -> AppResult<IncidenceMatrix> {
    let doc: MatrixDocument = serde_yaml::from_str(content)
        .map_err(|e| AppError::MatrixParse(format!("Failed to parse matrix document: {}", e)))?;
    Ok(doc.matrix_a)
}

/// Load a matrix document from disk.
pub fn load_matrix_file(path: &Path) -> AppResult<IncidenceMatrix> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::MatrixFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_matrix_document(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_yaml() {
        let m = parse_matrix_document("matrixA:\n  - [1, -1]\n  - [0, 1]\n").unwrap();
        assert_eq!(m.to_rows(), vec![vec![1.0, -1.0], vec![0.0, 1.0]]);
    }

    #[test]
    fn parses_json() {
        let m = parse_matrix_document(r#"{"matrixA": [[-1, 1, 0]]}"#).unwrap();
        assert_eq!(m.cols(), 3);
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = parse_matrix_document(r#"{"matrixA": [[1, 0], [1]]}"#).unwrap_err();
        assert!(matches!(err, AppError::MatrixParse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_matrix_file(Path::new("/nonexistent/matrix.yaml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/matrix.yaml"));
    }
}
