//! The solve round-trip.

use reqwest::blocking::Client;
use tc_matrix::IncidenceMatrix;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::{ComputationError, FALLBACK_MESSAGE};
use crate::result::TopologyResult;
use crate::wire::{ErrorBody, SolveRequest, SolveResponse};

/// Anything that can turn an incidence matrix into a topology result.
///
/// The matrix is forwarded as-is; degenerate networks are reported by the
/// implementation, not rejected up front.
pub trait TopologyService {
    fn solve(&self, matrix: &IncidenceMatrix) -> Result<TopologyResult, ComputationError>;
}

/// HTTP client for the topology service.
#[derive(Debug, Clone)]
pub struct HttpTopologyClient {
    client: Client,
    endpoint: String,
}

impl HttpTopologyClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ComputationError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl TopologyService for HttpTopologyClient {
    fn solve(&self, matrix: &IncidenceMatrix) -> Result<TopologyResult, ComputationError> {
        info!(
            endpoint = %self.endpoint,
            rows = matrix.rows(),
            cols = matrix.cols(),
            "submitting incidence matrix"
        );
        let response = self
            .client
            .post(&self.endpoint)
            .json(&SolveRequest { matrix_a: matrix })
            .send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        debug!(status, bytes = body.len(), "topology service answered");
        interpret_response(status, &body, matrix.cols())
    }
}

/// Turn a raw status and body into a result for a matrix with `cols` branches.
///
/// A 2xx body must decode and carry a complete tree/link partition. Any other
/// status yields the body's `error` text, or [`FALLBACK_MESSAGE`] when the
/// body has none.
pub fn interpret_response(
    status: u16,
    body: &str,
    cols: usize,
) -> Result<TopologyResult, ComputationError> {
    if (200..300).contains(&status) {
        let response: SolveResponse =
            serde_json::from_str(body).map_err(|e| ComputationError::Decode(e.to_string()))?;
        return TopologyResult::from_response(response, cols);
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
    warn!(status, %message, "topology service rejected the matrix");
    Err(ComputationError::Remote { status, message })
}
