//! Explicit state container driven by a front end.
//!
//! The session owns the live matrix (through [`MatrixStore`]) and the state
//! of the most recent solve. Every transition is a method call; nothing here
//! depends on a rendering framework.

use tc_client::{ComputationError, TopologyResult, TopologyService};
use tc_core::TcResult;
use tc_graph::{Graph, build_graph};
use tc_matrix::{IncidenceMatrix, MatrixStore};
use tc_results::{LabeledTable, cut_set_table, reordered_incidence_table, tie_set_table};
use tracing::{info, warn};

use crate::error::{AppError, AppResult};

/// A successful solve together with the matrix it was computed for.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub result: TopologyResult,
    pub matrix: IncidenceMatrix,
}

/// Where the most recent solve stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SolveState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is in flight; re-submission is refused.
    Pending,
    Solved(Solution),
    /// The user-facing message of the failure.
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    store: MatrixStore,
    state: SolveState,
}

impl Session {
    /// Session holding the seed network.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_matrix(matrix: IncidenceMatrix) -> Self {
        Self {
            store: MatrixStore::with_matrix(matrix),
            state: SolveState::Idle,
        }
    }

    pub fn matrix(&self) -> &IncidenceMatrix {
        self.store.matrix()
    }

    pub fn state(&self) -> &SolveState {
        &self.state
    }

    /// True while a solve is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self.state, SolveState::Pending)
    }

    pub fn result(&self) -> Option<&TopologyResult> {
        match &self.state {
            SolveState::Solved(solution) => Some(&solution.result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            SolveState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn set_dimensions(&mut self, rows: usize, cols: usize) {
        self.store.set_dimensions(rows, cols);
    }

    /// # Panics
    ///
    /// Panics if `(i, j)` is outside the matrix.
    pub fn set_cell(&mut self, i: usize, j: usize, raw: &str) {
        self.store.set_cell(i, j, raw);
    }

    pub fn try_set_cell(&mut self, i: usize, j: usize, raw: &str) -> TcResult<()> {
        self.store.try_set_cell(i, j, raw)
    }

    pub fn replace_matrix(&mut self, matrix: IncidenceMatrix) {
        self.store.replace(matrix);
    }

    /// Enter `Pending` and return the snapshot to submit.
    ///
    /// Any previous result or error is cleared first, so a failed request
    /// never leaves an older result on display.
    pub fn begin_solve(&mut self) -> AppResult<IncidenceMatrix> {
        if self.is_busy() {
            return Err(AppError::SolveInFlight);
        }
        self.state = SolveState::Pending;
        let snapshot = self.store.snapshot();
        info!(rows = snapshot.rows(), cols = snapshot.cols(), "solve started");
        Ok(snapshot)
    }

    /// Leave `Pending` with the outcome of the request for `submitted`.
    pub fn settle(
        &mut self,
        submitted: IncidenceMatrix,
        outcome: Result<TopologyResult, ComputationError>,
    ) -> AppResult<()> {
        if !self.is_busy() {
            return Err(AppError::NotPending);
        }
        self.state = match outcome {
            Ok(result) => {
                info!(
                    tree = result.tree_indices.len(),
                    links = result.link_indices.len(),
                    "solve settled"
                );
                SolveState::Solved(Solution {
                    result,
                    matrix: submitted,
                })
            }
            Err(err) => {
                warn!(error = %err, "solve failed");
                SolveState::Failed(err.user_message())
            }
        };
        Ok(())
    }

    /// Submit the current matrix to `service` and settle with its answer.
    ///
    /// Computation failures are recorded in the state, not returned; the
    /// only error is a solve already being in flight.
    pub fn solve_with(&mut self, service: &dyn TopologyService) -> AppResult<&SolveState> {
        let snapshot = self.begin_solve()?;
        let outcome = service.solve(&snapshot);
        self.settle(snapshot, outcome)?;
        Ok(&self.state)
    }

    /// Graph of the live matrix, classified by the current solve if any.
    pub fn graph(&self) -> AppResult<Graph> {
        let tree = self.result().map(|r| r.tree_indices.as_slice());
        Ok(build_graph(self.store.matrix(), tree)?)
    }

    /// Reordered A, B and C tables of the current result.
    pub fn tables(&self) -> Option<[LabeledTable; 3]> {
        self.result().map(|r| {
            [
                reordered_incidence_table(r),
                tie_set_table(r),
                cut_set_table(r),
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_twice_is_refused() {
        let mut session = Session::new();
        session.begin_solve().unwrap();
        assert!(session.is_busy());
        assert!(matches!(session.begin_solve(), Err(AppError::SolveInFlight)));
    }

    #[test]
    fn settle_without_begin_is_refused() {
        let mut session = Session::new();
        let err = session
            .settle(IncidenceMatrix::seed(), Err(ComputationError::Transport("x".into())))
            .unwrap_err();
        assert!(matches!(err, AppError::NotPending));
        assert_eq!(session.state(), &SolveState::Idle);
    }

    #[test]
    fn begin_clears_previous_failure() {
        let mut session = Session::new();
        let snapshot = session.begin_solve().unwrap();
        session
            .settle(snapshot, Err(ComputationError::Transport("down".into())))
            .unwrap();
        assert!(session.error_message().is_some());

        session.begin_solve().unwrap();
        assert!(session.error_message().is_none());
        assert!(session.result().is_none());
    }

    #[test]
    fn edits_while_pending_do_not_touch_snapshot() {
        let mut session = Session::new();
        let snapshot = session.begin_solve().unwrap();
        session.set_cell(0, 0, "1");
        assert_eq!(snapshot.get(0, 0), Some(-1.0));
        assert_eq!(session.matrix().get(0, 0), Some(1.0));
    }
}
