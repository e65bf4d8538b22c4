//! Integer-program description and the external MILP solver seam.
//!
//! The solver itself is a black box behind [`MilpSolver`]; this crate only
//! formulates the program and attributes the returned variable values back
//! to items. The shipped backend drives the HiGHS binary as a subprocess.

mod highs;
mod model;

pub use highs::HighsSolver;
pub use model::{BasketModel, ModelVariable};

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during a solve.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The model has no feasible solution.
    #[error("model is infeasible")]
    Infeasible,

    /// The solver binary was not found on this system.
    #[error("solver binary not found: {0}")]
    BinaryNotFound(String),

    /// The solver process exited with a failure status.
    #[error("solver exited with status {status}: {stderr}")]
    SolverFailed { status: i32, stderr: String },

    /// The solve did not finish within the configured timeout.
    #[error("solve timed out after {0}s")]
    Timeout(u64),

    /// The solution file could not be parsed.
    #[error("failed to parse solution: {0}")]
    MalformedSolution(String),

    /// Filesystem or process I/O failed.
    #[error("solver I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A solved variable assignment, keyed by variable name.
///
/// Values are whatever the backend reported; integrality and sign are NOT
/// guaranteed here (LP relaxation noise is caught downstream by the
/// plausibility check).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolverSolution {
    /// Objective value, if the backend reported one.
    pub objective: Option<f64>,
    /// Assigned value per decision variable.
    pub values: HashMap<String, f64>,
}

/// Trait for MILP solving backends.
///
/// `solve` is the only suspending operation in a plan run. Implementations
/// must be safe to call sequentially from one run at a time; sharing one
/// instance across concurrent runs is allowed when the backend itself is
/// re-entrant (the subprocess backend is).
#[async_trait]
pub trait MilpSolver: Send + Sync {
    /// Name of this backend for logging.
    fn name(&self) -> &str;

    /// Solve the model, returning the variable assignment.
    async fn solve(&self, model: &BasketModel) -> Result<SolverSolution, SolverError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SolverError::Infeasible;
        assert_eq!(err.to_string(), "model is infeasible");

        let err = SolverError::Timeout(30);
        assert_eq!(err.to_string(), "solve timed out after 30s");

        let err = SolverError::BinaryNotFound("highs".to_string());
        assert_eq!(err.to_string(), "solver binary not found: highs");
    }
}
