//! Mock solver for testing.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use crate::solver::{BasketModel, MilpSolver, SolverError, SolverSolution};

/// Mock implementation of the MilpSolver trait.
///
/// Behavior is scripted: queued results are returned in order, one per
/// solve; once the queue runs dry every solve reports infeasibility.
/// Received models are recorded for assertions. Clones share the script
/// and the recording.
///
/// # Example
///
/// ```rust,ignore
/// use basketeer_core::testing::MockSolver;
///
/// let solver = MockSolver::new();
/// solver.push_solution(solution).await;
/// solver.push_error(SolverError::Infeasible).await;
///
/// // ... run the planner against it ...
///
/// let models = solver.solved_models().await;
/// assert_eq!(models.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct MockSolver {
    script: Arc<Mutex<VecDeque<Result<SolverSolution, SolverError>>>>,
    solved_models: Arc<RwLock<Vec<BasketModel>>>,
}

impl MockSolver {
    /// Create a new mock with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful solve result.
    pub async fn push_solution(&self, solution: SolverSolution) {
        self.script.lock().await.push_back(Ok(solution));
    }

    /// Queue a failed solve result.
    pub async fn push_error(&self, error: SolverError) {
        self.script.lock().await.push_back(Err(error));
    }

    /// Every model received so far, in call order.
    pub async fn solved_models(&self) -> Vec<BasketModel> {
        self.solved_models.read().await.clone()
    }

    /// Number of solves performed.
    pub async fn solve_count(&self) -> usize {
        self.solved_models.read().await.len()
    }
}

#[async_trait]
impl MilpSolver for MockSolver {
    fn name(&self) -> &str {
        "mock"
    }

    async fn solve(&self, model: &BasketModel) -> Result<SolverSolution, SolverError> {
        self.solved_models.write().await.push(model.clone());

        self.script
            .lock()
            .await
            .pop_front()
            .unwrap_or(Err(SolverError::Infeasible))
    }
}
