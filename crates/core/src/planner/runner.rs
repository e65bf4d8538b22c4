//! Basket planner implementation.
//!
//! Produces up to N distinct baskets from one item universe by repeatedly
//! solving the selection model and excluding every item that appeared in
//! the round's solution. Rounds are strictly sequential: the next model is
//! only built once the previous round's exclusions are known.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::basket::{extract_basket, ItemIndex};
use crate::catalog::Item;
use crate::metrics;
use crate::solver::{BasketModel, MilpSolver};

use super::config::PlannerConfig;
use super::types::{PlanParameters, PlanReport, PlanRequest};

/// The basket planner: drives the solve-and-exclude loop.
///
/// Cheap to clone; each call to [`plan`](Self::plan) owns its own exclusion
/// state, so one planner may serve concurrent runs as long as the injected
/// solver tolerates it.
#[derive(Clone)]
pub struct BasketPlanner {
    config: PlannerConfig,
    solver: Arc<dyn MilpSolver>,
}

impl BasketPlanner {
    /// Create a planner with the given configuration and solving backend.
    pub fn new(config: PlannerConfig, solver: Arc<dyn MilpSolver>) -> Self {
        Self { config, solver }
    }

    /// The planner's configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan with the configured parameters.
    pub async fn plan(&self, items: &[Item]) -> PlanReport {
        self.plan_with(items, &PlanRequest::default()).await
    }

    /// Plan with per-run parameter overrides.
    ///
    /// Returns the accumulated baskets even when the run ends early
    /// (universe exhausted, attempt cap hit, or too many stalled rounds);
    /// fewer baskets than requested is a normal terminal state.
    pub async fn plan_with(&self, items: &[Item], request: &PlanRequest) -> PlanReport {
        let parameters = PlanParameters {
            value_floor: request.value_floor.unwrap_or(self.config.value_floor),
            max_items: request.max_items.unwrap_or(self.config.max_items),
            rounds: request.rounds.unwrap_or(self.config.rounds),
        };

        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        let started = Instant::now();
        metrics::PLAN_RUNS_TOTAL.inc();

        info!(
            %run_id,
            items = items.len(),
            value_floor = parameters.value_floor,
            max_items = parameters.max_items,
            rounds = parameters.rounds,
            solver = self.solver.name(),
            "starting plan run"
        );

        let index = ItemIndex::from_items(items);
        let mut excluded: HashSet<String> = HashSet::new();
        let mut baskets = Vec::new();
        let mut attempts = 0u32;
        let mut failed_rounds = 0u32;
        let mut stalled_rounds = 0u32;

        while (baskets.len() as u32) < parameters.rounds && attempts < self.config.max_attempts {
            let candidates: Vec<Item> = items
                .iter()
                .filter(|item| !excluded.contains(&item.id))
                .cloned()
                .collect();

            if candidates.is_empty() {
                debug!(%run_id, "candidate universe exhausted");
                break;
            }

            attempts += 1;
            metrics::PLAN_ROUNDS_TOTAL.inc();

            let model = BasketModel::build(
                &candidates,
                parameters.value_floor,
                parameters.max_items,
            );

            let solution = match self.solver.solve(&model).await {
                Ok(solution) => solution,
                Err(e) => {
                    failed_rounds += 1;
                    stalled_rounds += 1;
                    metrics::PLAN_ROUND_FAILURES_TOTAL.inc();
                    warn!(%run_id, attempt = attempts, error = %e, "round failed to solve");
                    if stalled_rounds >= self.config.stall_limit {
                        warn!(%run_id, "aborting run: no progress across consecutive failed rounds");
                        break;
                    }
                    continue;
                }
            };

            // Extract against the FULL universe; the model's variables carry
            // item ids, so exclusions cannot skew attribution.
            let basket = extract_basket(&model, &index, &solution);

            // Even a rejected solution's items leave the universe, otherwise
            // a persistently bad candidate would stall the run forever.
            let excluded_before = excluded.len();
            for id in basket.item_ids() {
                excluded.insert(id.to_string());
            }

            if basket.entries.is_empty() || !basket.is_plausible() {
                failed_rounds += 1;
                metrics::PLAN_ROUND_FAILURES_TOTAL.inc();
                warn!(
                    %run_id,
                    attempt = attempts,
                    entries = basket.entries.len(),
                    "discarding implausible solution"
                );
                if excluded.len() == excluded_before {
                    stalled_rounds += 1;
                } else {
                    stalled_rounds = 0;
                }
                if stalled_rounds >= self.config.stall_limit {
                    warn!(%run_id, "aborting run: no progress across consecutive failed rounds");
                    break;
                }
                continue;
            }

            debug!(
                %run_id,
                attempt = attempts,
                entries = basket.entries.len(),
                flea_cost = basket.total_flea_cost(),
                base_value = basket.total_base_value(),
                "accepted basket"
            );
            stalled_rounds = 0;
            baskets.push(basket);
        }

        metrics::PLAN_BASKETS_RETURNED.inc_by(baskets.len() as u64);

        let report = PlanReport {
            id: run_id,
            started_at,
            parameters,
            baskets,
            rounds_attempted: attempts,
            failed_rounds,
            duration_ms: started.elapsed().as_millis() as u64,
        };

        info!(
            %run_id,
            baskets = report.baskets.len(),
            attempts = report.rounds_attempted,
            failed = report.failed_rounds,
            duration_ms = report.duration_ms,
            "plan run finished"
        );

        report
    }
}
