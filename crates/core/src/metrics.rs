//! Prometheus metrics exported by the core.
//!
//! The server pulls these into its registry via [`all_metrics`].

use once_cell::sync::Lazy;
use prometheus::core::Collector;
use prometheus::{Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts};

/// Plan runs started.
pub static PLAN_RUNS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("basketeer_plan_runs_total", "Total plan runs started").unwrap()
});

/// Diversification rounds attempted, including failed ones.
pub static PLAN_ROUNDS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "basketeer_plan_rounds_total",
        "Total diversification rounds attempted",
    )
    .unwrap()
});

/// Rounds that produced no basket.
pub static PLAN_ROUND_FAILURES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "basketeer_plan_round_failures_total",
        "Rounds that failed to produce a basket",
    )
    .unwrap()
});

/// Baskets returned across all runs.
pub static PLAN_BASKETS_RETURNED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "basketeer_plan_baskets_returned_total",
        "Baskets returned across all plan runs",
    )
    .unwrap()
});

/// Solve outcomes by result.
pub static SOLVES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("basketeer_solves_total", "Solver invocations by outcome"),
        &["outcome"],
    )
    .unwrap()
});

/// Wall-clock duration of solver invocations.
pub static SOLVE_DURATION_SECONDS: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "basketeer_solve_duration_seconds",
            "Solver invocation duration in seconds",
        )
        .buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
    )
    .unwrap()
});

/// Every core collector, for registration into the server's registry.
pub fn all_metrics() -> Vec<Box<dyn Collector>> {
    vec![
        Box::new(PLAN_RUNS_TOTAL.clone()),
        Box::new(PLAN_ROUNDS_TOTAL.clone()),
        Box::new(PLAN_ROUND_FAILURES_TOTAL.clone()),
        Box::new(PLAN_BASKETS_RETURNED.clone()),
        Box::new(SOLVES_TOTAL.clone()),
        Box::new(SOLVE_DURATION_SECONDS.clone()),
    ]
}
