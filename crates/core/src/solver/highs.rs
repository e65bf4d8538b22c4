//! HiGHS subprocess solving backend.
//!
//! Writes the model as a CPLEX LP file into a scratch directory, runs the
//! `highs` binary against it and reads back the raw solution file. HiGHS
//! is treated strictly as a black box; nothing about the algorithm leaks
//! into this crate.

use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Instant;

use async_trait::async_trait;
use regex_lite::Regex;
use tokio::process::Command;
use tokio::time::{timeout, Duration};
use tracing::{debug, warn};

use crate::config::SolverConfig;
use crate::metrics;

use super::{BasketModel, MilpSolver, SolverError, SolverSolution};

/// MILP backend driving the HiGHS command line binary.
pub struct HighsSolver {
    config: SolverConfig,
}

impl HighsSolver {
    /// Create a new backend with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Create a backend with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }
}

#[async_trait]
impl MilpSolver for HighsSolver {
    fn name(&self) -> &str {
        "highs"
    }

    async fn solve(&self, model: &BasketModel) -> Result<SolverSolution, SolverError> {
        let scratch = tempfile::tempdir()?;
        let lp_path = scratch.path().join("model.lp");
        let solution_path = scratch.path().join("model.sol");

        tokio::fs::write(&lp_path, model.to_cplex_lp()).await?;

        let started = Instant::now();
        let result = timeout(
            Duration::from_secs(self.config.timeout_secs),
            Command::new(&self.config.binary)
                .arg(&lp_path)
                .arg("--solution_file")
                .arg(&solution_path)
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .output(),
        )
        .await;
        metrics::SOLVE_DURATION_SECONDS.observe(started.elapsed().as_secs_f64());

        let output = match result {
            Ok(Ok(output)) => output,
            Ok(Err(e)) if e.kind() == ErrorKind::NotFound => {
                metrics::SOLVES_TOTAL.with_label_values(&["error"]).inc();
                return Err(SolverError::BinaryNotFound(self.config.binary.clone()));
            }
            Ok(Err(e)) => {
                metrics::SOLVES_TOTAL.with_label_values(&["error"]).inc();
                return Err(SolverError::Io(e));
            }
            Err(_) => {
                metrics::SOLVES_TOTAL.with_label_values(&["error"]).inc();
                return Err(SolverError::Timeout(self.config.timeout_secs));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                status = output.status.code().unwrap_or(-1),
                "solver exited with failure"
            );
            metrics::SOLVES_TOTAL.with_label_values(&["error"]).inc();
            return Err(SolverError::SolverFailed {
                status: output.status.code().unwrap_or(-1),
                stderr: stderr.trim().to_string(),
            });
        }

        let text = tokio::fs::read_to_string(&solution_path).await?;
        let parsed = parse_solution(&text);

        match &parsed {
            Ok(solution) => {
                metrics::SOLVES_TOTAL.with_label_values(&["optimal"]).inc();
                debug!(
                    variables = solution.values.len(),
                    objective = solution.objective,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "solve finished"
                );
            }
            Err(SolverError::Infeasible) => {
                metrics::SOLVES_TOTAL
                    .with_label_values(&["infeasible"])
                    .inc();
            }
            Err(_) => {
                metrics::SOLVES_TOTAL.with_label_values(&["error"]).inc();
            }
        }

        parsed
    }
}

/// Parse a HiGHS raw solution file.
///
/// The format starts with a `Model status` header followed by the status
/// word, then a `# Primal solution values` section containing an
/// `Objective` line and a `# Columns N` block of `name value` pairs.
fn parse_solution(text: &str) -> Result<SolverSolution, SolverError> {
    let columns_re = Regex::new(r"^# Columns (\d+)$").expect("valid regex");

    let mut lines = text.lines();

    let mut status: Option<&str> = None;
    while let Some(line) = lines.next() {
        if line.trim() == "Model status" {
            status = lines.find(|l| !l.trim().is_empty()).map(str::trim);
            break;
        }
    }

    match status {
        Some("Optimal") => {}
        Some("Infeasible") => return Err(SolverError::Infeasible),
        Some(other) => {
            return Err(SolverError::MalformedSolution(format!(
                "unexpected model status: {}",
                other
            )))
        }
        None => {
            return Err(SolverError::MalformedSolution(
                "missing model status".to_string(),
            ))
        }
    }

    let mut solution = SolverSolution::default();

    while let Some(line) = lines.next() {
        let line = line.trim();

        if let Some(rest) = line.strip_prefix("Objective ") {
            solution.objective = rest.trim().parse::<f64>().ok();
            continue;
        }

        if let Some(captures) = columns_re.captures(line) {
            let count: usize = captures[1]
                .parse()
                .map_err(|_| SolverError::MalformedSolution("bad column count".to_string()))?;

            for _ in 0..count {
                let entry = lines.next().ok_or_else(|| {
                    SolverError::MalformedSolution("truncated columns section".to_string())
                })?;
                let mut parts = entry.split_whitespace();
                let (name, value) = match (parts.next(), parts.next()) {
                    (Some(name), Some(value)) => (name, value),
                    _ => {
                        return Err(SolverError::MalformedSolution(format!(
                            "bad column line: {:?}",
                            entry
                        )))
                    }
                };
                let value: f64 = value.parse().map_err(|_| {
                    SolverError::MalformedSolution(format!("bad column value: {:?}", entry))
                })?;
                solution.values.insert(name.to_string(), value);
            }

            // Rows and duals follow the columns block; nothing there is needed
            break;
        }
    }

    Ok(solution)
}
