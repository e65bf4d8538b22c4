//! Types for the basket planner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::basket::Basket;

/// Per-run overrides of the configured planning parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Minimum required sum of base values across one basket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_floor: Option<u64>,
    /// Maximum total number of items in one basket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u32>,
    /// How many distinct baskets to aim for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounds: Option<u32>,
}

/// The parameters one plan run actually ran with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanParameters {
    /// Minimum required sum of base values across one basket.
    pub value_floor: u64,
    /// Maximum total number of items in one basket.
    pub max_items: u32,
    /// How many distinct baskets the run aimed for.
    pub rounds: u32,
}

/// Result of one plan run.
///
/// Baskets are ordered best first: the first one is optimal for the full
/// candidate universe, later ones are optimal for successively reduced
/// universes. Fewer baskets than requested is normal output, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanReport {
    /// Unique id of this run, also used in log correlation.
    pub id: Uuid,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// Parameters the run used after applying request overrides.
    pub parameters: PlanParameters,
    /// Accepted baskets, best first. Pairwise disjoint in item composition.
    pub baskets: Vec<Basket>,
    /// Total solve attempts, including failed rounds.
    pub rounds_attempted: u32,
    /// Rounds that produced no basket (solver failure or implausible
    /// solution).
    pub failed_rounds: u32,
    /// Wall-clock duration of the whole run in milliseconds.
    pub duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_request_defaults_to_no_overrides() {
        let request: PlanRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, PlanRequest::default());
        assert!(request.value_floor.is_none());
    }

    #[test]
    fn test_plan_request_partial_overrides() {
        let request: PlanRequest =
            serde_json::from_str(r#"{ "value_floor": 100000, "rounds": 2 }"#).unwrap();
        assert_eq!(request.value_floor, Some(100_000));
        assert_eq!(request.max_items, None);
        assert_eq!(request.rounds, Some(2));
    }

    #[test]
    fn test_plan_report_serialization() {
        let report = PlanReport {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            parameters: PlanParameters {
                value_floor: 400_000,
                max_items: 5,
                rounds: 5,
            },
            baskets: vec![],
            rounds_attempted: 3,
            failed_rounds: 3,
            duration_ms: 120,
        };

        let json = serde_json::to_string(&report).unwrap();
        let parsed: PlanReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, report.id);
        assert_eq!(parsed.rounds_attempted, 3);
        assert!(parsed.baskets.is_empty());
    }
}
