//! Planner configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the basket planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Minimum required sum of base values across one basket.
    #[serde(default = "default_value_floor")]
    pub value_floor: u64,

    /// Maximum total number of items in one basket.
    #[serde(default = "default_max_items")]
    pub max_items: u32,

    /// How many distinct baskets one plan run aims for.
    /// Keep this modest: every accepted basket shrinks the candidate
    /// universe, so late rounds produce increasingly poor baskets.
    #[serde(default = "default_rounds")]
    pub rounds: u32,

    /// Hard cap on solve attempts per run, counting failed rounds.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Abort the run after this many consecutive failed rounds during
    /// which the exclusion set did not grow.
    #[serde(default = "default_stall_limit")]
    pub stall_limit: u32,
}

fn default_value_floor() -> u64 {
    400_000
}

fn default_max_items() -> u32 {
    5
}

fn default_rounds() -> u32 {
    5
}

fn default_max_attempts() -> u32 {
    15
}

fn default_stall_limit() -> u32 {
    3
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            value_floor: default_value_floor(),
            max_items: default_max_items(),
            rounds: default_rounds(),
            max_attempts: default_max_attempts(),
            stall_limit: default_stall_limit(),
        }
    }
}
