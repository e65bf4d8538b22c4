use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::catalog::ItemCategory;
use crate::planner::PlannerConfig;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub solver: SolverConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    "0.0.0.0".parse().unwrap()
}

fn default_port() -> u16 {
    8080
}

/// Item catalog source configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// GraphQL endpoint serving the item catalog
    #[serde(default = "default_catalog_url")]
    pub url: String,
    /// Request timeout in seconds
    #[serde(default = "default_catalog_timeout")]
    pub timeout_secs: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: default_catalog_url(),
            timeout_secs: default_catalog_timeout(),
        }
    }
}

fn default_catalog_url() -> String {
    "https://api.tarkov.dev/graphql".to_string()
}

fn default_catalog_timeout() -> u32 {
    30
}

/// Solver candidate filter configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilterConfig {
    /// Cheapest base price worth considering. There is no hard reason for
    /// a minimum, it just keeps the solution space small.
    #[serde(default = "default_min_base_price")]
    pub min_base_price: u64,
    /// Most expensive base price to consider, unbounded when absent
    #[serde(default)]
    pub max_base_price: Option<u64>,
    /// Categories kept away from the solver. Armor-like base prices
    /// include plates and attachments that the flea price does not, which
    /// skews their value.
    #[serde(default = "default_excluded_categories")]
    pub excluded_categories: Vec<ItemCategory>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_base_price: default_min_base_price(),
            max_base_price: None,
            excluded_categories: default_excluded_categories(),
        }
    }
}

fn default_min_base_price() -> u64 {
    30_000
}

fn default_excluded_categories() -> Vec<ItemCategory> {
    vec![
        ItemCategory::Preset,
        ItemCategory::Armor,
        ItemCategory::Rig,
    ]
}

/// External MILP solver configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SolverConfig {
    /// Solver binary to invoke
    #[serde(default = "default_solver_binary")]
    pub binary: String,
    /// Per-solve timeout in seconds
    #[serde(default = "default_solver_timeout")]
    pub timeout_secs: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            binary: default_solver_binary(),
            timeout_secs: default_solver_timeout(),
        }
    }
}

fn default_solver_binary() -> String {
    "highs".to_string()
}

fn default_solver_timeout() -> u64 {
    30
}
