//! Service configuration: typed sections, file/env loader and validation.

mod loader;
mod types;
mod validate;

pub use loader::{load_config, load_config_from_str};
pub use types::{CatalogConfig, Config, FilterConfig, ServerConfig, SolverConfig};
pub use validate::validate_config;

use thiserror::Error;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file does not exist.
    #[error("config file not found: {0}")]
    FileNotFound(String),

    /// Config file or environment could not be parsed.
    #[error("failed to parse config: {0}")]
    ParseError(String),

    /// Parsed config holds an unusable value.
    #[error("invalid config: {0}")]
    ValidationError(String),
}
