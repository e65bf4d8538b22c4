use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Filter price band is not inverted
/// - Planner asks for at least one basket of at least one item
/// - Solver binary and timeout are usable
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    // Filter validation
    if let Some(max) = config.filter.max_base_price {
        if max < config.filter.min_base_price {
            return Err(ConfigError::ValidationError(
                "filter.max_base_price cannot be below filter.min_base_price".to_string(),
            ));
        }
    }

    // Planner validation
    if config.planner.rounds == 0 {
        return Err(ConfigError::ValidationError(
            "planner.rounds must be at least 1".to_string(),
        ));
    }
    if config.planner.max_items == 0 {
        return Err(ConfigError::ValidationError(
            "planner.max_items must be at least 1".to_string(),
        ));
    }
    if config.planner.stall_limit == 0 {
        return Err(ConfigError::ValidationError(
            "planner.stall_limit must be at least 1".to_string(),
        ));
    }

    // Solver validation
    if config.solver.binary.is_empty() {
        return Err(ConfigError::ValidationError(
            "solver.binary cannot be empty".to_string(),
        ));
    }
    if config.solver.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "solver.timeout_secs cannot be 0".to_string(),
        ));
    }

    Ok(())
}
