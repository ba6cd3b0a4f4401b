use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - MealDB base URL is http(s) and the timeout is non-zero
/// - Print brand is not blank
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    let base_url = config.mealdb.base_url.trim();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ConfigError::ValidationError(format!(
            "mealdb.base_url must be an http(s) URL, got '{}'",
            config.mealdb.base_url
        )));
    }

    if config.mealdb.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "mealdb.timeout_secs cannot be 0".to_string(),
        ));
    }

    if config.print.brand.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "print.brand cannot be blank".to_string(),
        ));
    }

    Ok(())
}
