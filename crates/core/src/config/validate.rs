use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Form-signing secret is non-empty
/// - TMDB credential is non-empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.server.secret_key.is_empty() {
        return Err(ConfigError::ValidationError(
            "server.secret_key cannot be empty".to_string(),
        ));
    }

    if config.tmdb.api_key.is_empty() {
        return Err(ConfigError::ValidationError(
            "tmdb.api_key cannot be empty".to_string(),
        ));
    }

    Ok(())
}
