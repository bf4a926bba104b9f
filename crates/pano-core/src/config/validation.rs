//! Configuration validation.

use crate::config::types::PanoConfig;
use crate::errors::ConfigError;

/// Case modes accepted by `[finder] case_mode`.
pub const VALID_CASE_MODES: &[&str] = &["smart", "sensitive", "insensitive"];

/// Validate the final merged configuration.
///
/// # Errors
///
/// Returns `ConfigError::InvalidCaseMode` for an unrecognized finder case
/// mode, and `ConfigError::InvalidConfiguration` for an empty session path.
pub fn validate_config(config: &PanoConfig) -> Result<(), ConfigError> {
    let case_mode = config.finder.case_mode();
    if !VALID_CASE_MODES.contains(&case_mode) {
        return Err(ConfigError::InvalidCaseMode {
            mode: case_mode.to_string(),
        });
    }

    if let Some(path) = &config.session.path
        && path.as_os_str().is_empty()
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "session path cannot be empty".to_string(),
        });
    }

    Ok(())
}
