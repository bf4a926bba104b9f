//! Configuration loading and merging logic.
//!
//! This module handles loading configuration from files and merging
//! configurations from different sources (user config, project config).
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.pano/config.toml` (global user preferences)
//! 3. **Project config** - `./.pano/config.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)

use crate::config::types::{Config, FinderConfig, NavigationConfig, PanoConfig, SessionConfig};
use crate::config::validation::validate_config;
use std::fs;
use std::path::{Path, PathBuf};

/// Check if an error is a "file not found" error.
fn is_file_not_found(e: &(dyn std::error::Error + 'static)) -> bool {
    if let Some(io_err) = e.downcast_ref::<std::io::Error>() {
        return io_err.kind() == std::io::ErrorKind::NotFound;
    }

    let err_str = e.to_string();
    err_str.contains("No such file or directory") || err_str.contains("cannot find the path")
}

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.pano/config.toml`)
/// 3. Project config (`./.pano/config.toml`)
///
/// # Errors
///
/// Returns an error if validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<PanoConfig, Box<dyn std::error::Error>> {
    let mut config = PanoConfig::default();

    // Load user config (file not found is expected, parse errors fail)
    match load_user_config() {
        Ok(user_config) => config = merge_configs(config, user_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {} // File not found - continue with defaults
    }

    // Load project config (file not found is expected, parse errors fail)
    match load_project_config() {
        Ok(project_config) => config = merge_configs(config, project_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {} // File not found - continue with merged config
    }

    // Validate the final configuration
    validate_config(&config)?;

    Ok(config)
}

/// Load the user configuration from ~/.pano/config.toml.
fn load_user_config() -> Result<PanoConfig, Box<dyn std::error::Error>> {
    let home_dir = dirs::home_dir().ok_or("Could not find home directory")?;
    let config_path = home_dir.join(".pano").join("config.toml");
    load_config_file(&config_path)
}

/// Load the project configuration from ./.pano/config.toml.
fn load_project_config() -> Result<PanoConfig, Box<dyn std::error::Error>> {
    let config_path = std::env::current_dir()?.join(".pano").join("config.toml");
    load_config_file(&config_path)
}

/// Load a configuration file from the given path.
fn load_config_file(path: &PathBuf) -> Result<PanoConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;
    let config: PanoConfig = toml::from_str(&content)
        .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;
    Ok(config)
}

/// Merge two configurations, with override_config taking precedence.
///
/// Optional fields replace base values only if present.
pub fn merge_configs(base: PanoConfig, override_config: PanoConfig) -> PanoConfig {
    PanoConfig {
        navigation: NavigationConfig {
            wrap: override_config.navigation.wrap.or(base.navigation.wrap),
            pinned_fallback: override_config
                .navigation
                .pinned_fallback
                .or(base.navigation.pinned_fallback),
        },
        finder: FinderConfig {
            case_mode: override_config.finder.case_mode.or(base.finder.case_mode),
        },
        session: SessionConfig {
            path: override_config.session.path.or(base.session.path),
        },
    }
}

/// Resolve the session snapshot path.
///
/// Resolution order:
/// 1. CLI `--session` flag
/// 2. `[session] path` from the config hierarchy
/// 3. `~/.pano/session.json`
pub fn resolve_session_path(config: &PanoConfig, cli_override: Option<&Path>) -> PathBuf {
    if let Some(path) = cli_override {
        return path.to_path_buf();
    }
    if let Some(path) = &config.session.path {
        return path.clone();
    }
    Config::new().session_file()
}
