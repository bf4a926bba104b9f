//! Configuration type definitions for the pano CLI.
//!
//! This module contains all configuration struct definitions used throughout
//! pano. These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [navigation]
//! wrap = true
//! pinned_fallback = true
//!
//! [finder]
//! case_mode = "smart"
//!
//! [session]
//! path = "/home/user/.config/browser/panorama.json"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime configuration for the pano CLI.
///
/// This struct holds paths and settings that are derived from environment
/// variables and system defaults, not from config files.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory for all pano data (default: ~/.pano)
    pub pano_dir: PathBuf,
    /// Log level for the application
    pub log_level: String,
}

/// Main configuration loaded from TOML config files.
///
/// This is the primary configuration structure that gets loaded from:
/// 1. User config: `~/.pano/config.toml`
/// 2. Project config: `./.pano/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PanoConfig {
    /// Group navigation behavior
    #[serde(default)]
    pub navigation: NavigationConfig,

    /// Tab finder behavior
    #[serde(default)]
    pub finder: FinderConfig,

    /// Session snapshot location
    #[serde(default)]
    pub session: SessionConfig,
}

/// Group navigation configuration.
///
/// Controls wraparound and the empty-group fallback policy.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NavigationConfig {
    /// Whether out-of-bounds group indices wrap around.
    /// Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,

    /// Whether landing on an empty group while pinned tabs exist focuses
    /// the group itself instead of failing or skipping past it.
    /// Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned_fallback: Option<bool>,
}

/// Tab finder configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FinderConfig {
    /// Case handling when a pattern carries no `\c`/`\C` modifier.
    /// Options: smart, sensitive, insensitive. Default: smart.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_mode: Option<String>,
}

/// Session snapshot configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    /// Path to the session snapshot file.
    /// Default: `~/.pano/session.json`.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pano_config_serialization() {
        let config = PanoConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: PanoConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.navigation.wrap(), parsed.navigation.wrap());
    }

    #[test]
    fn test_navigation_config_serialization() {
        let config = NavigationConfig {
            wrap: Some(false),
            pinned_fallback: Some(true),
        };
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("wrap = false"));
        assert!(toml_str.contains("pinned_fallback = true"));
    }

    #[test]
    fn test_session_config_deserialize() {
        let toml_str = r#"
path = "/tmp/session.json"
"#;
        let settings: SessionConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.path, Some(PathBuf::from("/tmp/session.json")));
    }
}
