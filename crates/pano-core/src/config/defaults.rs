//! Default implementations for configuration types.
//!
//! This module contains all `Default` implementations and accessor helpers
//! that apply documented defaults on top of optional config fields.

use crate::config::types::{Config, FinderConfig, NavigationConfig};
use std::path::PathBuf;

/// The case mode used when a find pattern carries no case modifier.
pub const DEFAULT_CASE_MODE: &str = "smart";

impl Default for Config {
    fn default() -> Self {
        let pano_dir = match dirs::home_dir() {
            Some(home) => home.join(".pano"),
            None => {
                eprintln!(
                    "Warning: Could not find home directory. Set HOME environment variable. \
                    Using fallback directory."
                );
                std::env::temp_dir().join(".pano")
            }
        };

        Self {
            pano_dir,
            log_level: std::env::var("PANO_LOG_LEVEL").unwrap_or("info".to_string()),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location of the session snapshot file.
    pub fn session_file(&self) -> PathBuf {
        self.pano_dir.join("session.json")
    }
}

impl NavigationConfig {
    /// Returns whether out-of-bounds indices wrap, defaulting to true.
    pub fn wrap(&self) -> bool {
        self.wrap.unwrap_or(true)
    }

    /// Returns whether empty groups fall back to a group-only focus when
    /// pinned tabs exist, defaulting to true.
    pub fn pinned_fallback(&self) -> bool {
        self.pinned_fallback.unwrap_or(true)
    }
}

impl FinderConfig {
    /// Returns the configured case mode, defaulting to "smart".
    pub fn case_mode(&self) -> &str {
        self.case_mode.as_deref().unwrap_or(DEFAULT_CASE_MODE)
    }
}
