//! # Configuration System
//!
//! Hierarchical TOML configuration system for pano.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.pano/config.toml` (global user preferences)
//! 3. **Project config** - `./.pano/config.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.pano/config.toml
//! [navigation]
//! wrap = true
//! pinned_fallback = true
//!
//! [finder]
//! case_mode = "smart"
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use pano_core::config::PanoConfig;
//!
//! // Handle config errors explicitly - don't silently fall back to defaults
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PanoConfig::load_hierarchy()?;
//!     let wrap = config.navigation.wrap();
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

// Public API exports
pub use loading::resolve_session_path;
pub use types::{Config, FinderConfig, NavigationConfig, PanoConfig, SessionConfig};
pub use validation::{VALID_CASE_MODES, validate_config};

// Delegation for PanoConfig methods
impl PanoConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, Box<dyn std::error::Error>> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
