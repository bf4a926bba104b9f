use std::path::PathBuf;

use clap::ArgMatches;
use tracing::warn;

use pano_core::config::{PanoConfig, resolve_session_path};

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
pub fn load_config_with_warning() -> PanoConfig {
    match PanoConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.pano/config.toml and ./.pano/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            PanoConfig::default()
        }
    }
}

/// Resolve the session snapshot path from the global `--session` flag and
/// the config hierarchy.
pub fn session_path(matches: &ArgMatches, config: &PanoConfig) -> PathBuf {
    let cli_override = matches.get_one::<String>("session").map(PathBuf::from);
    resolve_session_path(config, cli_override.as_deref())
}
