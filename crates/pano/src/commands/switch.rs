use std::path::Path;

use clap::ArgMatches;
use tracing::{error, info};

use pano_core::events;
use pano_core::nav::{NavError, NavOptions, Selector, navigate};
use pano_core::{FileHost, TabHost};

use super::helpers::{load_config_with_warning, session_path};

pub(crate) fn handle_switch_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let path = session_path(matches, &config);

    let selector = if let Some(index) = matches.get_one::<isize>("index") {
        Selector::Index(*index)
    } else {
        let raw = matches
            .get_one::<String>("selector")
            .ok_or("Selector argument is required")?;

        match Selector::parse(raw) {
            Ok(selector) => selector,
            Err(NavError::EmptySelector) => {
                // A blank selector is a deliberate no-op, not a failure.
                info!(event = "cli.switch_noop", reason = "empty_selector");
                return Ok(());
            }
            Err(e) => {
                eprintln!("❌ {}", e);
                error!(event = "cli.switch_failed", selector = raw, error = %e);
                events::log_app_error(&e);
                return Err(e.into());
            }
        }
    };

    let mut options = NavOptions::from_config(&config.navigation);
    if matches.get_flag("no-wrap") {
        options.wrap = false;
    }
    if let Some(count) = matches.get_one::<usize>("count") {
        options.count = *count;
    }

    info!(
        event = "cli.switch_started",
        selector = ?selector,
        wrap = options.wrap,
        session = %path.display()
    );

    perform_switch(&path, &selector, &options)
}

/// Resolve against a fresh snapshot and apply the result. Shared by
/// `switch`, `next`, and `prev`.
pub(crate) fn perform_switch(
    path: &Path,
    selector: &Selector,
    options: &NavOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut host = FileHost::new(path);

    let snapshot = match host.snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("❌ Failed to read session snapshot: {}", e);
            eprintln!("   Hint: Is the browser-side exporter writing to {}?", path.display());
            error!(event = "cli.switch_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let switch = match navigate(&snapshot, selector, options) {
        Ok(switch) => switch,
        Err(e) => {
            eprintln!("❌ {}", e);
            error!(event = "cli.switch_failed", selector = ?selector, error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    if let Err(e) = host.apply(&switch) {
        eprintln!("❌ Failed to apply switch: {}", e);
        error!(event = "cli.switch_apply_failed", group_id = switch.group_id, error = %e);
        events::log_app_error(&e);
        return Err(e.into());
    }

    // The group is guaranteed present: navigate resolved it from this snapshot.
    let group = snapshot
        .group_by_id(switch.group_id)
        .ok_or("Resolved group disappeared from snapshot")?;

    match switch.tab_id {
        Some(tab_id) => {
            println!(
                "✅ Switched to group '{}' (slot {})",
                group.display_title(),
                switch.group_index
            );
            if let Some(tab) = group.tabs.iter().find(|t| t.id == tab_id) {
                println!("   Tab: {}", tab.title);
            }
        }
        None => {
            println!(
                "✅ Focused empty group '{}' (slot {})",
                group.display_title(),
                switch.group_index
            );
            println!("   No member tab to switch to; pinned tabs stay visible.");
        }
    }

    info!(
        event = "cli.switch_completed",
        group_id = switch.group_id,
        group_index = switch.group_index,
        tab_id = ?switch.tab_id
    );

    Ok(())
}
