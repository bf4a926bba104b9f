use clap::ArgMatches;
use tracing::{error, info};

use pano_core::events;
use pano_core::finder::{CaseMode, find_tabs};
use pano_core::snapshot::load_snapshot;

use super::helpers::{load_config_with_warning, session_path};

pub(crate) fn handle_find_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let pattern = matches
        .get_one::<String>("pattern")
        .ok_or("Pattern argument is required")?;
    let json_output = matches.get_flag("json");

    let config = load_config_with_warning();
    let path = session_path(matches, &config);

    // Config was validated at load time; a stray value still falls back cleanly.
    let case_mode: CaseMode = config.finder.case_mode().parse().unwrap_or_default();

    info!(
        event = "cli.find_started",
        pattern = %pattern,
        case_mode = ?case_mode
    );

    let snapshot = match load_snapshot(&path) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("❌ Failed to read session snapshot: {}", e);
            error!(event = "cli.find_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let matches_found = find_tabs(&snapshot, pattern, case_mode);

    if json_output {
        #[derive(serde::Serialize)]
        struct MatchRow<'a> {
            group_id: Option<u64>,
            group_title: Option<&'a str>,
            tab_id: u64,
            title: &'a str,
            url: &'a str,
        }

        let rows: Vec<MatchRow> = matches_found
            .iter()
            .map(|m| MatchRow {
                group_id: m.group.map(|g| g.id),
                group_title: m.group.map(|g| g.display_title()),
                tab_id: m.tab.id,
                title: &m.tab.title,
                url: &m.tab.url,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if matches_found.is_empty() {
        println!("No tabs matching '{}'.", pattern);
    } else {
        println!("{} tab(s) matching '{}':", matches_found.len(), pattern);
        for m in &matches_found {
            let location = m
                .group
                .map(|g| g.display_title().to_string())
                .unwrap_or_else(|| "(pinned)".to_string());
            println!("   [{}] {} - {}", location, m.tab.title, m.tab.url);
        }
    }

    info!(
        event = "cli.find_completed",
        pattern = %pattern,
        matched = matches_found.len()
    );

    Ok(())
}
