use clap::ArgMatches;
use tracing::{error, info};

use pano_core::events;
use pano_core::snapshot::{SnapshotError, load_snapshot};

use super::helpers::{load_config_with_warning, session_path};
use crate::table::TableFormatter;

pub(crate) fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.list_started", json_output = json_output);

    let config = load_config_with_warning();
    let path = session_path(matches, &config);

    let snapshot = match load_snapshot(&path) {
        Ok(snapshot) => snapshot,
        Err(SnapshotError::NotFound { .. }) => {
            // No snapshot yet is an empty session, not a failure.
            if json_output {
                println!("[]");
            } else {
                println!("No tab groups found.");
            }
            info!(event = "cli.list_completed", count = 0);
            return Ok(());
        }
        Err(e) => {
            eprintln!("❌ Failed to read session snapshot: {}", e);
            error!(event = "cli.list_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let group_count = snapshot.groups.len();

    if json_output {
        #[derive(serde::Serialize)]
        struct GroupRow<'a> {
            index: usize,
            id: u64,
            title: &'a str,
            tabs: usize,
            active: bool,
        }

        let rows: Vec<GroupRow> = snapshot
            .groups
            .iter()
            .enumerate()
            .map(|(index, group)| GroupRow {
                index,
                id: group.id,
                title: group.display_title(),
                tabs: group.tabs.len(),
                active: snapshot.active_group == Some(group.id),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if snapshot.groups.is_empty() {
        println!("No tab groups found.");
    } else {
        println!("Tab groups:");
        let formatter = TableFormatter::new(&snapshot);
        formatter.print_table(&snapshot);
        if snapshot.has_pinned() {
            println!("{} pinned tab(s) outside groups", snapshot.pinned.len());
        }
    }

    info!(event = "cli.list_completed", count = group_count);

    Ok(())
}
