use clap::ArgMatches;
use tracing::{error, info};

use pano_core::events;
use pano_core::snapshot::{SnapshotError, load_snapshot};

use super::helpers::{load_config_with_warning, session_path};

pub(crate) fn handle_status_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.status_started", json_output = json_output);

    let config = load_config_with_warning();
    let path = session_path(matches, &config);

    let snapshot = match load_snapshot(&path) {
        Ok(snapshot) => snapshot,
        Err(SnapshotError::NotFound { .. }) => {
            println!("No session snapshot found at {}.", path.display());
            info!(event = "cli.status_completed", groups = 0);
            return Ok(());
        }
        Err(e) => {
            eprintln!("❌ Failed to read session snapshot: {}", e);
            error!(event = "cli.status_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let active = snapshot
        .active_group
        .and_then(|id| snapshot.group_by_id(id));

    if json_output {
        #[derive(serde::Serialize)]
        struct ActiveTab<'a> {
            id: u64,
            title: &'a str,
            url: &'a str,
        }

        #[derive(serde::Serialize)]
        struct ActiveGroup<'a> {
            id: u64,
            title: &'a str,
            tabs: usize,
            active_tab: Option<ActiveTab<'a>>,
        }

        #[derive(serde::Serialize)]
        struct StatusOutput<'a> {
            groups: usize,
            pinned: usize,
            active_group: Option<ActiveGroup<'a>>,
            saved_at: Option<&'a str>,
        }

        let output = StatusOutput {
            groups: snapshot.groups.len(),
            pinned: snapshot.pinned.len(),
            active_group: active.map(|group| ActiveGroup {
                id: group.id,
                title: group.display_title(),
                tabs: group.tabs.len(),
                active_tab: group.focus_tab().map(|tab| ActiveTab {
                    id: tab.id,
                    title: &tab.title,
                    url: &tab.url,
                }),
            }),
            saved_at: snapshot.saved_at.as_deref(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{} group(s), {} pinned tab(s)",
            snapshot.groups.len(),
            snapshot.pinned.len()
        );
        match active {
            Some(group) => {
                println!(
                    "Active group: {} ({} tab(s))",
                    group.display_title(),
                    group.tabs.len()
                );
                if let Some(tab) = group.focus_tab() {
                    println!("Active tab:   {}", tab.title);
                }
            }
            None => println!("Active group: none"),
        }
        if let Some(saved_at) = &snapshot.saved_at {
            println!("Snapshot at:  {}", saved_at);
        }
    }

    info!(
        event = "cli.status_completed",
        groups = snapshot.groups.len(),
        active_group = ?snapshot.active_group
    );

    Ok(())
}
