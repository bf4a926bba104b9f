use clap::ArgMatches;
use tracing::error;

use pano_core::events;

pub mod helpers;

mod completions;
mod find;
mod list;
mod relative;
mod status;
mod switch;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("switch", sub_matches)) => switch::handle_switch_command(sub_matches),
        Some(("next", sub_matches)) => relative::handle_next_command(sub_matches),
        Some(("prev", sub_matches)) => relative::handle_prev_command(sub_matches),
        Some(("list", sub_matches)) => list::handle_list_command(sub_matches),
        Some(("status", sub_matches)) => status::handle_status_command(sub_matches),
        Some(("find", sub_matches)) => find::handle_find_command(sub_matches),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
