use clap::ArgMatches;
use tracing::info;

use pano_core::nav::{NavOptions, Selector};

use super::helpers::{load_config_with_warning, session_path};
use super::switch::perform_switch;

pub(crate) fn handle_next_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_relative(matches, 1, "next")
}

pub(crate) fn handle_prev_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_relative(matches, -1, "prev")
}

fn handle_relative(
    matches: &ArgMatches,
    sign: isize,
    direction: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let path = session_path(matches, &config);

    let count = *matches.get_one::<usize>("count").unwrap_or(&1);
    let selector = Selector::Relative(sign * count as isize);

    let mut options = NavOptions::from_config(&config.navigation);
    if matches.get_flag("no-wrap") {
        options.wrap = false;
    }

    info!(
        event = "cli.relative_started",
        direction = direction,
        count = count,
        wrap = options.wrap
    );

    perform_switch(&path, &selector, &options)
}
