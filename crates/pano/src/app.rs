use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

pub fn build_cli() -> Command {
    Command::new("pano")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Navigate browser tab groups with vim-style selectors")
        .long_about("pano resolves group selectors (relative offsets, group ids, titles) against a snapshot of the browser's tab-group state and applies the switch. The snapshot file is maintained by a browser-side exporter; pano never talks to the browser directly.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("session")
                .long("session")
                .short('s')
                .help("Path to the session snapshot file (overrides config)")
                .value_name("FILE")
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("switch")
                .about("Switch to a group by selector: +N/-N offset, id, 'id: title', or title")
                .arg(
                    Arg::new("selector")
                        .help("Group selector (use --index for absolute slot positions)")
                        .required_unless_present("index")
                        .conflicts_with("index")
                        .allow_hyphen_values(true) // Allow relative selectors like -2
                        .index(1)
                )
                .arg(
                    Arg::new("index")
                        .long("index")
                        .short('i')
                        .help("Absolute slot position (0-based) instead of a selector")
                        .allow_hyphen_values(true)
                        .value_parser(clap::value_parser!(isize))
                )
                .arg(
                    Arg::new("count")
                        .long("count")
                        .short('c')
                        .help("For title selectors: take the Nth match (1-based, default 1)")
                        .value_parser(clap::value_parser!(usize))
                )
                .arg(
                    Arg::new("no-wrap")
                        .long("no-wrap")
                        .help("Clamp out-of-bounds positions instead of wrapping around")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("next")
                .about("Switch to the next group (skips empty groups)")
                .arg(
                    Arg::new("count")
                        .help("Number of groups to move forward (default 1)")
                        .value_parser(clap::value_parser!(usize))
                        .index(1)
                )
                .arg(
                    Arg::new("no-wrap")
                        .long("no-wrap")
                        .help("Clamp at the last group instead of wrapping around")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("prev")
                .about("Switch to the previous group (skips empty groups)")
                .arg(
                    Arg::new("count")
                        .help("Number of groups to move backward (default 1)")
                        .value_parser(clap::value_parser!(usize))
                        .index(1)
                )
                .arg(
                    Arg::new("no-wrap")
                        .long("no-wrap")
                        .help("Clamp at the first group instead of wrapping around")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("list")
                .about("List all tab groups in slot order")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("status")
                .about("Show the active group and tab")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("find")
                .about("Find tabs by title or URL (supports \\c \\C \\l \\L modifiers)")
                .arg(
                    Arg::new("pattern")
                        .help("Pattern to search for")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .value_parser(clap::value_parser!(Shell))
                        .index(1)
                )
        )
}
