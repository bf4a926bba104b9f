//! Modifier-aware tab search across a snapshot.

use tracing::info;

use crate::finder::pattern::{CaseMode, parse_pattern};
use crate::snapshot::{Group, Snapshot, Tab};

/// A tab matched by [`find_tabs`], with its owning group (pinned tabs have
/// none).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabMatch<'a> {
    pub group: Option<&'a Group>,
    pub tab: &'a Tab,
}

fn field_matches(haystack: &str, needle: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        haystack.contains(needle)
    } else {
        haystack.to_lowercase().contains(&needle.to_lowercase())
    }
}

fn matches(tab: &Tab, needle: &str, case_sensitive: bool, links_only: bool) -> bool {
    if links_only {
        field_matches(&tab.url, needle, case_sensitive)
    } else {
        field_matches(&tab.title, needle, case_sensitive)
            || field_matches(&tab.url, needle, case_sensitive)
    }
}

/// Find tabs whose title or URL contains the pattern, in slot order with
/// pinned tabs last. Modifiers in the pattern are honored; an empty pattern
/// (after modifier stripping) matches nothing.
pub fn find_tabs<'a>(snapshot: &'a Snapshot, raw_pattern: &str, case_mode: CaseMode) -> Vec<TabMatch<'a>> {
    let (needle, options) = parse_pattern(raw_pattern, case_mode);
    if needle.is_empty() {
        return Vec::new();
    }

    let mut results = Vec::new();

    for group in &snapshot.groups {
        for tab in &group.tabs {
            if matches(tab, &needle, options.case_sensitive, options.links_only) {
                results.push(TabMatch {
                    group: Some(group),
                    tab,
                });
            }
        }
    }

    for tab in &snapshot.pinned {
        if matches(tab, &needle, options.case_sensitive, options.links_only) {
            results.push(TabMatch { group: None, tab });
        }
    }

    info!(
        event = "core.finder.search_completed",
        pattern = %needle,
        case_sensitive = options.case_sensitive,
        links_only = options.links_only,
        matched = results.len()
    );

    results
}
