//! Target computation: bounds handling, empty-group policy, and the
//! combined navigate entry point.

use tracing::info;

use crate::nav::errors::NavError;
use crate::nav::resolve::resolve_selector;
use crate::nav::selector::Selector;
use crate::nav::types::{NavOptions, Resolution, Switch};
use crate::snapshot::Snapshot;

/// Bring a possibly out-of-bounds index into `0..len`.
///
/// Wrapping uses the Euclidean remainder so deep negative offsets land where
/// repeated single steps would. Without wrap, indices clamp to the ends.
fn normalize_index(index: isize, len: usize, wrap: bool) -> usize {
    let last = len as isize - 1;
    if index > last {
        if wrap {
            (index % len as isize) as usize
        } else {
            len - 1
        }
    } else if index < 0 {
        if wrap {
            index.rem_euclid(len as isize) as usize
        } else {
            0
        }
    } else {
        index as usize
    }
}

/// Turn a resolved slot index into the switch the host should apply.
///
/// A non-empty target group yields its focus tab. An empty one is handled by
/// policy, in order:
/// - pinned tabs exist and `pinned_fallback` is on → group-only focus
///   (`tab_id: None`), the host focuses the group without a member switch;
/// - the request was relative → retry one slot further in the direction of
///   travel, with wraparound forced on regardless of the original flag;
/// - otherwise → `CannotSwitch`.
///
/// The retry walks at most one full lap, so an all-empty group list fails
/// rather than cycling forever.
pub fn compute_target(
    resolution: Resolution,
    snapshot: &Snapshot,
    options: &NavOptions,
) -> Result<Switch, NavError> {
    let len = snapshot.groups.len();
    if len == 0 {
        return Err(NavError::EmptyList);
    }

    let mut index = resolution.index;
    let mut wrap = options.wrap;
    let mut remaining = len;

    loop {
        let slot = normalize_index(index, len, wrap);
        let group = &snapshot.groups[slot];

        if let Some(tab) = group.focus_tab() {
            return Ok(Switch {
                group_index: slot,
                group_id: group.id,
                tab_id: Some(tab.id),
            });
        }

        if options.pinned_fallback && snapshot.has_pinned() {
            info!(
                event = "core.nav.pinned_fallback",
                group_id = group.id,
                message = "Target group is empty, focusing group without a member switch"
            );
            return Ok(Switch {
                group_index: slot,
                group_id: group.id,
                tab_id: None,
            });
        }

        let Some(direction) = resolution.travel else {
            // Direct requests never get silently redirected.
            return Err(NavError::CannotSwitch {
                title: group.display_title().to_string(),
            });
        };

        remaining -= 1;
        if remaining == 0 {
            info!(
                event = "core.nav.skip_exhausted",
                message = "Every group is empty, giving up after one full lap"
            );
            return Err(NavError::CannotSwitch {
                title: group.display_title().to_string(),
            });
        }

        index = slot as isize + direction.step();
        wrap = true;
    }
}

/// Resolve a selector and compute the resulting switch in one step.
pub fn navigate(
    snapshot: &Snapshot,
    selector: &Selector,
    options: &NavOptions,
) -> Result<Switch, NavError> {
    info!(
        event = "core.nav.navigate_started",
        selector = ?selector,
        wrap = options.wrap,
        count = options.count
    );

    let resolution = resolve_selector(selector, snapshot, options.count)?;
    let switch = compute_target(resolution, snapshot, options)?;

    info!(
        event = "core.nav.navigate_completed",
        group_id = switch.group_id,
        group_index = switch.group_index,
        tab_id = ?switch.tab_id
    );

    Ok(switch)
}
