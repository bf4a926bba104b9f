//! Selector resolution against a snapshot.
//!
//! Resolution only computes a target slot index; it never touches the
//! snapshot and never decides whether the target is usable (that is
//! [`super::target::compute_target`]'s job).

use tracing::info;

use crate::nav::errors::NavError;
use crate::nav::selector::Selector;
use crate::nav::types::{Direction, Resolution};
use crate::snapshot::Snapshot;

/// Resolve a selector to a slot index.
///
/// - `Index(i)` passes through as-is; bounds are the target step's concern.
/// - `Relative(d)` offsets from the active group's slot. With no active
///   group the baseline is position -1, so `+1` lands on the first slot.
/// - `Id(n)` scans slot order for the first group with that host id. Ids
///   never fall back to title comparison.
/// - `Title(s)` compares titles case-insensitively and takes the `count`-th
///   match (1-based) in slot order.
///
/// # Errors
///
/// `EmptyList` when the snapshot has no groups, `NotFound` when an id or
/// title matches nothing (or fewer than `count` times).
pub fn resolve_selector(
    selector: &Selector,
    snapshot: &Snapshot,
    count: usize,
) -> Result<Resolution, NavError> {
    if snapshot.groups.is_empty() {
        return Err(NavError::EmptyList);
    }

    match selector {
        Selector::Index(index) => Ok(Resolution {
            index: *index,
            travel: None,
        }),

        Selector::Relative(delta) => {
            let current = snapshot
                .active_group_index()
                .map(|i| i as isize)
                .unwrap_or(-1);
            Ok(Resolution {
                index: current + delta,
                travel: Some(Direction::of_delta(*delta)),
            })
        }

        Selector::Id(id) => snapshot
            .groups
            .iter()
            .position(|g| g.id == *id)
            .map(|index| Resolution {
                index: index as isize,
                travel: None,
            })
            .ok_or_else(|| {
                info!(event = "core.nav.id_not_found", id = *id);
                NavError::NotFound {
                    selector: id.to_string(),
                }
            }),

        Selector::Title(name) => {
            let needle = name.to_lowercase();
            let mut seen = 0;
            for (index, group) in snapshot.groups.iter().enumerate() {
                if group.title.to_lowercase() == needle {
                    seen += 1;
                    if seen == count {
                        return Ok(Resolution {
                            index: index as isize,
                            travel: None,
                        });
                    }
                }
            }
            info!(
                event = "core.nav.title_not_found",
                title = %name,
                count = count,
                matched = seen
            );
            Err(NavError::NotFound {
                selector: name.clone(),
            })
        }
    }
}
