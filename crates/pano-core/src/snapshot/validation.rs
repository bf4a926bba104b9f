//! Structural validation for loaded snapshots.
//!
//! The snapshot file is written by the host (or an exporter); a malformed
//! one must be rejected before navigation ever indexes into it.

use std::collections::HashSet;

use crate::snapshot::errors::SnapshotError;
use crate::snapshot::types::Snapshot;

/// Validate invariants the rest of the crate relies on.
///
/// Checks, in order:
/// - group ids are unique
/// - tab ids are unique across groups and pinned tabs
/// - `active_group` (when present) refers to an existing group
/// - each group's `active_tab` (when present) is one of its members
pub fn validate_snapshot_structure(snapshot: &Snapshot) -> Result<(), SnapshotError> {
    let mut group_ids = HashSet::new();
    for group in &snapshot.groups {
        if !group_ids.insert(group.id) {
            return Err(SnapshotError::InvalidStructure {
                field: format!("duplicate group id {}", group.id),
            });
        }
    }

    let mut tab_ids = HashSet::new();
    let all_tabs = snapshot
        .groups
        .iter()
        .flat_map(|g| g.tabs.iter())
        .chain(snapshot.pinned.iter());
    for tab in all_tabs {
        if !tab_ids.insert(tab.id) {
            return Err(SnapshotError::InvalidStructure {
                field: format!("duplicate tab id {}", tab.id),
            });
        }
    }

    if let Some(active_id) = snapshot.active_group
        && !group_ids.contains(&active_id)
    {
        return Err(SnapshotError::InvalidStructure {
            field: format!("active_group {} does not exist", active_id),
        });
    }

    for group in &snapshot.groups {
        if let Some(active_tab) = group.active_tab
            && !group.tabs.iter().any(|t| t.id == active_tab)
        {
            return Err(SnapshotError::InvalidStructure {
                field: format!(
                    "active_tab {} is not a member of group {}",
                    active_tab, group.id
                ),
            });
        }
    }

    Ok(())
}
