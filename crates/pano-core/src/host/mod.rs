//! Host seam: who owns the tab-group state, and the apply step.
//!
//! The browser owns groups, tabs, and focus. Navigation only ever sees a
//! read-only snapshot and returns a [`Switch`]; every mutation goes through
//! [`TabHost::apply`].

use std::path::{Path, PathBuf};

use tracing::info;

use crate::nav::Switch;
use crate::snapshot::{Snapshot, SnapshotError, load_snapshot, save_snapshot};

/// Trait for the host collaborator that owns tab-group state.
///
/// # Semantics
///
/// - **Freshness**: `snapshot` returns a fresh read of host state, never a
///   cache. Host state can change between calls, so callers resolve and
///   apply against the same snapshot read.
/// - **Mutation**: only `apply` mutates anything. A `Switch` with
///   `tab_id: None` focuses the group without a member switch (the
///   empty-group pinned fallback).
/// - **Error handling**: implementations define their own error type.
pub trait TabHost {
    type Error;

    fn snapshot(&self) -> Result<Snapshot, Self::Error>;

    fn apply(&mut self, switch: &Switch) -> Result<(), Self::Error>;
}

/// File-backed host: the snapshot lives in a JSON file kept up to date by a
/// browser-side exporter. `apply` rewrites the active-group and active-tab
/// markers and persists atomically.
#[derive(Debug, Clone)]
pub struct FileHost {
    path: PathBuf,
}

impl FileHost {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TabHost for FileHost {
    type Error = SnapshotError;

    fn snapshot(&self) -> Result<Snapshot, SnapshotError> {
        load_snapshot(&self.path)
    }

    fn apply(&mut self, switch: &Switch) -> Result<(), SnapshotError> {
        let mut snapshot = load_snapshot(&self.path)?;

        let group = snapshot
            .groups
            .iter_mut()
            .find(|g| g.id == switch.group_id)
            .ok_or(SnapshotError::UnknownGroup {
                id: switch.group_id,
            })?;

        if let Some(tab_id) = switch.tab_id {
            if !group.tabs.iter().any(|t| t.id == tab_id) {
                return Err(SnapshotError::UnknownTab {
                    group_id: group.id,
                    tab_id,
                });
            }
            group.active_tab = Some(tab_id);
        }

        snapshot.active_group = Some(switch.group_id);
        save_snapshot(&snapshot, &self.path)?;

        info!(
            event = "core.host.switch_applied",
            group_id = switch.group_id,
            tab_id = ?switch.tab_id,
            file = %self.path.display()
        );

        Ok(())
    }
}
