//! Snapshot data model: groups, tabs, and the host-state snapshot.
//!
//! The host browser owns and mutates this state; pano only ever reads a
//! snapshot of it and hands a computed switch back. Groups and tabs carry
//! host-assigned integer ids that stay stable for the object's lifetime.

use serde::{Deserialize, Serialize};

/// A single tab, either a group member or a pinned ("app") tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    /// Host-assigned id, unique across the snapshot.
    pub id: u64,
    /// Page title. May be empty for tabs that never finished loading.
    #[serde(default)]
    pub title: String,
    /// Page URL.
    #[serde(default)]
    pub url: String,
}

/// A tab group ("workspace"). Order of `tabs` is the host's slot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Host-assigned id, unique and stable for the group's lifetime.
    pub id: u64,
    /// Group title. May be empty ("untitled" in host UI).
    #[serde(default)]
    pub title: String,
    /// Member tabs in slot order. May be empty.
    #[serde(default)]
    pub tabs: Vec<Tab>,
    /// Id of the member tab the host last had focused in this group, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_tab: Option<u64>,
}

impl Group {
    /// True when the group has no member tabs.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// The tab a switch into this group should land on: the group's active
    /// member, or its first member when none is marked active.
    pub fn focus_tab(&self) -> Option<&Tab> {
        if let Some(active_id) = self.active_tab
            && let Some(tab) = self.tabs.iter().find(|t| t.id == active_id)
        {
            return Some(tab);
        }
        self.tabs.first()
    }

    /// Display title, substituting a placeholder for untitled groups.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "(untitled)"
        } else {
            &self.title
        }
    }
}

/// Read-only view of the host's tab-group state at a point in time.
///
/// Read fresh before every navigation request and never cached across
/// requests: the host can reorder, create, and destroy groups between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Snapshot {
    /// Groups in the host's slot order.
    #[serde(default)]
    pub groups: Vec<Group>,
    /// Id of the group the host currently considers focused. Absent when no
    /// group is active (e.g. only pinned tabs are present).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_group: Option<u64>,
    /// Pinned ("app") tabs, living outside the group system.
    #[serde(default)]
    pub pinned: Vec<Tab>,
    /// RFC3339 timestamp of the last write, set by persistence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

impl Snapshot {
    /// Position of the active group in slot order, if one is active.
    pub fn active_group_index(&self) -> Option<usize> {
        let active_id = self.active_group?;
        self.groups.iter().position(|g| g.id == active_id)
    }

    /// Look up a group by host id.
    pub fn group_by_id(&self, id: u64) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// True when any pinned tabs exist outside the group system.
    pub fn has_pinned(&self) -> bool {
        !self.pinned.is_empty()
    }
}
