use serde::Serialize;

use crate::config::NavigationConfig;

/// Direction of travel for a relative request.
///
/// Drives the skip direction when a relative switch lands on an empty group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Offset sign for one retry step.
    pub fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    /// Direction implied by a signed offset. Zero counts as forward.
    pub fn of_delta(delta: isize) -> Direction {
        if delta >= 0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

/// Result of selector resolution: a target slot index (possibly out of
/// bounds), plus the travel direction when the request was relative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub index: isize,
    /// `Some` only for relative requests; direct requests never skip.
    pub travel: Option<Direction>,
}

/// The switch the host should apply: which group becomes active, and which
/// of its member tabs gets focus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Switch {
    /// Slot position of the target group at resolution time.
    pub group_index: usize,
    /// Host id of the target group.
    pub group_id: u64,
    /// Member tab to focus. `None` means the group is empty and the host
    /// should focus the group itself (pinned-tab fallback) without a
    /// member switch.
    pub tab_id: Option<u64>,
}

/// Navigation policy for a single request.
#[derive(Debug, Clone, Copy)]
pub struct NavOptions {
    /// Whether out-of-bounds indices wrap around the group list.
    pub wrap: bool,
    /// For title selectors: which match to take, 1-based.
    pub count: usize,
    /// Whether an empty target group with pinned tabs present resolves to a
    /// group-only focus instead of skipping or failing.
    pub pinned_fallback: bool,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self {
            wrap: true,
            count: 1,
            pinned_fallback: true,
        }
    }
}

impl NavOptions {
    /// Build options from the `[navigation]` config section.
    pub fn from_config(config: &NavigationConfig) -> Self {
        Self {
            wrap: config.wrap(),
            count: 1,
            pinned_fallback: config.pinned_fallback(),
        }
    }
}
