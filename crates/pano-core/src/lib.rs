//! pano-core: Core library for tab-group navigation
//!
//! This library provides the business logic for resolving vim-style group
//! selectors against a snapshot of a host browser's tab-group state. It is
//! used by the CLI; the host applies the computed switches.
//!
//! # Main Entry Points
//!
//! - [`nav`] - Selector parsing, group resolution, wraparound navigation
//! - [`snapshot`] - Group/tab data model and JSON persistence
//! - [`host`] - The `TabHost` seam and file-backed host
//! - [`finder`] - Find-pattern modifiers and tab search
//! - [`config`] - Configuration management

pub mod config;
pub mod errors;
pub mod events;
pub mod finder;
pub mod host;
pub mod logging;
pub mod nav;
pub mod snapshot;

// Re-export commonly used types at crate root for convenience
pub use config::{Config, PanoConfig, resolve_session_path};
pub use finder::{CaseMode, TabMatch, find_tabs};
pub use host::{FileHost, TabHost};
pub use nav::{NavError, NavOptions, Selector, Switch, navigate};
pub use snapshot::{Group, Snapshot, SnapshotError, Tab};

// Re-export logging initialization
pub use logging::init_logging;
