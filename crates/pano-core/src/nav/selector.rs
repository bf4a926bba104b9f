//! Group selector grammar.
//!
//! A selector string is one of, tried in this order:
//! - `+N` / `-N`: offset from the currently active group
//! - `N` or `N: title`: host-assigned group id (the title part is display
//!   decoration from completion lists and is ignored)
//! - anything else: group title, compared case-insensitively
//!
//! Bare digits always mean an id, never a title: a group titled "5" can only
//! be reached by its id. Absolute slot positions are not part of the string
//! grammar; they come in as typed integers (`Selector::Index`).

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::nav::errors::NavError;

static RELATIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]\d+$").expect("invalid relative selector regex"));

static ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)(?::\s*(.*))?$").expect("invalid id selector regex"));

/// A parsed group selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Absolute position in slot order (0-based).
    Index(isize),
    /// Signed offset from the active group.
    Relative(isize),
    /// Host-assigned group id. Matches on id only, never falls back to
    /// title comparison.
    Id(u64),
    /// Case-insensitive exact title match.
    Title(String),
}

impl Selector {
    /// Parse a selector string.
    ///
    /// # Errors
    ///
    /// `EmptySelector` for blank input (callers should no-op rather than
    /// report a failure), `InvalidSelector` for digit sequences too large to
    /// be a group id.
    pub fn parse(input: &str) -> Result<Selector, NavError> {
        let input = input.trim();

        if input.is_empty() {
            return Err(NavError::EmptySelector);
        }

        if RELATIVE_RE.is_match(input) {
            let delta: isize = input.parse().map_err(|_| NavError::InvalidSelector {
                input: input.to_string(),
            })?;
            return Ok(Selector::Relative(delta));
        }

        if let Some(caps) = ID_RE.captures(input) {
            let id: u64 = caps[1].parse().map_err(|_| NavError::InvalidSelector {
                input: input.to_string(),
            })?;
            return Ok(Selector::Id(id));
        }

        Ok(Selector::Title(input.to_string()))
    }
}

impl FromStr for Selector {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selector::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_relative() {
        assert_eq!(Selector::parse("+1").unwrap(), Selector::Relative(1));
        assert_eq!(Selector::parse("-3").unwrap(), Selector::Relative(-3));
        assert_eq!(Selector::parse("+0").unwrap(), Selector::Relative(0));
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(Selector::parse("5").unwrap(), Selector::Id(5));
        assert_eq!(Selector::parse("12: mail").unwrap(), Selector::Id(12));
        assert_eq!(Selector::parse("12:mail").unwrap(), Selector::Id(12));
        // Trailing title may itself be empty
        assert_eq!(Selector::parse("3:").unwrap(), Selector::Id(3));
    }

    #[test]
    fn test_parse_title() {
        assert_eq!(
            Selector::parse("work").unwrap(),
            Selector::Title("work".to_string())
        );
        // Digits followed by anything but ':' are a title, not an id
        assert_eq!(
            Selector::parse("12 angry men").unwrap(),
            Selector::Title("12 angry men".to_string())
        );
        // A sign without digits is a title too
        assert_eq!(
            Selector::parse("+work").unwrap(),
            Selector::Title("+work".to_string())
        );
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(Selector::parse("  +2 ").unwrap(), Selector::Relative(2));
        assert_eq!(
            Selector::parse(" work ").unwrap(),
            Selector::Title("work".to_string())
        );
    }

    #[test]
    fn test_parse_empty_is_distinct() {
        assert!(matches!(
            Selector::parse("").unwrap_err(),
            NavError::EmptySelector
        ));
        assert!(matches!(
            Selector::parse("   ").unwrap_err(),
            NavError::EmptySelector
        ));
    }

    #[test]
    fn test_parse_oversized_id_rejected() {
        let input = "99999999999999999999999999";
        assert!(matches!(
            Selector::parse(input).unwrap_err(),
            NavError::InvalidSelector { .. }
        ));
    }

    #[test]
    fn test_from_str() {
        let sel: Selector = "+1".parse().unwrap();
        assert_eq!(sel, Selector::Relative(1));
    }
}
