//! Find-pattern modifier parsing.
//!
//! A pattern may carry backslash modifiers anywhere in its text:
//! `\c` / `\C` control case folding, `\l` / `\L` restrict matching to link
//! targets or widen it back out. Conflicts are settled by an ordered rule
//! table evaluated top-to-bottom; the first rule whose token appears in the
//! pattern wins for its concern, so `\C` beats `\c` and `\L` beats `\l`
//! when both are specified.

use std::str::FromStr;

use crate::errors::ConfigError;

/// Case handling when a pattern carries no explicit `\c`/`\C` modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    /// Case-sensitive iff the pattern contains an uppercase character.
    #[default]
    Smart,
    Sensitive,
    Insensitive,
}

impl FromStr for CaseMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "smart" => Ok(CaseMode::Smart),
            "sensitive" => Ok(CaseMode::Sensitive),
            "insensitive" => Ok(CaseMode::Insensitive),
            other => Err(ConfigError::InvalidCaseMode {
                mode: other.to_string(),
            }),
        }
    }
}

/// Resolved find options after modifier parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindOptions {
    pub case_sensitive: bool,
    /// Match link targets (URLs) only instead of titles and URLs.
    pub links_only: bool,
}

/// Case rules in priority order; the sensitive form wins if both appear.
const CASE_RULES: &[(&str, bool)] = &[(r"\C", true), (r"\c", false)];

/// Scope rules in priority order; the widening form wins if both appear.
const SCOPE_RULES: &[(&str, bool)] = &[(r"\L", false), (r"\l", true)];

/// Split a raw pattern into its text and resolved [`FindOptions`].
///
/// Recognized modifier tokens are stripped from the text; anything else
/// (including unrecognized `\x` escapes) is left alone.
pub fn parse_pattern(raw: &str, case_mode: CaseMode) -> (String, FindOptions) {
    let case_sensitive = CASE_RULES
        .iter()
        .find(|(token, _)| raw.contains(token))
        .map(|(_, sensitive)| *sensitive);

    let links_only = SCOPE_RULES
        .iter()
        .find(|(token, _)| raw.contains(token))
        .map(|(_, links)| *links)
        .unwrap_or(false);

    let mut text = raw.to_string();
    for (token, _) in CASE_RULES.iter().chain(SCOPE_RULES.iter()) {
        text = text.replace(token, "");
    }

    let case_sensitive = case_sensitive.unwrap_or(match case_mode {
        CaseMode::Smart => text.chars().any(|c| c.is_uppercase()),
        CaseMode::Sensitive => true,
        CaseMode::Insensitive => false,
    });

    (
        text,
        FindOptions {
            case_sensitive,
            links_only,
        },
    )
}
