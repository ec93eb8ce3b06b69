//! Placeholder discovery.
//!
//! A placeholder is a name made of ASCII letters, digits, `_` and `-`,
//! wrapped in `@` on both sides: `@PROJECT_NAME@`. There is no escaping, so
//! any text of that shape is a placeholder.

use indexmap::IndexSet;
use regex::Regex;
use std::sync::LazyLock;

/// The placeholder grammar. Group 1 captures the name.
pub const PLACEHOLDER_PATTERN: &str = r"@([a-zA-Z0-9_-]+)@";

/// Compiled once and shared by the scanner and the rewriter.
pub(crate) static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PLACEHOLDER_PATTERN).expect("placeholder pattern is valid"));

/// Distinct placeholder names, in first-discovery order.
pub type VariableNames = IndexSet<String>;

/// Collects every distinct placeholder name referenced by `contents`.
///
/// Names are kept in the order they are first seen so callers can prompt for
/// them deterministically. Text that only looks like a placeholder (a lone
/// `@`, an empty `@@`, a name with other characters) is ignored.
pub fn scan<'a, I>(contents: I) -> VariableNames
where
    I: IntoIterator<Item = &'a str>,
{
    let mut names = VariableNames::new();
    for content in contents {
        for caps in PLACEHOLDER.captures_iter(content) {
            if !names.contains(&caps[1]) {
                names.insert(caps[1].to_string());
            }
        }
    }
    names
}
