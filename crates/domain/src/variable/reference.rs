//! Variable token validation

use std::sync::LazyLock;

use regex::Regex;

/// Matches `$` followed by a letter or underscore, then word characters.
///
/// Anchored at the start only: anything after a valid core is tolerated.
#[allow(clippy::expect_used)]
static VARIABLE_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$[A-Za-z_][A-Za-z0-9_]*").expect("valid regex"));

/// Returns true if `input` starts with a well-formed variable reference.
///
/// This is a prefix check, not a full-string match: `$FOO:bar` passes
/// because `$FOO` is a valid core.
///
/// # Examples
///
/// ```
/// use localenv_domain::is_variable_reference;
///
/// assert!(is_variable_reference("$HOME"));
/// assert!(is_variable_reference("$_private1"));
/// assert!(!is_variable_reference("HOME"));
/// assert!(!is_variable_reference("$1ABC"));
/// ```
#[must_use]
pub fn is_variable_reference(input: &str) -> bool {
    VARIABLE_REFERENCE.is_match(input)
}
