use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;

/// Collapses every run of two or more whitespace characters into one space.
/// Single whitespace characters (a lone newline, say) are left alone.
#[must_use]
pub fn remove_excess_whitespace(s: &str) -> Cow<'_, str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s\s+").expect("regex should be valid"));
    re.replace_all(s, " ")
}
