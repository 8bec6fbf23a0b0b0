//! Type-name to phrase conversion

use std::sync::LazyLock;

use regex::Regex;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z][a-z]+|[0-9]+").unwrap());

/// Split a type name into a space-separated phrase
///
/// Collects every run of one uppercase letter followed by lowercase
/// letters, and every run of digits, in order. Capitals that are not
/// followed by a lowercase letter are dropped.
///
/// ```
/// use faultline_core::split_type_name;
///
/// assert_eq!(split_type_name("NotFoundError"), "Not Found Error");
/// assert_eq!(split_type_name("Http2Error"), "Http 2 Error");
/// ```
#[must_use]
pub fn split_type_name(name: &str) -> String {
    WORD_RE
        .find_iter(name)
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
