//! Syntax checks for the version and release fields of an archive name.

use regex::Regex;
use std::sync::OnceLock;

/// A version starts with a digit and continues with digits or dots.
///
/// Accepts `4.5.3`, `20121212` and `1.3`; rejects `.3.2` and `3.4.foo`.
pub fn is_valid_version(version: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^[0-9][0-9.]*$").expect("valid regex"));
    re.is_match(version)
}

/// A release is a positive integer without leading zeros.
pub fn is_valid_release(release: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^[1-9][0-9]*$").expect("valid regex"));
    re.is_match(release)
}

/// Check a `[name, version, release]` split of an archive stem.
pub fn is_valid_parts(parts: &[&str]) -> bool {
    match parts {
        [_, version, release] => is_valid_version(version) && is_valid_release(release),
        _ => false,
    }
}
