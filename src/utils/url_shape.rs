//! Permissive URL shape check.
//!
//! The pattern is scheme-agnostic and unanchored: any host-like run followed
//! by a dot and a short suffix is accepted, optionally followed by a path or
//! query. It is a sanity check on the input, not a URL parser.
//!
//! The word boundary after the suffix is ASCII-only, so a trailing non-ASCII
//! letter still ends the suffix.

use regex::Regex;
use std::sync::LazyLock;

/// Compiled URL shape pattern.
pub static URL_SHAPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}(?-u:\b)([-a-zA-Z0-9()@:%_+.~#?&/=]*)?")
        .unwrap()
});

/// Returns true if `url` looks like a URL.
pub fn is_valid_url(url: &str) -> bool {
    URL_SHAPE_REGEX.is_match(url)
}
