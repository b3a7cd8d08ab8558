//! Environment variable key validation.
//!
//! A key is valid when it starts with an ASCII letter or underscore and is
//! followed only by ASCII letters, digits, or underscores. Matching is
//! case-sensitive and nothing else (dots, dashes, spaces) is accepted.

/// Returns `true` if `c` may start a key.
pub(crate) fn is_key_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns `true` if `c` may continue a key or a `$NAME` reference.
pub(crate) fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Check whether `key` is a valid environment variable name.
pub fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if is_key_start(first) => chars.all(is_key_char),
        _ => false,
    }
}
