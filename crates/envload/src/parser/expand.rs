//! `$NAME` and `${NAME}` variable expansion.
//!
//! Expansion is a single left-to-right pass. A reference whose name cannot be
//! resolved is copied through literally, as is a `$` that does not start a
//! reference. Substituted text is never rescanned.

use crate::constants::EXPANSION_MARKER;
use crate::key::{is_key_char, is_valid_key};

/// Expand variable references in `value` using `lookup`.
pub fn expand<F>(value: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if !value.contains(EXPANSION_MARKER) {
        return value.to_string();
    }

    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(pos) = rest.find(EXPANSION_MARKER) {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + EXPANSION_MARKER.len_utf8()..];

        if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) if is_valid_key(&braced[..end]) => {
                    let name = &braced[..end];
                    match lookup(name) {
                        Some(found) => out.push_str(&found),
                        None => {
                            out.push_str("${");
                            out.push_str(name);
                            out.push('}');
                        }
                    }
                    rest = &braced[end + 1..];
                }
                _ => {
                    out.push(EXPANSION_MARKER);
                    rest = after;
                }
            }
            continue;
        }

        let name_len = after
            .char_indices()
            .find(|&(_, c)| !is_key_char(c))
            .map_or(after.len(), |(i, _)| i);

        if name_len == 0 {
            out.push(EXPANSION_MARKER);
            rest = after;
            continue;
        }

        let name = &after[..name_len];
        match lookup(name) {
            Some(found) => out.push_str(&found),
            None => {
                out.push(EXPANSION_MARKER);
                out.push_str(name);
            }
        }
        rest = &after[name_len..];
    }

    out.push_str(rest);
    out
}
