//! Parsers that turn file text into validated key/value pairs.
//!
//! Responsibilities:
//! - Parse dotenv text line by line (see `dotenv.rs`).
//! - Parse a top-level JSON object and stringify its values (see `json.rs`).
//! - Collect per-entry defects as [`ParseWarning`]s instead of failing.
//!
//! Does NOT handle:
//! - Reading files or resolving paths (see `loader`).
//! - Writing to an environment (see `target`).
//!
//! Invariants:
//! - Every key in a [`ParsedEnv`] satisfies [`crate::is_valid_key`].
//! - Warnings never carry value text, so secrets cannot leak into logs.

use std::fmt;

pub mod dotenv;
pub mod expand;
pub mod json;
pub mod pyjson;

pub use dotenv::{ExpansionOrder, parse_dotenv, parse_dotenv_with};
pub use json::{JsonParseError, parse_json};

/// Insertion-ordered key/value pairs produced by a parser.
///
/// Re-inserting a key replaces its value but keeps its original position.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedEnv {
    entries: Vec<(String, String)>,
}

impl ParsedEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`.
    pub fn insert(&mut self, key: String, value: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.entries
    }
}

/// A recoverable defect in a single entry. The entry is skipped; the rest of
/// the file is still applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A non-blank, non-comment dotenv line without `=`.
    MissingSeparator { line: usize },

    /// A key that is not a valid identifier. `line` is `None` for JSON keys.
    InvalidKey { line: Option<usize>, key: String },
}

impl ParseWarning {
    /// Log the warning through `tracing`.
    pub(crate) fn emit(&self) {
        match self {
            ParseWarning::MissingSeparator { line } => {
                tracing::warn!(line, "Skipping line without '=' separator");
            }
            ParseWarning::InvalidKey {
                line: Some(line),
                key,
            } => {
                tracing::warn!(line, key = %key, "Skipping invalid environment variable name");
            }
            ParseWarning::InvalidKey { line: None, key } => {
                tracing::warn!(key = %key, "Skipping invalid environment variable name");
            }
        }
    }
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseWarning::MissingSeparator { line } => {
                write!(f, "line {line}: missing '=' separator")
            }
            ParseWarning::InvalidKey {
                line: Some(line),
                key,
            } => write!(f, "line {line}: invalid key {key:?}"),
            ParseWarning::InvalidKey { line: None, key } => write!(f, "invalid key {key:?}"),
        }
    }
}
