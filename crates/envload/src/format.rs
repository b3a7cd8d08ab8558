//! File format detection.

use std::fmt;
use std::path::Path;

use crate::constants::JSON_EXTENSION;

/// The parser a file is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// `KEY=value` lines. The fallback for every non-JSON file name.
    Dotenv,
    /// A single top-level JSON object.
    Json,
}

impl FileFormat {
    /// Pick a format from the final extension of `path`.
    ///
    /// Only `.json` (any case) selects [`FileFormat::Json`]. Everything else,
    /// including `.env`, `.env.local` and names without an extension, is
    /// treated as dotenv text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case(JSON_EXTENSION) => FileFormat::Json,
            _ => FileFormat::Dotenv,
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::Dotenv => f.write_str("dotenv"),
            FileFormat::Json => f.write_str("json"),
        }
    }
}
