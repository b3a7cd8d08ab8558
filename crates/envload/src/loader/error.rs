//! Error types for environment file loading.
//!
//! Invariants:
//! - Every variant names the path involved (except when no path could be built).
//! - No variant includes raw file contents, so secrets never reach logs.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::parser::JsonParseError;

/// Errors that abort a whole load. The target environment is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Environment file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// No search directory was given and the working directory is unavailable.
    #[error("Unable to determine search directory: {kind}")]
    SearchDirUnavailable { kind: ErrorKind },

    #[error("Failed to read environment file at {}: {kind}", path.display())]
    Read { path: PathBuf, kind: ErrorKind },

    #[error("Environment file at {} is not valid UTF-8", path.display())]
    Decode { path: PathBuf },

    #[error("Invalid JSON in {} at line {line}, column {column}", path.display())]
    JsonSyntax {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    #[error("JSON root in {} must be an object, found {found}", path.display())]
    JsonRoot { path: PathBuf, found: &'static str },
}

impl LoadError {
    pub(crate) fn from_json(path: PathBuf, error: JsonParseError) -> Self {
        match error {
            JsonParseError::Syntax { line, column } => LoadError::JsonSyntax { path, line, column },
            JsonParseError::NotAnObject { found } => LoadError::JsonRoot { path, found },
        }
    }

    /// Whether the error only means the file is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }
}
