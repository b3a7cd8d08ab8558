//! Environment loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `EnvLoader` holding the search directory,
//!   an optional forced format, and the override policy.
//! - Resolve, read and parse files, then apply the result to a target.
//!
//! Does NOT handle:
//! - Parsing rules (delegated to `parser`).
//! - Boolean conversion of errors for the free functions (see `entry.rs`).
//!
//! Invariants / Assumptions:
//! - Without an explicit search directory, the current working directory at
//!   load time is used.
//! - Overriding existing variables is on unless `with_override(false)` is set.
//!   Without overriding, references expand against the target's existing
//!   values before the file's own.
//! - Nothing is written to the target unless read and parse both succeed.

use std::path::{Path, PathBuf};

use super::error::LoadError;
use super::report::LoadReport;
use crate::format::FileFormat;
use crate::parser::{ExpansionOrder, ParseWarning, ParsedEnv, parse_dotenv_with, parse_json};
use crate::target::{ProcessEnv, TargetEnv};

/// Loader that resolves an environment file and applies it to a target.
#[derive(Debug, Clone)]
pub struct EnvLoader {
    search_dir: Option<PathBuf>,
    format: Option<FileFormat>,
    override_existing: bool,
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvLoader {
    /// Create a loader that searches the current working directory.
    pub fn new() -> Self {
        Self {
            search_dir: None,
            format: None,
            override_existing: true,
        }
    }

    /// Set the directory file names are resolved against.
    pub fn with_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dir = Some(dir.into());
        self
    }

    /// Force a parser instead of detecting one from the file extension.
    pub fn with_format(mut self, format: FileFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Set whether variables already present in the target are overwritten.
    pub fn with_override(mut self, override_existing: bool) -> Self {
        self.override_existing = override_existing;
        self
    }

    pub fn search_dir(&self) -> Option<&Path> {
        self.search_dir.as_deref()
    }

    pub fn overrides_existing(&self) -> bool {
        self.override_existing
    }

    /// Resolve `filename` against the search directory.
    ///
    /// An absolute `filename` is used as-is.
    ///
    /// # Errors
    ///
    /// - `LoadError::SearchDirUnavailable` if no search directory was set and
    ///   the working directory cannot be determined.
    /// - `LoadError::NotFound` if the resolved path does not exist.
    pub fn resolve(&self, filename: impl AsRef<Path>) -> Result<PathBuf, LoadError> {
        let dir = match &self.search_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()
                .map_err(|e| LoadError::SearchDirUnavailable { kind: e.kind() })?,
        };

        let path = dir.join(filename);
        if !path.exists() {
            return Err(LoadError::NotFound { path });
        }
        Ok(path)
    }

    /// Lookup order for `$NAME` references. Without overriding, variables
    /// already in the target win, matching the values that end up applied.
    fn expansion_order(&self) -> ExpansionOrder {
        if self.override_existing {
            ExpansionOrder::FileFirst
        } else {
            ExpansionOrder::EnvFirst
        }
    }

    /// Format used for `path`: the forced one, or detection by extension.
    pub fn format_for(&self, path: &Path) -> FileFormat {
        self.format.unwrap_or_else(|| FileFormat::from_path(path))
    }

    /// Resolve, read and parse `filename` without touching any environment.
    ///
    /// `env` is only read, to expand references to variables the file does
    /// not define itself.
    pub fn parse<E>(
        &self,
        filename: impl AsRef<Path>,
        env: &E,
    ) -> Result<(ParsedEnv, Vec<ParseWarning>), LoadError>
    where
        E: TargetEnv + ?Sized,
    {
        let path = self.resolve(filename)?;
        let format = self.format_for(&path);
        self.parse_resolved(&path, format, env)
    }

    fn parse_resolved<E>(
        &self,
        path: &Path,
        format: FileFormat,
        env: &E,
    ) -> Result<(ParsedEnv, Vec<ParseWarning>), LoadError>
    where
        E: TargetEnv + ?Sized,
    {
        let bytes = std::fs::read(path).map_err(|e| LoadError::Read {
            path: path.to_path_buf(),
            kind: e.kind(),
        })?;
        let text = String::from_utf8(bytes).map_err(|_| LoadError::Decode {
            path: path.to_path_buf(),
        })?;

        tracing::debug!(path = %path.display(), %format, "Parsing environment file");

        match format {
            FileFormat::Dotenv => Ok(parse_dotenv_with(&text, env, self.expansion_order())),
            FileFormat::Json => {
                parse_json(&text).map_err(|e| LoadError::from_json(path.to_path_buf(), e))
            }
        }
    }

    /// Load `filename` into `env`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, not UTF-8, or (for
    /// JSON) malformed or not an object. `env` is unchanged in every error case.
    pub fn load_into<E>(
        &self,
        filename: impl AsRef<Path>,
        env: &mut E,
    ) -> Result<LoadReport, LoadError>
    where
        E: TargetEnv + ?Sized,
    {
        let path = self.resolve(filename)?;
        let format = self.format_for(&path);
        let (parsed, warnings) = self.parse_resolved(&path, format, &*env)?;

        for warning in &warnings {
            warning.emit();
        }

        let mut applied = Vec::with_capacity(parsed.len());
        let mut skipped_existing = Vec::new();
        for (key, value) in parsed.into_pairs() {
            if !self.override_existing && env.contains(&key) {
                skipped_existing.push(key);
                continue;
            }
            env.set(&key, &value);
            applied.push(key);
        }

        tracing::debug!(
            path = %path.display(),
            applied = applied.len(),
            skipped_existing = skipped_existing.len(),
            warnings = warnings.len(),
            "Applied environment file"
        );

        Ok(LoadReport {
            path,
            format,
            applied,
            skipped_existing,
            warnings,
        })
    }

    /// Load `filename` into the process environment.
    ///
    /// Returns `false` if the load failed; the error is logged, and the
    /// environment is unchanged.
    pub fn load(&self, filename: impl AsRef<Path>) -> bool {
        succeeded(self.load_into(filename, &mut ProcessEnv))
    }
}

/// Log a load error and collapse the result to a flag.
pub(super) fn succeeded(result: Result<LoadReport, LoadError>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load environment file");
            false
        }
    }
}
