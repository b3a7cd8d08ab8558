//! Summary of a successful load.

use std::path::PathBuf;

use crate::format::FileFormat;
use crate::parser::ParseWarning;

/// What a successful load did to its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Fully resolved file path.
    pub path: PathBuf,
    /// Parser the file was routed to.
    pub format: FileFormat,
    /// Keys written to the target, in file order.
    pub applied: Vec<String>,
    /// Keys left alone because they already existed and overriding was off.
    pub skipped_existing: Vec<String>,
    /// Entries skipped because they were malformed.
    pub warnings: Vec<ParseWarning>,
}

impl LoadReport {
    /// True when no entry was skipped as malformed.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}
