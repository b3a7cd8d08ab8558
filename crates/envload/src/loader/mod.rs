//! Environment file loader.
//!
//! Responsibilities:
//! - Resolve `search_dir/filename` and detect its format.
//! - Read the file, hand it to the dotenv or JSON parser, and apply the
//!   parsed variables to a [`crate::TargetEnv`].
//! - Convert failures to a `false` result for the boolean entry points.
//!
//! Does NOT handle:
//! - Line-level parsing rules (see `parser::dotenv`).
//! - JSON value stringification (see `parser::pyjson`).
//!
//! Invariants:
//! - A failed load never mutates the target: parsing completes before the
//!   first variable is written.
//! - Per-entry defects are warnings, never failures.
//! - Errors never include file contents, only paths and positions.

mod builder;
mod entry;
mod error;
mod report;

#[cfg(test)]
mod tests;

pub use builder::EnvLoader;
pub use entry::{load_env, load_env_into};
pub use error::LoadError;
pub use report::LoadReport;
