//! Load `KEY=value` dotenv files and JSON objects into an environment.
//!
//! This crate provides a forgiving dotenv parser, a JSON-object parser, and a
//! loader that resolves a file, picks the parser by extension, and applies the
//! result to the process environment (or any other [`TargetEnv`]).
//!
//! ```no_run
//! use std::path::Path;
//!
//! let loaded = envload::load_env(".env", Some(Path::new("/srv/app")));
//! if !loaded {
//!     // fall back to built-in defaults
//! }
//! ```

pub mod constants;
pub mod format;
pub mod key;
mod loader;
pub mod parser;
pub mod target;

pub use format::FileFormat;
pub use key::is_valid_key;
pub use loader::{EnvLoader, LoadError, LoadReport, load_env, load_env_into};
pub use parser::{ParseWarning, ParsedEnv};
pub use target::{MemoryEnv, ProcessEnv, TargetEnv};
