//! Boolean entry points.

use std::path::Path;

use super::builder::{EnvLoader, succeeded};
use crate::target::{ProcessEnv, TargetEnv};

fn loader_for(path: Option<&Path>) -> EnvLoader {
    match path {
        Some(dir) => EnvLoader::new().with_search_dir(dir),
        None => EnvLoader::new(),
    }
}

/// Load `path/filename` into the process environment.
///
/// Without `path`, the file is resolved against the current working
/// directory. `.json` files must hold a top-level object; every other file is
/// read as dotenv text.
///
/// Returns `true` if the file was applied (even when some entries were
/// skipped with a warning) and `false` if it was missing, unreadable or
/// malformed as a whole, in which case nothing is changed.
pub fn load_env(filename: impl AsRef<Path>, path: Option<&Path>) -> bool {
    load_env_into(&mut ProcessEnv, filename, path)
}

/// Like [`load_env`], but applies the file to `env` instead of the process.
pub fn load_env_into<E>(env: &mut E, filename: impl AsRef<Path>, path: Option<&Path>) -> bool
where
    E: TargetEnv + ?Sized,
{
    succeeded(loader_for(path).load_into(filename, env))
}
