//! Tests for the environment loader.
//!
//! Invariants:
//! - Tests that touch the process environment hold `env_lock()` and are
//!   marked `#[serial]`; everything else loads into a `MemoryEnv`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::{Path, PathBuf};
use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write `contents` to `dir/name` and return the file name.
pub fn write_file<'a>(dir: &Path, name: &'a str, contents: &str) -> &'a str {
    std::fs::write(dir.join(name), contents).expect("Failed to write test file");
    name
}

/// RAII guard that changes the working directory and restores it on drop.
///
/// Hold `env_lock()` and mark the test `#[serial]` while a guard is alive.
pub struct CwdGuard {
    previous: PathBuf,
}

impl CwdGuard {
    pub fn enter(dir: &Path) -> Self {
        let previous = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(dir).expect("Failed to set current directory");
        Self { previous }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.previous);
    }
}
