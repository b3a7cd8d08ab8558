//! Environment stores a load can be applied to.
//!
//! The process environment is global state. Loading goes through the
//! [`TargetEnv`] trait so callers can apply a file to an isolated
//! [`MemoryEnv`] and inspect the exact result.
//!
//! | Store | Backing | Touches the process |
//! |-------|---------|---------------------|
//! | [`ProcessEnv`] | `std::env` | Yes |
//! | [`MemoryEnv`] | `BTreeMap` | No |

use std::collections::BTreeMap;

/// A string-to-string variable table that a load reads from and writes to.
///
/// Does **not** require `Send + Sync`; add the bounds at your call site if
/// you share a store across threads.
pub trait TargetEnv {
    /// Current value of `key`, or `None` if unset or not valid Unicode.
    fn get(&self, key: &str) -> Option<String>;

    /// Set `key` to `value`, overwriting any existing value.
    fn set(&mut self, key: &str, value: &str);

    /// Whether `key` currently has a value.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// Zero-sized type that delegates to `std::env`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl TargetEnv for ProcessEnv {
    #[inline]
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        // SAFETY: loads are synchronous and assume a single writer; callers
        // must not read or write the environment from other threads while a
        // load is in progress. Keys are validated identifiers, so they never
        // contain '=' or NUL.
        unsafe {
            std::env::set_var(key, value);
        }
    }
}

/// Won't touch the global process environment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl TargetEnv for MemoryEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }

    fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
