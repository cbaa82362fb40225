// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment lookup trait definition.

/// Read-only access to an environment variable table.
///
/// Lookups are by exact name. A variable that is set to the empty string is
/// present: `var` returns `Some(String::new())` for it.
pub trait Environment: Send + Sync {
    /// Returns the value of `key`, or `None` if it is not set.
    fn var(&self, key: &str) -> Option<String>;

    /// Returns `true` if `key` is set, even to an empty value.
    fn contains(&self, key: &str) -> bool {
        self.var(key).is_some()
    }
}
