// SPDX-License-Identifier: MIT OR Apache-2.0

//! Repository trait definition.
//!
//! A repository is a format-specific reader over one configuration file. The
//! resolver only ever asks two questions of it: "do you have this key?" and
//! "what is its raw value?".

use crate::domain::{ConfigKey, ConfigValue, Result};

/// A trait for file-backed configuration repositories.
///
/// # Contract
///
/// `contains` and `get` must agree: when `contains(key)` is `false` the resolver
/// never calls `get(key)`, and when it is `true` because the key is present in
/// the file, `get(key)` must return that value.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a discovered repository can be
/// shared by a process-wide configuration accessor.
///
/// # Examples
///
/// ```rust
/// use decouple_cfg::ports::Repository;
/// use decouple_cfg::domain::{ConfigError, ConfigKey, ConfigValue, Result};
///
/// struct Fixed;
///
/// impl Repository for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn contains(&self, key: &ConfigKey) -> bool {
///         key.as_str() == "DEBUG"
///     }
///
///     fn get(&self, key: &ConfigKey) -> Result<ConfigValue> {
///         if self.contains(key) {
///             Ok(ConfigValue::from("true"))
///         } else {
///             Err(ConfigError::KeyNotFound { key: key.to_string() })
///         }
///     }
///
///     fn all_keys(&self) -> Vec<ConfigKey> {
///         vec![ConfigKey::from("DEBUG")]
///     }
/// }
///
/// let repo = Fixed;
/// assert!(repo.contains_str("DEBUG"));
/// assert_eq!(repo.get_str("DEBUG").unwrap(), ConfigValue::from("true"));
/// ```
pub trait Repository: Send + Sync {
    /// Returns a short identifier for this repository (`"ini"`, `"env-file"`, ...),
    /// used in log messages.
    fn name(&self) -> &str;

    /// Returns `true` if the repository can answer `key`.
    fn contains(&self, key: &ConfigKey) -> bool;

    /// Returns the raw value for `key`.
    ///
    /// Fails with [`ConfigError::KeyNotFound`](crate::domain::ConfigError::KeyNotFound)
    /// when the key is not held by the underlying file.
    fn get(&self, key: &ConfigKey) -> Result<ConfigValue>;

    /// Returns every key the underlying file defines.
    fn all_keys(&self) -> Vec<ConfigKey>;

    /// Convenience form of [`contains`](Repository::contains) taking a string slice.
    fn contains_str(&self, key: &str) -> bool {
        self.contains(&ConfigKey::from(key))
    }

    /// Convenience form of [`get`](Repository::get) taking a string slice.
    fn get_str(&self, key: &str) -> Result<ConfigValue> {
        self.get(&ConfigKey::from(key))
    }
}
