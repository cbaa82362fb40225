// SPDX-License-Identifier: MIT OR Apache-2.0

//! Option name newtype.
//!
//! Option names are matched exactly against environment variable names and
//! repository keys, so `ConfigKey` never normalizes case or separators.

use std::borrow::Borrow;
use std::fmt;

/// The name of a configuration option.
///
/// Keys are case-sensitive and global: `DEBUG` and `debug` are different options,
/// and there is no namespacing. Individual repositories may choose a looser
/// match (INI option names are case-insensitive), but the key itself is
/// carried verbatim.
///
/// # Examples
///
/// ```
/// use decouple_cfg::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from("DATABASE_URL");
/// assert_eq!(key.as_str(), "DATABASE_URL");
/// assert_ne!(key, ConfigKey::from("database_url"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<&ConfigKey> for ConfigKey {
    fn from(key: &ConfigKey) -> Self {
        key.clone()
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ConfigKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
