// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable adapter.
//!
//! This module provides the [`Environment`] implementation used by the resolver
//! and by the text-format repositories.

use crate::ports::Environment;
use std::collections::HashMap;
use std::env;

/// Environment adapter over the process environment or a fixed map.
///
/// The process-backed adapter reads `std::env` on every lookup, so changes made
/// with `std::env::set_var` are visible immediately. Variables set to the empty
/// string are reported as present.
///
/// # Examples
///
/// ```rust
/// use decouple_cfg::adapters::EnvVarAdapter;
/// use decouple_cfg::ports::Environment;
/// use std::collections::HashMap;
///
/// let mut values = HashMap::new();
/// values.insert("DEBUG".to_string(), "".to_string());
///
/// let env = EnvVarAdapter::with_values(values);
/// assert!(env.contains("DEBUG"));
/// assert!(!env.contains("SECRET_KEY"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct EnvVarAdapter {
    /// Fixed values; `None` means "read the process environment"
    values: Option<HashMap<String, String>>,
}

impl EnvVarAdapter {
    /// Creates an adapter over the process environment.
    pub fn new() -> Self {
        Self { values: None }
    }

    /// Creates an adapter that answers from `values` only.
    ///
    /// Useful for tests and for embedding the resolver where the process
    /// environment should not be consulted.
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            values: Some(values),
        }
    }

    /// Creates a map-backed adapter from key/value pairs.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::with_values(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns `true` if this adapter reads the process environment.
    pub fn is_process(&self) -> bool {
        self.values.is_none()
    }
}

impl Environment for EnvVarAdapter {
    fn var(&self, key: &str) -> Option<String> {
        match &self.values {
            Some(values) => values.get(key).cloned(),
            // An empty name or one containing '=' or NUL makes var_os panic on some platforms.
            None if key.is_empty() || key.contains(['=', '\0']) => None,
            None => env::var_os(key).map(|v| v.to_string_lossy().into_owned()),
        }
    }
}
