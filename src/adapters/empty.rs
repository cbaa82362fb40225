// SPDX-License-Identifier: MIT OR Apache-2.0

//! The repository used when no configuration file was found.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};
use crate::ports::Repository;

/// A repository that holds no keys.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyRepository;

impl EmptyRepository {
    /// Creates the empty repository.
    pub fn new() -> Self {
        EmptyRepository
    }
}

impl Repository for EmptyRepository {
    fn name(&self) -> &str {
        "empty"
    }

    fn contains(&self, _key: &ConfigKey) -> bool {
        false
    }

    fn get(&self, key: &ConfigKey) -> Result<ConfigValue> {
        Err(ConfigError::KeyNotFound {
            key: key.to_string(),
        })
    }

    fn all_keys(&self) -> Vec<ConfigKey> {
        Vec::new()
    }
}
