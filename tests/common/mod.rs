// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use decouple_cfg::adapters::{EnvVarAdapter, LocalFileSystem};
use decouple_cfg::domain::{ConfigError, ConfigKey, ConfigValue, Result};
use decouple_cfg::ports::{FileSystem, Repository};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A repository with predefined text values.
#[derive(Debug, Clone, Default)]
pub struct MockRepository {
    values: HashMap<String, String>,
}

impl MockRepository {
    /// Creates an empty mock repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value to the mock repository.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl Repository for MockRepository {
    fn name(&self) -> &str {
        "mock"
    }

    fn contains(&self, key: &ConfigKey) -> bool {
        self.values.contains_key(key.as_str())
    }

    fn get(&self, key: &ConfigKey) -> Result<ConfigValue> {
        self.values
            .get(key.as_str())
            .map(|v| ConfigValue::from(v.as_str()))
            .ok_or_else(|| ConfigError::KeyNotFound {
                key: key.to_string(),
            })
    }

    fn all_keys(&self) -> Vec<ConfigKey> {
        self.values.keys().map(|k| ConfigKey::from(k.as_str())).collect()
    }
}

/// Access counters shared between a [`CountingFileSystem`] and the test.
#[derive(Debug, Default)]
pub struct AccessCounts {
    pub is_file: AtomicUsize,
    pub reads: AtomicUsize,
}

impl AccessCounts {
    /// Total number of filesystem calls observed.
    pub fn total(&self) -> usize {
        self.is_file.load(Ordering::SeqCst) + self.reads.load(Ordering::SeqCst)
    }
}

/// The local filesystem, counting every existence check and read.
#[derive(Debug, Clone, Default)]
pub struct CountingFileSystem {
    counts: Arc<AccessCounts>,
}

impl CountingFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle to the counters that outlives the filesystem value.
    pub fn counts(&self) -> Arc<AccessCounts> {
        self.counts.clone()
    }
}

impl FileSystem for CountingFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        self.counts.is_file.fetch_add(1, Ordering::SeqCst);
        LocalFileSystem.is_file(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.counts.reads.fetch_add(1, Ordering::SeqCst);
        LocalFileSystem.read_to_string(path)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        LocalFileSystem.current_dir()
    }
}

/// An environment with no variables at all.
pub fn no_env() -> EnvVarAdapter {
    EnvVarAdapter::from_pairs(Vec::<(String, String)>::new())
}

/// An environment holding exactly `pairs`.
pub fn env_with(pairs: &[(&str, &str)]) -> EnvVarAdapter {
    EnvVarAdapter::from_pairs(pairs.iter().copied())
}

/// Writes `content` to `dir/name`, creating parent directories.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}
