// SPDX-License-Identifier: MIT OR Apache-2.0

//! `secrets.json` repository.
//!
//! JSON values are already typed, so this repository hands them to the resolver
//! as [`ConfigValue::Json`] and casting is usually unnecessary. Values may be
//! nested objects or arrays.

use crate::adapters::LocalFileSystem;
use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};
use crate::ports::{FileSystem, Repository};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Repository over a JSON document whose root is an object.
///
/// Unlike the text-format repositories, `contains` does not consult the
/// environment.
///
/// # Examples
///
/// ```rust
/// use decouple_cfg::adapters::JsonRepository;
/// use decouple_cfg::ports::Repository;
///
/// let repo = JsonRepository::from_content(r#"{"PORT": 8000, "DB": {"user": "app"}}"#).unwrap();
/// assert_eq!(repo.get_str("PORT").unwrap().as_json(), Some(&serde_json::json!(8000)));
/// assert_eq!(repo.dict()["DB"]["user"], "app");
/// ```
#[derive(Clone, Debug)]
pub struct JsonRepository {
    file_path: Option<PathBuf>,
    data: Map<String, Value>,
}

impl JsonRepository {
    /// Reads and parses the JSON file at `path`.
    ///
    /// Fails with [`ConfigError::DoesNotExist`] if there is no file at `path`
    /// and with [`ConfigError::UnsupportedFormat`] if the document root is not
    /// an object.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load(&LocalFileSystem, path.as_ref())
    }

    /// Reads and parses the JSON file at `path` through `fs`.
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self> {
        if !fs.is_file(path) {
            return Err(ConfigError::DoesNotExist {
                path: path.to_path_buf(),
            });
        }
        let content = fs.read_to_string(path)?;
        let data = Self::parse(&content, path)?;
        tracing::debug!("Loaded {} keys from {}", data.len(), path.display());
        Ok(Self {
            file_path: Some(path.to_path_buf()),
            data,
        })
    }

    /// Parses JSON content that did not come from a file.
    pub fn from_content(content: &str) -> Result<Self> {
        Ok(Self {
            file_path: None,
            data: Self::parse(content, Path::new("<memory>"))?,
        })
    }

    fn parse(content: &str, path: &Path) -> Result<Map<String, Value>> {
        let value: Value = serde_json::from_str(content).map_err(|e| ConfigError::ParseError {
            message: format!("Failed to parse JSON in {}: {}", path.display(), e),
            source: Some(Box::new(e)),
        })?;
        match value {
            Value::Object(map) => Ok(map),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Returns the whole parsed document.
    pub fn dict(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Returns the path of the parsed file, if it was read from disk.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }
}

impl Repository for JsonRepository {
    fn name(&self) -> &str {
        "json"
    }

    fn contains(&self, key: &ConfigKey) -> bool {
        self.data.contains_key(key.as_str())
    }

    fn get(&self, key: &ConfigKey) -> Result<ConfigValue> {
        self.data
            .get(key.as_str())
            .cloned()
            .map(ConfigValue::Json)
            .ok_or_else(|| ConfigError::KeyNotFound {
                key: key.to_string(),
            })
    }

    fn all_keys(&self) -> Vec<ConfigKey> {
        self.data.keys().map(|k| ConfigKey::from(k.as_str())).collect()
    }
}
