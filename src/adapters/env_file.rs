// SPDX-License-Identifier: MIT OR Apache-2.0

//! `.env` file repository.
//!
//! The format is one `KEY=VALUE` per line. Blank lines, lines starting with `#`
//! and lines without `=` are skipped. The line is split on the first `=`; the key
//! is trimmed, and surrounding quotes and whitespace are removed from the value.
//! No escaping of embedded quotes or newlines is supported.

use crate::adapters::{EnvVarAdapter, LocalFileSystem};
use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};
use crate::ports::{ConfigParser, Environment, FileSystem, Repository};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const QUOTES: [char; 2] = ['\'', '"'];

/// Parser for the `.env` line format.
///
/// # Examples
///
/// ```rust
/// use decouple_cfg::adapters::EnvFileParser;
/// use decouple_cfg::ports::ConfigParser;
///
/// let parsed = EnvFileParser.parse("# comment\nSECRET_KEY = 'abc'\nDEBUG=True\n").unwrap();
/// assert_eq!(parsed["SECRET_KEY"], "abc");
/// assert_eq!(parsed["DEBUG"], "True");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvFileParser;

impl EnvFileParser {
    /// Creates a new `.env` parser.
    pub fn new() -> Self {
        EnvFileParser
    }

    /// Cleans up the right-hand side of a `KEY=VALUE` line.
    ///
    /// A value opened by a quote and closed by the same quote, followed by nothing
    /// or by a `#` remark, yields the quoted text. Anything else has whitespace and
    /// then leading/trailing quote characters trimmed.
    fn clean_value(raw: &str) -> String {
        let value = raw.trim();
        if let Some(quote) = value.chars().next().filter(|c| QUOTES.contains(c)) {
            let body = &value[1..];
            if let Some(end) = body.find(quote) {
                let rest = body[end + 1..].trim_start();
                if rest.is_empty() || rest.starts_with('#') {
                    return body[..end].to_string();
                }
            }
        }
        value.trim_matches(&QUOTES[..]).to_string()
    }
}

impl ConfigParser for EnvFileParser {
    fn parse(&self, content: &str) -> Result<HashMap<String, String>> {
        let mut data = HashMap::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            data.insert(key.trim().to_string(), Self::clean_value(value));
        }
        Ok(data)
    }
}

/// Repository over a `.env` file.
///
/// `contains` also reports keys that are set in the environment, even when the
/// file does not define them. `get` only answers from the file.
///
/// # Examples
///
/// ```rust
/// use decouple_cfg::adapters::{EnvFileRepository, EnvVarAdapter};
/// use decouple_cfg::ports::Repository;
/// use std::collections::HashMap;
///
/// let repo = EnvFileRepository::from_content("PORT=8000\n")
///     .unwrap()
///     .with_environment(EnvVarAdapter::with_values(HashMap::new()));
/// assert_eq!(repo.get_str("PORT").unwrap().as_str(), Some("8000"));
/// ```
#[derive(Clone)]
pub struct EnvFileRepository {
    file_path: Option<PathBuf>,
    data: HashMap<String, String>,
    environment: Arc<dyn Environment>,
}

impl EnvFileRepository {
    /// Reads and parses the `.env` file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load(&LocalFileSystem, path.as_ref())
    }

    /// Reads and parses the `.env` file at `path` through `fs`.
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self> {
        let content = fs.read_to_string(path)?;
        let mut repo = Self::from_content(&content)?;
        repo.file_path = Some(path.to_path_buf());
        tracing::debug!(
            "Loaded {} keys from env file {}",
            repo.data.len(),
            path.display()
        );
        Ok(repo)
    }

    /// Parses `.env` content that did not come from a file.
    pub fn from_content(content: &str) -> Result<Self> {
        Ok(Self {
            file_path: None,
            data: EnvFileParser.parse(content)?,
            environment: Arc::new(EnvVarAdapter::new()),
        })
    }

    /// Replaces the environment consulted by [`Repository::contains`].
    pub fn with_environment(self, environment: impl Environment + 'static) -> Self {
        self.with_shared_environment(Arc::new(environment))
    }

    /// Replaces the environment consulted by [`Repository::contains`] with a shared one.
    pub fn with_shared_environment(mut self, environment: Arc<dyn Environment>) -> Self {
        self.environment = environment;
        self
    }

    /// Returns the path of the parsed file, if it was read from disk.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the parsed key/value pairs.
    pub fn data(&self) -> &HashMap<String, String> {
        &self.data
    }
}

impl std::fmt::Debug for EnvFileRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvFileRepository")
            .field("file_path", &self.file_path)
            .field("keys", &self.data.len())
            .finish()
    }
}

impl Repository for EnvFileRepository {
    fn name(&self) -> &str {
        "env-file"
    }

    fn contains(&self, key: &ConfigKey) -> bool {
        self.environment.contains(key.as_str()) || self.data.contains_key(key.as_str())
    }

    fn get(&self, key: &ConfigKey) -> Result<ConfigValue> {
        self.data
            .get(key.as_str())
            .map(|v| ConfigValue::from(v.as_str()))
            .ok_or_else(|| ConfigError::KeyNotFound {
                key: key.to_string(),
            })
    }

    fn all_keys(&self) -> Vec<ConfigKey> {
        self.data.keys().map(|k| ConfigKey::from(k.as_str())).collect()
    }
}
