// SPDX-License-Identifier: MIT OR Apache-2.0

//! `settings.ini` repository.
//!
//! All options live in a section literally named `settings`. Option names are
//! case-insensitive; values of a `DEFAULT` section are visible from `settings`;
//! `%(name)s` references other options and `%%` is a literal percent sign.

use crate::adapters::{EnvVarAdapter, LocalFileSystem};
use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};
use crate::ports::{ConfigParser, Environment, FileSystem, Repository};
use ini::{Ini, ParseOption};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The section every option must be declared in.
pub const SECTION: &str = "settings";

/// The section whose options are inherited by every other section.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Maximum nesting of `%(name)s` references.
const MAX_INTERPOLATION_DEPTH: usize = 10;

/// Parser for INI files, flattened to the options visible from [`SECTION`].
///
/// Option names are lower-cased. Quote and escape handling of the underlying INI
/// parser is disabled so values are taken verbatim. Indented lines continue the
/// previous value. A file without a `settings` section parses to an empty map, a
/// file declaring `settings` or `DEFAULT` twice is rejected.
#[derive(Clone, Copy, Debug, Default)]
pub struct IniParser;

impl IniParser {
    /// Creates a new INI parser.
    pub fn new() -> Self {
        IniParser
    }

    fn load(content: &str) -> Result<Ini> {
        let option = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            enabled_indented_mutiline_value: true,
            ..ParseOption::default()
        };
        Ini::load_from_str_opt(content, option).map_err(|e| ConfigError::ParseError {
            message: format!("Failed to parse INI: {}", e),
            source: Some(Box::new(e)),
        })
    }

    fn collect_section(
        ini: &Ini,
        section: &str,
        into: &mut HashMap<String, String>,
    ) -> Result<()> {
        let Some(properties) = ini.section(Some(section)) else {
            return Ok(());
        };
        let mut seen = Vec::new();
        for (key, value) in properties.iter() {
            let key = key.to_lowercase();
            if seen.contains(&key) {
                return Err(ConfigError::ParseError {
                    message: format!("option '{}' in section '{}' already exists", key, section),
                    source: None,
                });
            }
            into.insert(key.clone(), value.to_string());
            seen.push(key);
        }
        Ok(())
    }

    fn reject_repeated_section(ini: &Ini, section: &str) -> Result<()> {
        let count = ini.iter().filter(|(name, _)| *name == Some(section)).count();
        if count > 1 {
            return Err(ConfigError::ParseError {
                message: format!("section '{}' already exists", section),
                source: None,
            });
        }
        Ok(())
    }
}

impl ConfigParser for IniParser {
    fn parse(&self, content: &str) -> Result<HashMap<String, String>> {
        let ini = Self::load(content)?;

        let orphaned = ini
            .section(None::<String>)
            .map(|general| general.iter().next().is_some())
            .unwrap_or(false);
        if orphaned {
            return Err(ConfigError::ParseError {
                message: "File contains no section headers".to_string(),
                source: None,
            });
        }

        Self::reject_repeated_section(&ini, DEFAULT_SECTION)?;
        Self::reject_repeated_section(&ini, SECTION)?;

        let mut options = HashMap::new();
        if ini.section(Some(SECTION)).is_some() {
            Self::collect_section(&ini, DEFAULT_SECTION, &mut options)?;
            Self::collect_section(&ini, SECTION, &mut options)?;
        }
        Ok(options)
    }
}

/// Expands `%(name)s` references and `%%` escapes in `value`.
fn interpolate(
    option: &str,
    value: &str,
    options: &HashMap<String, String>,
    depth: usize,
    out: &mut String,
) -> Result<()> {
    if depth > MAX_INTERPOLATION_DEPTH {
        return Err(ConfigError::ParseError {
            message: format!(
                "Recursion limit exceeded in value substitution: option '{}' in section '{}'",
                option, SECTION
            ),
            source: None,
        });
    }

    let mut rest = value;
    while let Some(p) = rest.find('%') {
        out.push_str(&rest[..p]);
        rest = &rest[p..];
        if let Some(tail) = rest.strip_prefix("%%") {
            out.push('%');
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("%(") {
            let reference = tail
                .find(")s")
                .map(|end| (&tail[..end], &tail[end + 2..]))
                .filter(|(name, _)| !name.is_empty() && !name.contains(')'));
            let Some((name, tail)) = reference else {
                return Err(ConfigError::ParseError {
                    message: format!("bad interpolation variable reference {:?}", rest),
                    source: None,
                });
            };
            let name = name.to_lowercase();
            let Some(referenced) = options.get(&name) else {
                return Err(ConfigError::ParseError {
                    message: format!(
                        "Bad value substitution: option '{}' in section '{}' contains an interpolation key '{}' which is not a valid option name",
                        option, SECTION, name
                    ),
                    source: None,
                });
            };
            if referenced.contains('%') {
                interpolate(option, referenced, options, depth + 1, out)?;
            } else {
                out.push_str(referenced);
            }
            rest = tail;
        } else {
            return Err(ConfigError::ParseError {
                message: format!("'%' must be followed by '%' or '(', found: {:?}", rest),
                source: None,
            });
        }
    }
    out.push_str(rest);
    Ok(())
}

/// Repository over a `settings.ini` file.
///
/// `contains` also reports keys that are set in the environment, even when the
/// file does not define them. `get` only answers from the file.
///
/// # Examples
///
/// ```rust
/// use decouple_cfg::adapters::IniRepository;
/// use decouple_cfg::ports::Repository;
///
/// let repo = IniRepository::from_content("[settings]\nDEBUG = True\n").unwrap();
/// assert!(repo.contains_str("debug"));
/// assert_eq!(repo.get_str("DEBUG").unwrap().as_str(), Some("True"));
/// ```
#[derive(Clone)]
pub struct IniRepository {
    file_path: Option<PathBuf>,
    options: HashMap<String, String>,
    environment: Arc<dyn Environment>,
}

impl IniRepository {
    /// Reads and parses the INI file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load(&LocalFileSystem, path.as_ref())
    }

    /// Reads and parses the INI file at `path` through `fs`.
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self> {
        let content = fs.read_to_string(path)?;
        let mut repo = Self::from_content(&content)?;
        repo.file_path = Some(path.to_path_buf());
        tracing::debug!(
            "Loaded {} options from [{}] in {}",
            repo.options.len(),
            SECTION,
            path.display()
        );
        Ok(repo)
    }

    /// Parses INI content that did not come from a file.
    pub fn from_content(content: &str) -> Result<Self> {
        Ok(Self {
            file_path: None,
            options: IniParser.parse(content)?,
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

    /// Returns the option value without interpolation.
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.options.get(&key.to_lowercase()).map(String::as_str)
    }
}

impl std::fmt::Debug for IniRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IniRepository")
            .field("file_path", &self.file_path)
            .field("options", &self.options.len())
            .finish()
    }
}

impl Repository for IniRepository {
    fn name(&self) -> &str {
        "ini"
    }

    fn contains(&self, key: &ConfigKey) -> bool {
        self.environment.contains(key.as_str()) || self.get_raw(key.as_str()).is_some()
    }

    fn get(&self, key: &ConfigKey) -> Result<ConfigValue> {
        let raw = self
            .get_raw(key.as_str())
            .ok_or_else(|| ConfigError::KeyNotFound {
                key: key.to_string(),
            })?;
        let mut value = String::with_capacity(raw.len());
        interpolate(key.as_str(), raw, &self.options, 1, &mut value)?;
        Ok(ConfigValue::Text(value))
    }

    fn all_keys(&self) -> Vec<ConfigKey> {
        self.options
            .keys()
            .map(|k| ConfigKey::from(k.as_str()))
            .collect()
    }
}
