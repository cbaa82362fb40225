// SPDX-License-Identifier: MIT OR Apache-2.0

//! Auto-discovering configuration accessor.
//!
//! [`AutoConfig`] finds a configuration file on first use, builds the matching
//! repository and then resolves options exactly like [`Config`]. Discovery
//! runs once per instance; later lookups reuse the result.

use crate::adapters::{EnvVarAdapter, LocalFileSystem};
use crate::domain::{ConfigError, ConfigKey, ConfigValue, ConfigurationService, Result};
use crate::ports::{Environment, FileSystem};
use crate::service::config::Config;
use crate::service::discovery::Discovery;
use directories::ProjectDirs;
use once_cell::sync::OnceCell;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

struct Loaded {
    discovery: Discovery,
    config: Config,
}

/// Resolver that locates its own configuration file.
///
/// Without a search path the search starts from the current working directory
/// at the time of first use. Parent directories are searched by default.
///
/// # Examples
///
/// ```rust,no_run
/// use decouple_cfg::prelude::*;
///
/// # fn main() -> decouple_cfg::domain::Result<()> {
/// let config = AutoConfig::with_search_path("/srv/app");
/// let debug = config.get_or_cast("DEBUG", false, Boolean)?;
/// let hosts: Vec<String> = config.get_or_cast("ALLOWED_HOSTS", "localhost", Csv::new())?;
/// # Ok(())
/// # }
/// ```
pub struct AutoConfig {
    search_path: Option<PathBuf>,
    search_parents: bool,
    environment: Arc<dyn Environment>,
    filesystem: Arc<dyn FileSystem>,
    loaded: OnceCell<Loaded>,
}

impl AutoConfig {
    /// Creates an accessor that searches from the current directory.
    pub fn new() -> Self {
        Self {
            search_path: None,
            search_parents: true,
            environment: Arc::new(EnvVarAdapter::new()),
            filesystem: Arc::new(LocalFileSystem),
            loaded: OnceCell::new(),
        }
    }

    /// Creates an accessor that searches from `path`.
    ///
    /// A relative path is resolved against the current directory when
    /// discovery runs. An empty path means "the current directory".
    pub fn with_search_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            search_path: (!path.as_os_str().is_empty()).then_some(path),
            ..Self::new()
        }
    }

    /// Creates an accessor over the per-user configuration directory of an
    /// application, for example `~/.config/<application>` on Linux.
    ///
    /// Parent directories are not searched.
    pub fn for_project(qualifier: &str, organization: &str, application: &str) -> Result<Self> {
        let dirs = ProjectDirs::from(qualifier, organization, application).ok_or_else(|| {
            ConfigError::SourceError {
                source_name: "auto-config".to_string(),
                message: format!(
                    "Could not determine the configuration directory for '{}'",
                    application
                ),
                source: None,
            }
        })?;
        Ok(Self::with_search_path(dirs.config_dir()).search_parents(false))
    }

    /// Enables or disables searching parent directories.
    pub fn search_parents(mut self, enabled: bool) -> Self {
        self.search_parents = enabled;
        self
    }

    /// Replaces the environment consulted before the discovered file.
    pub fn with_environment(mut self, environment: impl Environment + 'static) -> Self {
        self.environment = Arc::new(environment);
        self
    }

    /// Replaces the filesystem used for discovery and loading.
    pub fn with_filesystem(mut self, filesystem: impl FileSystem + 'static) -> Self {
        self.filesystem = Arc::new(filesystem);
        self
    }

    /// Returns the configured search path, if any.
    pub fn search_path(&self) -> Option<&Path> {
        self.search_path.as_deref()
    }

    /// Returns the discovery result, running discovery if it has not run yet.
    ///
    /// A failure to load the discovered file is returned and not remembered,
    /// so the next call tries again.
    pub fn discovery(&self) -> Result<&Discovery> {
        self.loaded().map(|loaded| &loaded.discovery)
    }

    /// Returns the resolver over the discovered repository.
    pub fn config(&self) -> Result<&Config> {
        self.loaded().map(|loaded| &loaded.config)
    }

    /// Forgets the discovery result; the next lookup searches again.
    pub fn reset(&mut self) {
        self.loaded = OnceCell::new();
    }

    fn loaded(&self) -> Result<&Loaded> {
        if let Some(loaded) = self.loaded.get() {
            tracing::debug!("Reusing discovered configuration");
            return Ok(loaded);
        }
        self.loaded.get_or_try_init(|| {
            let discovery = match self.start_dir() {
                Ok(dir) => Discovery::run(
                    self.filesystem.as_ref(),
                    &dir,
                    self.search_parents,
                    self.environment.clone(),
                )?,
                Err(e) => {
                    tracing::warn!("Could not resolve configuration search path: {}", e);
                    Discovery::empty()
                }
            };
            let config =
                Config::from_parts(discovery.repository().clone(), self.environment.clone());
            Ok(Loaded { discovery, config })
        })
    }

    fn start_dir(&self) -> std::io::Result<PathBuf> {
        match &self.search_path {
            Some(path) => self.filesystem.absolute(path),
            None => self.filesystem.current_dir(),
        }
    }
}

impl Default for AutoConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AutoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoConfig")
            .field("search_path", &self.search_path)
            .field("search_parents", &self.search_parents)
            .field("discovery", &self.loaded.get().map(|l| &l.discovery))
            .finish()
    }
}

impl ConfigurationService for AutoConfig {
    fn lookup(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        self.config()?.lookup(key)
    }
}
