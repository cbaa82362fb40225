// SPDX-License-Identifier: MIT OR Apache-2.0

//! The resolver.
//!
//! [`Config`] pairs one repository with an environment and resolves options
//! environment-first. The accessors themselves come from
//! [`ConfigurationService`].

use crate::adapters::EnvVarAdapter;
use crate::domain::{ConfigKey, ConfigValue, ConfigurationService, Result};
use crate::ports::{Environment, Repository};
use std::sync::Arc;

/// Resolves options from the environment, then from a repository.
///
/// # Examples
///
/// ```rust
/// use decouple_cfg::adapters::{EnvFileRepository, EnvVarAdapter};
/// use decouple_cfg::prelude::*;
///
/// # fn main() -> decouple_cfg::domain::Result<()> {
/// let env = EnvVarAdapter::from_pairs([("PORT", "9000")]);
/// let repo = EnvFileRepository::from_content("PORT=8000\nDEBUG=yes\n")?
///     .with_environment(env.clone());
/// let config = Config::with_environment(repo, env);
///
/// assert_eq!(config.get_cast("PORT", Parse::<u16>::new())?, 9000);
/// assert!(config.get_cast("DEBUG", Boolean)?);
/// assert_eq!(config.get_or("NAME", "app")?, ConfigValue::from("app"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Config {
    repository: Arc<dyn Repository>,
    environment: Arc<dyn Environment>,
}

impl Config {
    /// Creates a resolver over `repository` and the process environment.
    pub fn new(repository: impl Repository + 'static) -> Self {
        Self::from_shared(Arc::new(repository))
    }

    /// Creates a resolver over a shared repository and the process environment.
    pub fn from_shared(repository: Arc<dyn Repository>) -> Self {
        Self {
            repository,
            environment: Arc::new(EnvVarAdapter::new()),
        }
    }

    /// Creates a resolver over `repository` and a custom environment.
    pub fn with_environment(
        repository: impl Repository + 'static,
        environment: impl Environment + 'static,
    ) -> Self {
        Self::from_parts(Arc::new(repository), Arc::new(environment))
    }

    /// Creates a resolver from already shared parts.
    pub fn from_parts(repository: Arc<dyn Repository>, environment: Arc<dyn Environment>) -> Self {
        Self {
            repository,
            environment,
        }
    }

    /// Returns the backing repository.
    pub fn repository(&self) -> &Arc<dyn Repository> {
        &self.repository
    }

    /// Returns the environment consulted before the repository.
    pub fn environment(&self) -> &Arc<dyn Environment> {
        &self.environment
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("repository", &self.repository.name())
            .finish_non_exhaustive()
    }
}

impl ConfigurationService for Config {
    fn lookup(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        if let Some(value) = self.environment.var(key.as_str()) {
            tracing::debug!("Resolved '{}' from the environment", key);
            return Ok(Some(ConfigValue::Text(value)));
        }

        if self.repository.contains(key) {
            tracing::debug!("Resolved '{}' from repository '{}'", key, self.repository.name());
            return self.repository.get(key).map(Some);
        }

        Ok(None)
    }
}
