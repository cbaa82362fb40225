// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration service trait definition.
//!
//! This module defines the `ConfigurationService` trait, the interface shared by
//! the plain resolver and the auto-discovering accessor. Implementors provide the
//! raw lookup; the trait supplies the default and cast handling on top of it so
//! every accessor applies them identically.

use crate::domain::cast::{Cast, Identity};
use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};

/// The main configuration service trait.
///
/// Resolution order for an option is:
///
/// 1. the environment variable of the same name (an empty value still counts),
/// 2. the repository,
/// 3. the default, if one was given,
/// 4. otherwise [`ConfigError::UndefinedValue`].
///
/// Implementors handle steps 1 and 2 in [`lookup`](ConfigurationService::lookup).
/// Whatever value is selected, including a default, is then passed through the
/// cast.
///
/// # Examples
///
/// ```rust
/// use decouple_cfg::domain::{Boolean, ConfigKey, ConfigValue, ConfigurationService, Result};
///
/// struct Fixed;
///
/// impl ConfigurationService for Fixed {
///     fn lookup(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
///         Ok((key.as_str() == "DEBUG").then(|| ConfigValue::from("off")))
///     }
/// }
///
/// let service = Fixed;
/// assert_eq!(service.get_cast("DEBUG", Boolean).unwrap(), false);
/// assert_eq!(service.get_or("PORT", "8000").unwrap(), ConfigValue::from("8000"));
/// assert!(service.get("SECRET_KEY").is_err());
/// ```
pub trait ConfigurationService {
    /// Returns the raw value for `key` from the environment or the repository,
    /// or `None` if neither has it.
    fn lookup(&self, key: &ConfigKey) -> Result<Option<ConfigValue>>;

    /// Resolves `key` with an optional default and a cast.
    ///
    /// This is the general form the other accessors delegate to.
    fn get_with<C>(&self, key: &str, default: Option<ConfigValue>, cast: C) -> Result<C::Output>
    where
        Self: Sized,
        C: Cast,
    {
        let key = ConfigKey::from(key);
        let value = match self.lookup(&key)? {
            Some(value) => value,
            None => match default {
                Some(default) => {
                    tracing::debug!("Using default for '{}'", key);
                    default
                }
                None => return Err(ConfigError::undefined(key.into_string())),
            },
        };
        cast.cast(value).map_err(|e| e.with_key(key.as_str()))
    }

    /// Resolves `key` without a default or cast.
    fn get(&self, key: &str) -> Result<ConfigValue>
    where
        Self: Sized,
    {
        self.get_with(key, None, Identity)
    }

    /// Resolves `key`, falling back to `default`.
    fn get_or(&self, key: &str, default: impl Into<ConfigValue>) -> Result<ConfigValue>
    where
        Self: Sized,
    {
        self.get_with(key, Some(default.into()), Identity)
    }

    /// Resolves `key` and applies `cast`.
    fn get_cast<C>(&self, key: &str, cast: C) -> Result<C::Output>
    where
        Self: Sized,
        C: Cast,
    {
        self.get_with(key, None, cast)
    }

    /// Resolves `key`, falling back to `default`, and applies `cast` to the result.
    fn get_or_cast<C>(&self, key: &str, default: impl Into<ConfigValue>, cast: C) -> Result<C::Output>
    where
        Self: Sized,
        C: Cast,
    {
        self.get_with(key, Some(default.into()), cast)
    }

    /// Returns `true` if `key` resolves without a default.
    fn has(&self, key: &str) -> bool {
        matches!(self.lookup(&ConfigKey::from(key)), Ok(Some(_)))
    }
}
