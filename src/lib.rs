// SPDX-License-Identifier: MIT OR Apache-2.0

//! Strict separation of settings from code.
//!
//! This crate resolves configuration options from the process environment
//! first, then from a settings file, then from a caller-supplied default, and
//! fails loudly when none of them has a value. Values are cast on the way out,
//! with a boolean cast that understands `"False"` and `"off"` and a list cast
//! for comma separated values.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and logic (`ConfigKey`, `ConfigValue`, casts, errors)
//! - **Ports**: Trait definitions (`Repository`, `Environment`, `FileSystem`, `ConfigParser`)
//! - **Adapters**: `.env`, `settings.ini` and `secrets.json` repositories, the process
//!   environment and the local filesystem
//! - **Service**: The resolver, file discovery and the global accessor
//!
//! # Supported files
//!
//! Discovery looks for these names, in this order, in the search directory and
//! then in each parent directory:
//!
//! - `secrets.json`: a JSON object; values keep their JSON types
//! - `settings.ini`: options in a `[settings]` section
//! - `.env`: `KEY=VALUE` lines
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use decouple_cfg::prelude::*;
//! use decouple_cfg::config;
//!
//! # fn main() -> decouple_cfg::domain::Result<()> {
//! let secret = config!("SECRET_KEY")?;
//! let debug = config!("DEBUG", default = false, cast = Boolean)?;
//! let hosts = config!("ALLOWED_HOSTS", default = "localhost", cast = Csv::new())?;
//!
//! // An accessor rooted at this crate's manifest directory.
//! let local = decouple_cfg::auto_config!();
//! let port = local.get_or_cast("PORT", 8000_u32, Parse::<u16>::new())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Explicit repositories
//!
//! ```rust
//! use decouple_cfg::adapters::{EnvVarAdapter, IniRepository};
//! use decouple_cfg::prelude::*;
//!
//! # fn main() -> decouple_cfg::domain::Result<()> {
//! let env = EnvVarAdapter::from_pairs([("DEBUG", "on")]);
//! let repo = IniRepository::from_content("[settings]\nDEBUG=False\nWORKERS=4\n")?
//!     .with_environment(env.clone());
//! let config = Config::with_environment(repo, env);
//!
//! assert!(config.get_cast("DEBUG", Boolean)?);
//! assert_eq!(config.get_cast("WORKERS", Parse::<usize>::new())?, 4);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use domain::{ConfigError, ConfigurationService, Result};
pub use service::{global, reset_global, set_global, AutoConfig, Config};

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        cast_fn, Boolean, Cast, ConfigError, ConfigKey, ConfigValue, ConfigurationService, Csv,
        Identity, Parse, Result, Text,
    };
    pub use crate::ports::{Environment, FileSystem, Repository};
    pub use crate::service::{AutoConfig, Config};
}

/// Resolves an option through the global accessor.
///
/// ```rust,no_run
/// use decouple_cfg::config;
/// use decouple_cfg::domain::{Boolean, Csv};
///
/// # fn main() -> decouple_cfg::domain::Result<()> {
/// let url = config!("DATABASE_URL")?;
/// let name = config!("APP_NAME", default = "app")?;
/// let debug = config!("DEBUG", cast = Boolean)?;
/// let hosts = config!("ALLOWED_HOSTS", default = "", cast = Csv::new())?;
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! config {
    ($key:expr $(,)?) => {
        $crate::domain::ConfigurationService::get(&*$crate::service::global(), $key)
    };
    ($key:expr, default = $default:expr $(,)?) => {
        $crate::domain::ConfigurationService::get_or(&*$crate::service::global(), $key, $default)
    };
    ($key:expr, cast = $cast:expr $(,)?) => {
        $crate::domain::ConfigurationService::get_cast(&*$crate::service::global(), $key, $cast)
    };
    ($key:expr, default = $default:expr, cast = $cast:expr $(,)?) => {
        $crate::domain::ConfigurationService::get_or_cast(
            &*$crate::service::global(),
            $key,
            $default,
            $cast,
        )
    };
}

/// Creates an [`AutoConfig`] that searches from the calling crate's manifest
/// directory.
#[macro_export]
macro_rules! auto_config {
    () => {
        $crate::service::AutoConfig::with_search_path(env!("CARGO_MANIFEST_DIR"))
    };
}
