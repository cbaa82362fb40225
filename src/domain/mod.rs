// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and logic.
//!
//! This module contains the option key and raw value types, the error type, the
//! casting machinery and the resolution contract shared by every configuration
//! accessor. It is independent of where values come from.

pub mod cast;
pub mod config_key;
pub mod config_value;
pub mod csv;
pub mod errors;
pub mod service;

// Re-export commonly used types
pub use cast::{cast_boolean, cast_fn, Boolean, Cast, Identity, Parse, Text};
pub use config_key::ConfigKey;
pub use config_value::ConfigValue;
pub use csv::Csv;
pub use errors::{ConfigError, Result};
pub use service::ConfigurationService;
