// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the error types that can occur when resolving configuration
//! values. All errors use `thiserror` for proper error handling and conversion.

use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// This enum represents all possible errors that can occur when reading, parsing,
/// casting or resolving configuration values. It is marked as `#[non_exhaustive]`
/// to allow for future additions without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use decouple_cfg::domain::errors::ConfigError;
///
/// fn get_config_value() -> Result<String, ConfigError> {
///     Err(ConfigError::UndefinedValue {
///         key: "DATABASE_URL".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The option has no environment value, no repository value and no default.
    #[error("{key} not found. Declare it as envvar or define a default value.")]
    UndefinedValue {
        /// The option that could not be resolved
        key: String,
    },

    /// A configuration file was expected at a path but is not there.
    #[error("Config file \"{}\" not found", path.display())]
    DoesNotExist {
        /// The missing file
        path: PathBuf,
    },

    /// The file parsed but its top level is not a key/value mapping.
    #[error("The JSON file {} didn't return a dict when loaded", path.display())]
    UnsupportedFormat {
        /// The offending file
        path: PathBuf,
    },

    /// The boolean cast received a token outside its table.
    #[error("Not a boolean: {value}")]
    InvalidBoolean {
        /// The rejected token
        value: String,
    },

    /// A repository was asked for a key it does not hold.
    #[error("Configuration key not found: {key}")]
    KeyNotFound {
        /// The key that was not found
        key: String,
    },

    /// Failed to convert a configuration value to the requested type.
    #[error(
        "Failed to convert configuration value for key '{key}' to type {target_type}: {source}"
    )]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An error occurred while reading a configuration source.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to parse a configuration file or value.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates an `UndefinedValue` error for the given option.
    pub fn undefined(key: impl Into<String>) -> Self {
        ConfigError::UndefinedValue { key: key.into() }
    }

    /// Creates a TypeConversionError from a ParseIntError.
    pub fn from_parse_int_error(key: String, err: ParseIntError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseFloatError.
    pub fn from_parse_float_error(key: String, err: ParseFloatError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "float".to_string(),
            source: Box::new(err),
        }
    }

    /// Attaches the option name to a conversion error raised by a cast that
    /// only saw the value.
    pub fn with_key(self, option: &str) -> Self {
        match self {
            ConfigError::TypeConversionError {
                key,
                target_type,
                source,
            } if key.is_empty() => ConfigError::TypeConversionError {
                key: option.to_string(),
                target_type,
                source,
            },
            other => other,
        }
    }

    /// Returns `true` if this error means "no value anywhere and no default".
    pub fn is_undefined(&self) -> bool {
        matches!(self, ConfigError::UndefinedValue { .. })
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_value_error() {
        let error = ConfigError::undefined("SECRET_KEY");
        assert_eq!(
            error.to_string(),
            "SECRET_KEY not found. Declare it as envvar or define a default value."
        );
        assert!(error.is_undefined());
    }

    #[test]
    fn test_does_not_exist_error() {
        let error = ConfigError::DoesNotExist {
            path: PathBuf::from("/etc/app/secrets.json"),
        };
        assert_eq!(
            error.to_string(),
            "Config file \"/etc/app/secrets.json\" not found"
        );
        assert!(!error.is_undefined());
    }

    #[test]
    fn test_unsupported_format_error() {
        let error = ConfigError::UnsupportedFormat {
            path: PathBuf::from("secrets.json"),
        };
        assert!(error.to_string().contains("secrets.json"));
        assert!(error.to_string().contains("didn't return a dict"));
    }

    #[test]
    fn test_invalid_boolean_error() {
        let error = ConfigError::InvalidBoolean {
            value: "maybe".to_string(),
        };
        assert_eq!(error.to_string(), "Not a boolean: maybe");
    }

    #[test]
    fn test_key_not_found_error() {
        let error = ConfigError::KeyNotFound {
            key: "DEBUG".to_string(),
        };
        assert_eq!(error.to_string(), "Configuration key not found: DEBUG");
    }

    #[test]
    fn test_type_conversion_error() {
        let source_error = "invalid value".parse::<i32>().unwrap_err();
        let error = ConfigError::TypeConversionError {
            key: "PORT".to_string(),
            target_type: "i32".to_string(),
            source: Box::new(source_error),
        };
        assert!(error.to_string().contains("PORT"));
        assert!(error.to_string().contains("i32"));
    }

    #[test]
    fn test_with_key_fills_missing_key() {
        let parse_err = "x".parse::<u8>().unwrap_err();
        let error = ConfigError::from_parse_int_error(String::new(), parse_err).with_key("PORT");
        assert!(error.to_string().contains("'PORT'"));

        let untouched = ConfigError::undefined("A").with_key("B");
        assert_eq!(untouched.to_string(), ConfigError::undefined("A").to_string());
    }

    #[test]
    fn test_source_error() {
        let error = ConfigError::SourceError {
            source_name: "env-file".to_string(),
            message: "Failed to read .env".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Configuration source 'env-file' error: Failed to read .env"
        );
    }

    #[test]
    fn test_parse_error() {
        let error = ConfigError::ParseError {
            message: "No closing quotation".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration: No closing quotation"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ConfigError::from(io_error);
        assert!(matches!(error, ConfigError::IoError(_)));
    }

    #[test]
    fn test_from_parse_int_error() {
        let parse_err = "not_a_number".parse::<i32>().unwrap_err();
        let error = ConfigError::from_parse_int_error("PORT".to_string(), parse_err);
        assert!(matches!(error, ConfigError::TypeConversionError { .. }));
        assert!(error.to_string().contains("integer"));
    }

    #[test]
    fn test_from_parse_float_error() {
        let parse_err = "not_a_float".parse::<f64>().unwrap_err();
        let error = ConfigError::from_parse_float_error("RATIO".to_string(), parse_err);
        assert!(matches!(error, ConfigError::TypeConversionError { .. }));
        assert!(error.to_string().contains("float"));
    }
}
