// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw configuration values.
//!
//! Text-based sources (the environment, INI files, `.env` files) produce strings,
//! while a JSON repository produces already-typed values. `ConfigValue` carries
//! either form unchanged until a cast turns it into the caller's type.

use crate::domain::cast::cast_boolean;
use crate::domain::errors::{ConfigError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// A raw configuration value as read from a source, before casting.
///
/// # Examples
///
/// ```
/// use decouple_cfg::domain::config_value::ConfigValue;
///
/// let value = ConfigValue::from("42");
/// assert_eq!(value.as_str(), Some("42"));
/// assert_eq!(value.as_i32("PORT").unwrap(), 42);
///
/// let value = ConfigValue::from(serde_json::json!({"user": "admin"}));
/// assert_eq!(value.to_text(), r#"{"user":"admin"}"#);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// A string read from the environment or a text-format file.
    Text(String),
    /// A typed value read from a JSON document.
    Json(serde_json::Value),
}

impl ConfigValue {
    /// Creates a new text value.
    pub fn new(value: impl Into<String>) -> Self {
        ConfigValue::Text(value.into())
    }

    /// Returns the value as a string slice if it is a string.
    ///
    /// JSON strings are returned without quotes; other JSON values return `None`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Text(s) => Some(s),
            ConfigValue::Json(serde_json::Value::String(s)) => Some(s),
            ConfigValue::Json(_) => None,
        }
    }

    /// Renders the value as text.
    ///
    /// Strings render verbatim, JSON scalars through their display form and
    /// JSON arrays or objects as compact JSON.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            ConfigValue::Text(s) => Cow::Borrowed(s),
            ConfigValue::Json(serde_json::Value::String(s)) => Cow::Borrowed(s),
            ConfigValue::Json(serde_json::Value::Bool(b)) => {
                Cow::Borrowed(if *b { "true" } else { "false" })
            }
            ConfigValue::Json(other) => Cow::Owned(other.to_string()),
        }
    }

    /// Consumes the value and returns its text rendering.
    pub fn into_text(self) -> String {
        match self {
            ConfigValue::Text(s) => s,
            ConfigValue::Json(serde_json::Value::String(s)) => s,
            other => other.to_text().into_owned(),
        }
    }

    /// Returns the JSON value if this came from a JSON source.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            ConfigValue::Json(v) => Some(v),
            ConfigValue::Text(_) => None,
        }
    }

    /// Converts the value into JSON. Text becomes a JSON string.
    pub fn into_json(self) -> serde_json::Value {
        match self {
            ConfigValue::Text(s) => serde_json::Value::String(s),
            ConfigValue::Json(v) => v,
        }
    }

    /// Returns `true` if the value came from a JSON source.
    pub fn is_json(&self) -> bool {
        matches!(self, ConfigValue::Json(_))
    }

    /// Converts the value to a boolean using the fixed token table
    /// (`1 yes true on` / `0 no false off` and the empty string), ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use decouple_cfg::domain::config_value::ConfigValue;
    ///
    /// assert!(ConfigValue::from("On").as_bool().unwrap());
    /// assert!(!ConfigValue::from("").as_bool().unwrap());
    /// assert!(ConfigValue::from("maybe").as_bool().is_err());
    /// ```
    pub fn as_bool(&self) -> Result<bool> {
        cast_boolean(&self.to_text())
    }

    /// Converts the value to an `i32`.
    pub fn as_i32(&self, key: &str) -> Result<i32> {
        self.to_text()
            .trim()
            .parse::<i32>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the value to an `i64`.
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        self.to_text()
            .trim()
            .parse::<i64>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the value to a `u32`.
    pub fn as_u32(&self, key: &str) -> Result<u32> {
        self.to_text()
            .trim()
            .parse::<u32>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the value to a `u64`.
    pub fn as_u64(&self, key: &str) -> Result<u64> {
        self.to_text()
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the value to an `f64`.
    pub fn as_f64(&self, key: &str) -> Result<f64> {
        self.to_text()
            .trim()
            .parse::<f64>()
            .map_err(|e| ConfigError::from_parse_float_error(key.to_string(), e))
    }

    /// Parses the text rendering into any type that implements `FromStr`.
    ///
    /// Surrounding whitespace is trimmed first, like the `as_*` accessors.
    ///
    /// # Examples
    ///
    /// ```
    /// use decouple_cfg::domain::config_value::ConfigValue;
    /// use std::net::IpAddr;
    ///
    /// let value = ConfigValue::from("127.0.0.1");
    /// let ip: IpAddr = value.parse("BIND_ADDR").unwrap();
    /// assert_eq!(ip.to_string(), "127.0.0.1");
    /// ```
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.to_text()
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::TypeConversionError {
                key: key.to_string(),
                target_type: std::any::type_name::<T>().to_string(),
                source: Box::new(e),
            })
    }

    /// Deserializes the value into any `serde` type.
    ///
    /// Intended for structured values from a JSON repository; text values are
    /// presented to the deserializer as JSON strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use decouple_cfg::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::from(serde_json::json!(["a", "b"]));
    /// let hosts: Vec<String> = value.deserialize("ALLOWED_HOSTS").unwrap();
    /// assert_eq!(hosts, vec!["a", "b"]);
    /// ```
    pub fn deserialize<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        serde_json::from_value(self.clone().into_json()).map_err(|e| {
            ConfigError::TypeConversionError {
                key: key.to_string(),
                target_type: std::any::type_name::<T>().to_string(),
                source: Box::new(e),
            }
        })
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Text(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Text(s.to_string())
    }
}

impl From<serde_json::Value> for ConfigValue {
    fn from(v: serde_json::Value) -> Self {
        ConfigValue::Json(v)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Json(serde_json::Value::Bool(b))
    }
}

impl From<i32> for ConfigValue {
    fn from(n: i32) -> Self {
        ConfigValue::Json(n.into())
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        ConfigValue::Json(n.into())
    }
}

impl From<u32> for ConfigValue {
    fn from(n: u32) -> Self {
        ConfigValue::Json(n.into())
    }
}

impl From<u64> for ConfigValue {
    fn from(n: u64) -> Self {
        ConfigValue::Json(n.into())
    }
}

impl From<f64> for ConfigValue {
    fn from(n: f64) -> Self {
        ConfigValue::Json(n.into())
    }
}

impl From<ConfigValue> for String {
    fn from(value: ConfigValue) -> Self {
        value.into_text()
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
