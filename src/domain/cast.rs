// SPDX-License-Identifier: MIT OR Apache-2.0

//! Casts applied to resolved values.
//!
//! A cast turns the raw [`ConfigValue`] produced by the resolver into the type the
//! caller wants. Casts are plain values implementing [`Cast`]; any
//! `Fn(ConfigValue) -> Result<U>` closure is a cast as well.
//!
//! [`Boolean`] exists because a generic "is this non-empty" conversion would
//! treat the string `"False"` as true. It looks the value up in a fixed token
//! table instead.

use crate::domain::config_value::ConfigValue;
use crate::domain::errors::{ConfigError, Result};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// Tokens accepted by the boolean cast, compared case-insensitively.
pub const BOOLEAN_TOKENS: &[(&str, bool)] = &[
    ("1", true),
    ("yes", true),
    ("true", true),
    ("on", true),
    ("0", false),
    ("no", false),
    ("false", false),
    ("off", false),
    ("", false),
];

/// Converts a token to a boolean using [`BOOLEAN_TOKENS`].
///
/// # Examples
///
/// ```
/// use decouple_cfg::domain::cast::cast_boolean;
///
/// assert_eq!(cast_boolean("Yes").unwrap(), true);
/// assert_eq!(cast_boolean("").unwrap(), false);
/// assert!(cast_boolean("False ").is_err());
/// ```
pub fn cast_boolean(value: &str) -> Result<bool> {
    let lowered = value.to_lowercase();
    BOOLEAN_TOKENS
        .iter()
        .find(|(token, _)| *token == lowered)
        .map(|(_, b)| *b)
        .ok_or_else(|| ConfigError::InvalidBoolean {
            value: value.to_string(),
        })
}

/// A transformation from a raw configuration value to a typed result.
pub trait Cast {
    /// The type produced by this cast.
    type Output;

    /// Applies the cast.
    fn cast(&self, value: ConfigValue) -> Result<Self::Output>;
}

impl<F, U> Cast for F
where
    F: Fn(ConfigValue) -> Result<U>,
{
    type Output = U;

    fn cast(&self, value: ConfigValue) -> Result<U> {
        self(value)
    }
}

/// Pins a closure's argument type so it can be passed as a cast without
/// annotating the parameter.
///
/// # Examples
///
/// ```
/// use decouple_cfg::domain::cast::{cast_fn, Cast};
/// use decouple_cfg::domain::ConfigValue;
///
/// let port = cast_fn(|v| v.as_u32("PORT"));
/// assert_eq!(port.cast(ConfigValue::from("8080")).unwrap(), 8080);
/// ```
pub fn cast_fn<F, U>(f: F) -> F
where
    F: Fn(ConfigValue) -> Result<U>,
{
    f
}

/// Returns the value unchanged. Used when the caller supplies no cast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

impl Cast for Identity {
    type Output = ConfigValue;

    fn cast(&self, value: ConfigValue) -> Result<ConfigValue> {
        Ok(value)
    }
}

/// Renders the value as a `String`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Text;

impl Cast for Text {
    type Output = String;

    fn cast(&self, value: ConfigValue) -> Result<String> {
        Ok(value.into_text())
    }
}

/// The boolean marker: casts through [`cast_boolean`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Boolean;

impl Cast for Boolean {
    type Output = bool;

    fn cast(&self, value: ConfigValue) -> Result<bool> {
        value.as_bool()
    }
}

/// Parses the trimmed text rendering of a value with `FromStr`.
///
/// # Examples
///
/// ```
/// use decouple_cfg::domain::cast::{Cast, Parse};
/// use decouple_cfg::domain::ConfigValue;
///
/// let timeout = Parse::<u64>::new().cast(ConfigValue::from("30")).unwrap();
/// assert_eq!(timeout, 30);
/// ```
pub struct Parse<T>(PhantomData<fn() -> T>);

impl<T> Parse<T> {
    /// Creates a parsing cast for `T`.
    pub fn new() -> Self {
        Parse(PhantomData)
    }
}

impl<T> Default for Parse<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Parse<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Parse<T> {}

impl<T> fmt::Debug for Parse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse<{}>", std::any::type_name::<T>())
    }
}

impl<T> Cast for Parse<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    type Output = T;

    fn cast(&self, value: ConfigValue) -> Result<T> {
        value.parse::<T>("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cast_boolean_true_tokens() {
        for token in ["1", "yes", "true", "on", "True", "ON", "yEs"] {
            assert!(cast_boolean(token).unwrap(), "{}", token);
        }
    }

    #[test]
    fn test_cast_boolean_false_tokens() {
        for token in ["0", "no", "false", "off", "", "False", "OFF"] {
            assert!(!cast_boolean(token).unwrap(), "{:?}", token);
        }
    }

    #[test]
    fn test_cast_boolean_rejects_unknown() {
        for token in ["maybe", "2", "y", " true", "nope"] {
            let err = cast_boolean(token).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidBoolean { .. }), "{}", token);
        }
    }

    #[test]
    fn test_boolean_marker_does_not_use_truthiness() {
        assert!(!Boolean.cast(ConfigValue::from("False")).unwrap());
        assert!(!Boolean.cast(ConfigValue::from("0")).unwrap());
    }

    #[test]
    fn test_boolean_on_json_values() {
        assert!(Boolean.cast(ConfigValue::from(json!(true))).unwrap());
        assert!(!Boolean.cast(ConfigValue::from(json!(false))).unwrap());
        assert!(Boolean.cast(ConfigValue::from(json!(1))).unwrap());
    }

    #[test]
    fn test_identity_returns_value_unchanged() {
        let value = ConfigValue::from(json!({"nested": [1, 2]}));
        assert_eq!(Identity.cast(value.clone()).unwrap(), value);
    }

    #[test]
    fn test_text_renders_value() {
        assert_eq!(Text.cast(ConfigValue::from("abc")).unwrap(), "abc");
        assert_eq!(Text.cast(ConfigValue::from(json!(12))).unwrap(), "12");
    }

    #[test]
    fn test_parse_cast() {
        assert_eq!(Parse::<i16>::new().cast(ConfigValue::from("-7")).unwrap(), -7);
        assert_eq!(Parse::<u16>::new().cast(ConfigValue::from(" 8000 ")).unwrap(), 8000);
        let err = Parse::<i16>::new()
            .cast(ConfigValue::from("seven"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::TypeConversionError { .. }));
    }

    #[test]
    fn test_closure_cast() {
        let upper = |v: ConfigValue| Ok::<_, ConfigError>(v.into_text().to_uppercase());
        assert_eq!(upper.cast(ConfigValue::from("abc")).unwrap(), "ABC");
    }

    #[test]
    fn test_cast_fn_infers_argument() {
        let port = cast_fn(|v| v.as_u32(""));
        assert_eq!(port.cast(ConfigValue::from("5432")).unwrap(), 5432);
    }
}
