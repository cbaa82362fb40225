// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! Text-format repositories (INI, `.env`) share this interface: raw file content
//! in, flat key/value map out.

use crate::domain::Result;
use std::collections::HashMap;

/// A trait for parsing text configuration files into a flat key/value map.
///
/// # Examples
///
/// ```rust
/// use decouple_cfg::ports::ConfigParser;
/// use decouple_cfg::domain::Result;
/// use std::collections::HashMap;
///
/// struct ColonParser;
///
/// impl ConfigParser for ColonParser {
///     fn parse(&self, content: &str) -> Result<HashMap<String, String>> {
///         Ok(content
///             .lines()
///             .filter_map(|l| l.split_once(':'))
///             .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
///             .collect())
///     }
/// }
///
/// let map = ColonParser.parse("PORT: 80").unwrap();
/// assert_eq!(map.get("PORT"), Some(&"80".to_string()));
/// ```
pub trait ConfigParser {
    /// Parses configuration content into a flat key-value map.
    ///
    /// # Returns
    ///
    /// * `Ok(HashMap<String, String>)` - The parsed configuration as key-value pairs
    /// * `Err(ConfigError)` - The content is malformed
    fn parse(&self, content: &str) -> Result<HashMap<String, String>>;
}
