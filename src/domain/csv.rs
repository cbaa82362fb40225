// SPDX-License-Identifier: MIT OR Apache-2.0

//! List-valued casts.
//!
//! [`Csv`] splits a delimited string into tokens using POSIX shell quoting rules,
//! with the configured delimiter characters as the only separators. Each token is
//! stripped, cast, and the results are handed to a post-processing step that
//! builds the final container.

use crate::domain::cast::{Cast, Text};
use crate::domain::config_value::ConfigValue;
use crate::domain::errors::{ConfigError, Result};
use std::fmt;
use std::marker::PhantomData;

/// Characters stripped from each token by default (ASCII whitespace).
pub const DEFAULT_STRIP: &str = " \t\n\r\x0b\x0c";

/// Turns the list of cast tokens into the final container.
pub trait PostProcess<T> {
    /// The container type produced.
    type Output;

    /// Builds the container from the tokens, in input order.
    fn finish(&self, items: Vec<T>) -> Self::Output;
}

/// Keeps the tokens as an ordered `Vec`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntoVec;

impl<T> PostProcess<T> for IntoVec {
    type Output = Vec<T>;

    fn finish(&self, items: Vec<T>) -> Vec<T> {
        items
    }
}

/// Collects the tokens into any `FromIterator` container.
pub struct CollectInto<B>(PhantomData<fn() -> B>);

impl<B> fmt::Debug for CollectInto<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CollectInto<{}>", std::any::type_name::<B>())
    }
}

impl<T, B: FromIterator<T>> PostProcess<T> for CollectInto<B> {
    type Output = B;

    fn finish(&self, items: Vec<T>) -> B {
        items.into_iter().collect()
    }
}

impl<T, R, F> PostProcess<T> for F
where
    F: Fn(Vec<T>) -> R,
{
    type Output = R;

    fn finish(&self, items: Vec<T>) -> R {
        self(items)
    }
}

/// A configurable list cast.
///
/// # Examples
///
/// ```
/// use decouple_cfg::domain::cast::{Cast, Parse};
/// use decouple_cfg::domain::csv::Csv;
/// use decouple_cfg::domain::ConfigValue;
/// use std::collections::BTreeSet;
///
/// let hosts = Csv::new().cast(ConfigValue::from("a, b, \"c,d\", ")).unwrap();
/// assert_eq!(hosts, vec!["a", "b", "c,d", ""]);
///
/// let ports = Csv::new()
///     .delimiter(";")
///     .cast_with(Parse::<u16>::new())
///     .collect::<BTreeSet<_>>()
///     .cast(ConfigValue::from("443;80;443"))
///     .unwrap();
/// assert_eq!(ports.into_iter().collect::<Vec<_>>(), vec![80, 443]);
/// ```
#[derive(Clone, Debug)]
pub struct Csv<C = Text, P = IntoVec> {
    cast: C,
    delimiter: String,
    strip: String,
    post_process: P,
}

impl Csv {
    /// Creates a list cast with comma delimiter, whitespace stripping,
    /// string tokens and a `Vec` result.
    pub fn new() -> Self {
        Csv {
            cast: Text,
            delimiter: ",".to_string(),
            strip: DEFAULT_STRIP.to_string(),
            post_process: IntoVec,
        }
    }
}

impl Default for Csv {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, P> Csv<C, P> {
    /// Sets the delimiter characters. Every character in the string separates tokens.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Sets the characters trimmed from both ends of each token.
    pub fn strip(mut self, strip: impl Into<String>) -> Self {
        self.strip = strip.into();
        self
    }

    /// Sets the cast applied to each token.
    pub fn cast_with<C2: Cast>(self, cast: C2) -> Csv<C2, P> {
        Csv {
            cast,
            delimiter: self.delimiter,
            strip: self.strip,
            post_process: self.post_process,
        }
    }

    /// Sets the function that builds the final container from the cast tokens.
    pub fn post_process<R, F>(self, post_process: F) -> Csv<C, F>
    where
        C: Cast,
        F: Fn(Vec<C::Output>) -> R,
    {
        Csv {
            cast: self.cast,
            delimiter: self.delimiter,
            strip: self.strip,
            post_process,
        }
    }

    /// Collects the cast tokens into `B` (a set, a map of pairs, ...).
    pub fn collect<B>(self) -> Csv<C, CollectInto<B>> {
        Csv {
            cast: self.cast,
            delimiter: self.delimiter,
            strip: self.strip,
            post_process: CollectInto(PhantomData),
        }
    }

    /// Splits `input` into raw tokens, before stripping and casting.
    ///
    /// Runs of delimiter characters separate tokens. Single quotes preserve their
    /// content literally; inside double quotes a backslash escapes only `"` and
    /// `\`; outside quotes a backslash escapes any character. Quote characters are
    /// removed, and a quoted empty string still yields a token. An unquoted,
    /// unescaped `#` ends the current token and discards the rest of its line.
    pub fn split(&self, input: &str) -> Result<Vec<String>> {
        split_words(input, &self.delimiter)
    }

    fn trim<'a>(&self, token: &'a str) -> &'a str {
        token.trim_matches(|c| self.strip.contains(c))
    }
}

impl<C, P> Cast for Csv<C, P>
where
    C: Cast,
    P: PostProcess<C::Output>,
{
    type Output = P::Output;

    fn cast(&self, value: ConfigValue) -> Result<P::Output> {
        let text = value.to_text();
        let items = self
            .split(&text)?
            .iter()
            .map(|token| self.cast.cast(ConfigValue::new(self.trim(token))))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.post_process.finish(items))
    }
}

#[derive(Clone, Copy)]
enum State {
    Between,
    Word,
    Quoted(char),
    Escaped(Resume),
    Comment,
}

#[derive(Clone, Copy)]
enum Resume {
    Word,
    Quoted(char),
}

fn split_words(input: &str, delimiters: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut token = String::new();
    let mut quoted = false;
    let mut state = State::Between;

    for c in input.chars() {
        state = match state {
            State::Between | State::Word if delimiters.contains(c) => {
                if !token.is_empty() || quoted {
                    tokens.push(std::mem::take(&mut token));
                    quoted = false;
                }
                State::Between
            }
            State::Between | State::Word => match c {
                '#' => {
                    if !token.is_empty() || quoted {
                        tokens.push(std::mem::take(&mut token));
                        quoted = false;
                    }
                    State::Comment
                }
                '\'' | '"' => {
                    quoted = true;
                    State::Quoted(c)
                }
                '\\' => State::Escaped(Resume::Word),
                _ => {
                    token.push(c);
                    State::Word
                }
            },
            State::Quoted(q) if c == q => State::Word,
            State::Quoted('"') if c == '\\' => State::Escaped(Resume::Quoted('"')),
            State::Quoted(q) => {
                token.push(c);
                State::Quoted(q)
            }
            State::Comment if c == '\n' => State::Between,
            State::Comment => State::Comment,
            State::Escaped(resume) => {
                if let Resume::Quoted(q) = resume {
                    if c != q && c != '\\' {
                        token.push('\\');
                    }
                }
                token.push(c);
                match resume {
                    Resume::Word => State::Word,
                    Resume::Quoted(q) => State::Quoted(q),
                }
            }
        };
    }

    match state {
        State::Quoted(_) => Err(ConfigError::ParseError {
            message: format!("No closing quotation in {:?}", input),
            source: None,
        }),
        State::Escaped(_) => Err(ConfigError::ParseError {
            message: format!("No escaped character in {:?}", input),
            source: None,
        }),
        State::Between | State::Word | State::Comment => {
            if !token.is_empty() || quoted {
                tokens.push(token);
            }
            Ok(tokens)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cast::{Boolean, Parse};
    use std::collections::{BTreeSet, HashSet};

    fn csv(input: &str) -> Vec<String> {
        Csv::new().cast(ConfigValue::from(input)).unwrap()
    }

    #[test]
    fn test_quoted_delimiter_and_trailing_token() {
        assert_eq!(csv("a, b, \"c,d\", "), vec!["a", "b", "c,d", ""]);
    }

    #[test]
    fn test_empty_input() {
        assert!(csv("").is_empty());
    }

    #[test]
    fn test_single_token() {
        assert_eq!(csv("localhost"), vec!["localhost"]);
    }

    #[test]
    fn test_preserves_order() {
        assert_eq!(csv("z,y,x,w"), vec!["z", "y", "x", "w"]);
    }

    #[test]
    fn test_runs_of_delimiters_collapse() {
        assert_eq!(csv("a,,b"), vec!["a", "b"]);
        assert_eq!(csv(",a,"), vec!["a"]);
    }

    #[test]
    fn test_whitespace_only_token_is_kept_and_stripped() {
        assert_eq!(csv("a, ,b"), vec!["a", "", "b"]);
        assert_eq!(csv(" "), vec![""]);
    }

    #[test]
    fn test_quoted_empty_string() {
        assert_eq!(csv("a,\"\",b"), vec!["a", "", "b"]);
        assert_eq!(csv("''"), vec![""]);
    }

    #[test]
    fn test_single_quotes_are_literal() {
        assert_eq!(csv(r"'a\,b',c"), vec![r"a\,b", "c"]);
    }

    #[test]
    fn test_escapes() {
        assert_eq!(csv(r"a\,b,c"), vec!["a,b", "c"]);
        assert_eq!(csv(r#""say \"hi\"""#), vec![r#"say "hi""#]);
        assert_eq!(csv(r#""C:\path""#), vec![r"C:\path"]);
    }

    #[test]
    fn test_quotes_join_adjacent_text() {
        assert_eq!(csv("pre\"fix,ed\"post"), vec!["prefix,edpost"]);
    }

    #[test]
    fn test_hash_starts_a_comment() {
        assert!(csv("#fff,#000").is_empty());
        assert_eq!(csv("a,b#c,d"), vec!["a", "b"]);
        assert_eq!(csv("a,''#c"), vec!["a", ""]);
    }

    #[test]
    fn test_comment_ends_at_newline() {
        assert_eq!(csv("a # first\nb,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_quoted_or_escaped_hash_is_literal() {
        assert_eq!(csv("'#fff',x"), vec!["#fff", "x"]);
        assert_eq!(csv(r##""#000",\#abc"##), vec!["#000", "#abc"]);
    }

    #[test]
    fn test_hash_delimiter_is_not_a_comment() {
        let result = Csv::new()
            .delimiter("#")
            .cast(ConfigValue::from("a#b"))
            .unwrap();
        assert_eq!(result, vec!["a", "b"]);
    }

    #[test]
    fn test_unclosed_quote_fails() {
        let err = Csv::new().cast(ConfigValue::from("a,\"b")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_dangling_escape_fails() {
        let err = Csv::new().cast(ConfigValue::from("a\\")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_custom_delimiter_set() {
        let result = Csv::new()
            .delimiter(";|")
            .cast(ConfigValue::from("a;b|c"))
            .unwrap();
        assert_eq!(result, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_custom_strip() {
        let result = Csv::new()
            .strip(" *")
            .cast(ConfigValue::from("*a*, **b"))
            .unwrap();
        assert_eq!(result, vec!["a", "b"]);
    }

    #[test]
    fn test_token_cast() {
        let result = Csv::new()
            .cast_with(Parse::<i32>::new())
            .cast(ConfigValue::from("1, 2, -3"))
            .unwrap();
        assert_eq!(result, vec![1, 2, -3]);

        let flags = Csv::new()
            .cast_with(Boolean)
            .cast(ConfigValue::from("on,off,True"))
            .unwrap();
        assert_eq!(flags, vec![true, false, true]);
    }

    #[test]
    fn test_token_cast_failure_propagates() {
        let err = Csv::new()
            .cast_with(Boolean)
            .cast(ConfigValue::from("on,maybe"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBoolean { .. }));
    }

    #[test]
    fn test_collect_into_set() {
        let set = Csv::new()
            .collect::<HashSet<_>>()
            .cast(ConfigValue::from("a,b,a"))
            .unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("a"));

        let ordered = Csv::new()
            .collect::<BTreeSet<_>>()
            .cast(ConfigValue::from("c,a,b"))
            .unwrap();
        assert_eq!(ordered.into_iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_post_process_closure() {
        let pair = Csv::new()
            .post_process(|items| (items[0].clone(), items.len()))
            .cast(ConfigValue::from("first,second"))
            .unwrap();
        assert_eq!(pair, ("first".to_string(), 2));
    }

    #[test]
    fn test_split_exposes_raw_tokens() {
        let tokens = Csv::new().split(" a , b").unwrap();
        assert_eq!(tokens, vec![" a ", " b"]);
    }
}
