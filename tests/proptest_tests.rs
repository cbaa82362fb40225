// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests use property-based testing to verify that the casts, the
//! `.env` parser and the resolver handle arbitrary inputs correctly.

mod common;

use common::{env_with, no_env, MockRepository};
use decouple_cfg::adapters::EnvFileParser;
use decouple_cfg::domain::cast_boolean;
use decouple_cfg::ports::ConfigParser;
use decouple_cfg::prelude::*;
use proptest::prelude::*;

const TRUE_TOKENS: [&str; 4] = ["1", "yes", "true", "on"];
const FALSE_TOKENS: [&str; 5] = ["0", "no", "false", "off", ""];

fn mixed_case(token: &str, mask: &[bool]) -> String {
    token
        .chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
        .collect()
}

// Test that ConfigKey can be created from any string
proptest! {
    #[test]
    fn test_config_key_from_any_string(s in "\\PC*") {
        let key = ConfigKey::from(s.clone());
        prop_assert_eq!(key.as_str(), s.as_str());
    }
}

// Boolean tokens are matched case-insensitively
proptest! {
    #[test]
    fn test_boolean_tokens_any_case(
        index in 0usize..4,
        mask in prop::collection::vec(any::<bool>(), 1..6),
    ) {
        prop_assert!(cast_boolean(&mixed_case(TRUE_TOKENS[index], &mask)).unwrap());
        prop_assert!(!cast_boolean(&mixed_case(FALSE_TOKENS[index], &mask)).unwrap());
    }
}

// Anything outside the token table is rejected
proptest! {
    #[test]
    fn test_boolean_rejects_other_strings(s in "[a-z2-9]{1,8}") {
        let lower = s.to_lowercase();
        prop_assume!(!TRUE_TOKENS.contains(&lower.as_str()));
        prop_assume!(!FALSE_TOKENS.contains(&lower.as_str()));
        prop_assert!(cast_boolean(&s).is_err());
    }
}

// Plain tokens survive a join and split
proptest! {
    #[test]
    fn test_csv_splits_plain_tokens(tokens in prop::collection::vec("[a-zA-Z0-9._-]{1,10}", 1..8)) {
        let joined = tokens.join(", ");
        let split = Csv::new().cast(ConfigValue::from(joined)).unwrap();
        prop_assert_eq!(split, tokens);
    }
}

// Quoted tokens keep their delimiters
proptest! {
    #[test]
    fn test_csv_keeps_quoted_delimiters(
        left in "[a-z]{1,5}",
        right in "[a-z]{1,5}",
        tail in "[a-z]{1,5}",
    ) {
        let input = format!("\"{},{}\", {}", left, right, tail);
        let split = Csv::new().cast(ConfigValue::from(input)).unwrap();
        prop_assert_eq!(split, vec![format!("{},{}", left, right), tail]);
    }
}

// Integers cast through the resolver match their source
proptest! {
    #[test]
    fn test_parse_cast_roundtrip(n in prop::num::i64::ANY) {
        let config = Config::with_environment(
            MockRepository::new().with_value("N", n.to_string()),
            no_env(),
        );
        prop_assert_eq!(config.get_cast("N", Parse::<i64>::new()).unwrap(), n);
    }
}

// A default is cast like any other value
proptest! {
    #[test]
    fn test_default_is_cast(n in prop::num::u32::ANY) {
        let config = Config::with_environment(MockRepository::new(), no_env());
        prop_assert_eq!(config.get_or_cast("N", n, Parse::<u32>::new()).unwrap(), n);
        prop_assert_eq!(config.get_or("N", n.to_string()).unwrap(), ConfigValue::from(n.to_string()));
    }
}

// The environment always wins over the repository
proptest! {
    #[test]
    fn test_environment_always_wins(
        key in "[A-Z][A-Z0-9_]{0,10}",
        env_value in "\\PC*",
        file_value in "\\PC*",
    ) {
        let config = Config::with_environment(
            MockRepository::new().with_value(key.clone(), file_value),
            env_with(&[(key.as_str(), env_value.as_str())]),
        );
        prop_assert_eq!(config.get(&key).unwrap(), ConfigValue::from(env_value));
    }
}

// .env lines parse to their trimmed value, with or without quotes
proptest! {
    #[test]
    fn test_env_file_line(
        key in "[A-Z_][A-Z0-9_]{0,10}",
        value in "[a-zA-Z0-9]{1,6}( [a-zA-Z0-9]{1,6}){0,3}",
        quote in prop::sample::select(vec!["", "'", "\""]),
    ) {
        let content = format!("  {} = {}{}{}  \n", key, quote, value, quote);
        let parsed = EnvFileParser::new().parse(&content).unwrap();
        prop_assert_eq!(parsed.get(&key), Some(&value));
    }
}

// Later assignments of the same key win
proptest! {
    #[test]
    fn test_env_file_last_assignment_wins(
        key in "[A-Z][A-Z0-9_]{0,8}",
        values in prop::collection::vec("[a-z0-9]{1,6}", 1..6),
    ) {
        let content: String = values.iter().map(|v| format!("{}={}\n", key, v)).collect();
        let parsed = EnvFileParser::new().parse(&content).unwrap();
        prop_assert_eq!(parsed.get(&key), values.last());
    }
}
