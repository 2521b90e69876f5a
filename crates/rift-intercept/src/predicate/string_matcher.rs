//! Literal-or-regex value matching.
//!
//! Used by the registration layer for header, path and query comparisons.

use super::deep_equals::strict_deep_equals;
use crate::error::ConfigError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Authoring form of a literal-or-regex pattern.
///
/// `{"matches": "<regex>"}` selects a regex; any other JSON value is a literal.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum StringOrPatternConfig {
    Matches { matches: String },
    Literal(Value),
}

/// Compiled literal-or-regex pattern.
#[derive(Debug, Clone)]
pub enum StringOrPattern {
    /// Strict equality, no cross-type coercion; numbers compare by value
    Literal(Value),
    /// Regex search against the target's string form
    Regex(Arc<Regex>),
}

impl StringOrPattern {
    pub fn literal(value: impl Into<Value>) -> Self {
        StringOrPattern::Literal(value.into())
    }

    pub fn regex(pattern: &str) -> Result<Self, regex::Error> {
        Ok(StringOrPattern::Regex(Arc::new(Regex::new(pattern)?)))
    }

    /// Compile a pattern definition.
    pub fn compile(config: &StringOrPatternConfig) -> Result<Self, ConfigError> {
        match config {
            StringOrPatternConfig::Literal(value) => Ok(StringOrPattern::Literal(value.clone())),
            StringOrPatternConfig::Matches { matches } => {
                Self::regex(matches).map_err(|source| ConfigError::InvalidRegex {
                    pattern: matches.clone(),
                    source,
                })
            }
        }
    }

    /// Check a target value against this pattern. An absent target never matches.
    pub fn matches(&self, target: Option<&Value>) -> bool {
        match (self, target) {
            (_, None) => false,
            (StringOrPattern::Regex(regex), Some(Value::String(s))) => regex.is_match(s),
            (StringOrPattern::Regex(regex), Some(other)) => regex.is_match(&other.to_string()),
            (StringOrPattern::Literal(expected), Some(actual)) => {
                strict_deep_equals(expected, actual)
            }
        }
    }
}

/// Match `target` against an optional pattern.
///
/// A missing pattern never matches, whatever the target.
pub fn match_string_or_pattern(pattern: Option<&StringOrPattern>, target: Option<&Value>) -> bool {
    pattern.is_some_and(|p| p.matches(target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_literal_string() {
        let pattern = StringOrPattern::literal("to match");
        assert!(match_string_or_pattern(Some(&pattern), Some(&json!("to match"))));
        assert!(!match_string_or_pattern(Some(&pattern), Some(&json!("not to match"))));
    }

    #[test]
    fn test_literal_number_is_strict() {
        let pattern = StringOrPattern::literal(123);
        assert!(match_string_or_pattern(Some(&pattern), Some(&json!(123))));
        assert!(!match_string_or_pattern(Some(&pattern), Some(&json!("123"))));
    }

    #[test]
    fn test_literal_number_compares_by_value() {
        let pattern = StringOrPattern::literal(json!(1.0));
        assert!(match_string_or_pattern(Some(&pattern), Some(&json!(1))));
        assert!(!match_string_or_pattern(Some(&pattern), Some(&json!(1.5))));
        assert!(!match_string_or_pattern(Some(&pattern), Some(&json!("1"))));
    }

    #[test]
    fn test_missing_pattern_never_matches() {
        assert!(!match_string_or_pattern(None, Some(&json!("to not match"))));
        assert!(!match_string_or_pattern(None, None));
    }

    #[test]
    fn test_missing_target() {
        let regex = StringOrPattern::regex("not").unwrap();
        assert!(!match_string_or_pattern(Some(&regex), None));

        let literal = StringOrPattern::literal("x");
        assert!(!match_string_or_pattern(Some(&literal), None));
    }

    #[test]
    fn test_regex() {
        let pattern = StringOrPattern::regex("match").unwrap();
        assert!(match_string_or_pattern(Some(&pattern), Some(&json!("to match"))));

        let pattern = StringOrPattern::regex("not").unwrap();
        assert!(!match_string_or_pattern(Some(&pattern), Some(&json!("to match"))));
    }

    #[test]
    fn test_regex_coerces_target_to_string() {
        let pattern = StringOrPattern::regex(r"^\d{3}$").unwrap();
        assert!(pattern.matches(Some(&json!(123))));
        assert!(!pattern.matches(Some(&json!(1234))));
    }

    #[test]
    fn test_compile_from_config() {
        let config: StringOrPatternConfig =
            serde_json::from_str(r#"{"matches": "^/api/v\\d+"}"#).unwrap();
        let pattern = StringOrPattern::compile(&config).unwrap();
        assert!(pattern.matches(Some(&json!("/api/v2/users"))));

        let config: StringOrPatternConfig = serde_json::from_str("42").unwrap();
        assert_eq!(config, StringOrPatternConfig::Literal(json!(42)));
        let pattern = StringOrPattern::compile(&config).unwrap();
        assert!(pattern.matches(Some(&json!(42))));
    }

    #[test]
    fn test_compile_invalid_regex() {
        let config = StringOrPatternConfig::Matches {
            matches: "(unclosed".to_string(),
        };
        let err = StringOrPattern::compile(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRegex { .. }));
    }
}
