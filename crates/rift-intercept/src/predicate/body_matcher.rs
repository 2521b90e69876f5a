//! Body matching configuration and evaluation.
//!
//! A body spec is a literal, a structured value, a regex or a predicate. Outside
//! multipart content, carriage returns are stripped from both sides before the
//! comparison so that CRLF and LF bodies compare equal. Nothing else about
//! whitespace is normalized.

use super::deep_equals::{decode_text, strict_deep_equals};
use crate::error::ConfigError;
use crate::headers::{HeaderMap, HeaderValue};
use crate::payload::Payload;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

const MULTIPART: &str = "multipart";
const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Body spec definition as authored in a stub file.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum BodySpecConfig {
    /// Literal body text
    Equals(String),

    /// Structured value compared with strict deep equality
    Json(Value),

    /// Regex pattern searched in the body
    Matches(String),
}

impl BodySpecConfig {
    /// Load from YAML written as a single-key map, e.g. `json: {user: alice}`.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let deserializer = serde_yaml::Deserializer::from_str(source);
        Ok(serde_yaml::with::singleton_map::deserialize(deserializer)?)
    }

    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }
}

/// Predicate over the raw request body.
pub type BodyPredicate = Arc<dyn Fn(&Payload) -> bool + Send + Sync>;

/// Compiled body spec.
#[derive(Clone)]
pub enum BodySpec {
    Literal(String),
    StructuredValue(Value),
    Pattern(Arc<Regex>),
    Predicate(BodyPredicate),
}

impl BodySpec {
    /// Compile a BodySpecConfig.
    pub fn compile(config: &BodySpecConfig) -> Result<Self, ConfigError> {
        match config {
            BodySpecConfig::Equals(text) => Ok(BodySpec::Literal(text.clone())),
            BodySpecConfig::Json(value) => Ok(BodySpec::StructuredValue(value.clone())),
            BodySpecConfig::Matches(pattern) => {
                Self::pattern(pattern).map_err(|source| ConfigError::InvalidRegex {
                    pattern: pattern.clone(),
                    source,
                })
            }
        }
    }

    pub fn literal(text: impl Into<String>) -> Self {
        BodySpec::Literal(text.into())
    }

    pub fn structured(value: impl Into<Value>) -> Self {
        BodySpec::StructuredValue(value.into())
    }

    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(BodySpec::Pattern(Arc::new(Regex::new(pattern)?)))
    }

    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&Payload) -> bool + Send + Sync + 'static,
    {
        BodySpec::Predicate(Arc::new(predicate))
    }
}

impl fmt::Debug for BodySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodySpec::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            BodySpec::StructuredValue(value) => {
                f.debug_tuple("StructuredValue").field(value).finish()
            }
            BodySpec::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
            BodySpec::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// Headers of the request currently being matched.
#[derive(Debug, Clone, Copy)]
pub struct MatchContext<'a> {
    pub headers: &'a HeaderMap,
}

impl<'a> MatchContext<'a> {
    pub fn new(headers: &'a HeaderMap) -> Self {
        Self { headers }
    }

    /// Content-Type value, looked up case-insensitively.
    ///
    /// Accepts a plain value or a one-element array as produced by some clients.
    pub fn content_type(&self) -> Option<&'a str> {
        self.headers
            .get_ignore_case("content-type")
            .and_then(HeaderValue::single)
    }
}

/// Check whether the actual request body matches a body spec.
///
/// Predicates receive the body untouched. Never fails: undecodable bodies fall
/// back to text comparison.
pub fn match_body(spec: &BodySpec, actual: &Payload, context: Option<&MatchContext<'_>>) -> bool {
    let content_type = context.and_then(MatchContext::content_type);
    let multipart = content_type.is_some_and(|ct| ct.contains(MULTIPART));
    let form = content_type.is_some_and(|ct| ct.contains(FORM_URLENCODED));

    let matched = match spec {
        BodySpec::Predicate(predicate) => return predicate(actual),
        BodySpec::Pattern(regex) => {
            let raw = actual.as_text();
            regex.is_match(&normalize_newlines(&raw, multipart))
        }
        BodySpec::Literal(text) => {
            let expected = normalize_newlines(text, multipart);
            strict_deep_equals(
                &decode_text(&expected, form),
                &decode_body(actual, multipart, form),
            )
        }
        BodySpec::StructuredValue(expected) => {
            strict_deep_equals(expected, &decode_body(actual, multipart, form))
        }
    };

    trace!(matched, multipart, form, "Body match evaluated");
    matched
}

fn decode_body(actual: &Payload, multipart: bool, form: bool) -> Value {
    let raw = actual.as_text();
    decode_text(&normalize_newlines(&raw, multipart), form)
}

/// Strip carriage returns unless the content is multipart.
fn normalize_newlines(text: &str, multipart: bool) -> Cow<'_, str> {
    if multipart || !text.contains('\r') {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.replace('\r', ""))
    }
}
