//! Header map and header value types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A header value as handed over by an HTTP client.
///
/// Repeated headers (e.g. `Set-Cookie`) carry every value in encounter order.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum HeaderValue {
    Scalar(String),
    Multi(Vec<String>),
}

impl HeaderValue {
    /// Get the value when it is a single string.
    ///
    /// Some clients wrap single values in a one-element array, so a `Multi`
    /// with exactly one entry counts as single too.
    pub fn single(&self) -> Option<&str> {
        match self {
            HeaderValue::Scalar(v) => Some(v),
            HeaderValue::Multi(values) if values.len() == 1 => Some(&values[0]),
            HeaderValue::Multi(_) => None,
        }
    }

    /// Iterate over all values in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let values: &[String] = match self {
            HeaderValue::Scalar(v) => std::slice::from_ref(v),
            HeaderValue::Multi(values) => values,
        };
        values.iter().map(String::as_str)
    }

    /// Append a value, promoting a scalar to a multi value.
    pub fn push(&mut self, value: impl Into<String>) {
        match self {
            HeaderValue::Scalar(existing) => {
                let first = std::mem::take(existing);
                *self = HeaderValue::Multi(vec![first, value.into()]);
            }
            HeaderValue::Multi(values) => values.push(value.into()),
        }
    }
}

impl From<&str> for HeaderValue {
    fn from(value: &str) -> Self {
        HeaderValue::Scalar(value.to_string())
    }
}

impl From<String> for HeaderValue {
    fn from(value: String) -> Self {
        HeaderValue::Scalar(value)
    }
}

impl From<Vec<String>> for HeaderValue {
    fn from(values: Vec<String>) -> Self {
        HeaderValue::Multi(values)
    }
}

/// Insertion-ordered header map keyed by header name.
///
/// Keys are stored exactly as given; use [`normalize_headers`] to obtain a
/// map with canonical lowercase names.
///
/// [`normalize_headers`]: super::normalize_headers
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct HeaderMap {
    entries: IndexMap<String, HeaderValue>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert a header, replacing any value stored under the exact same name.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<HeaderValue>,
    ) -> Option<HeaderValue> {
        self.entries.insert(name.into(), value.into())
    }

    /// Get a header by exact name.
    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        self.entries.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut HeaderValue> {
        self.entries.get_mut(name)
    }

    /// Get the first header whose name equals `name` ignoring case.
    pub fn get_ignore_case(&self, name: &str) -> Option<&HeaderValue> {
        let wanted = name.to_lowercase();
        self.entries
            .iter()
            .find(|(key, _)| key.to_lowercase() == wanted)
            .map(|(_, value)| value)
    }

    /// Remove a header by exact name, keeping the order of the others.
    pub fn remove(&mut self, name: &str) -> Option<HeaderValue> {
        self.entries.shift_remove(name)
    }

    /// Keep only the headers for which `keep` returns true, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &HeaderValue) -> bool) {
        self.entries.retain(|name, value| keep(name, value));
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HeaderValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for HeaderMap
where
    K: Into<String>,
    V: Into<HeaderValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
