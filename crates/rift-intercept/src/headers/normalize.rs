//! Case-insensitive header name canonicalization.

use super::map::HeaderMap;
use crate::error::HeaderError;
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Return a copy of `headers` with every field name lowercased.
///
/// Fails on the first name whose lowercase form was already written, even when
/// both values are equal. No partial map is returned.
pub fn normalize_headers(headers: &HeaderMap) -> Result<HeaderMap, HeaderError> {
    let mut lowered = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers.iter() {
        let lower = name.to_lowercase();
        if lowered.contains_key(&lower) {
            debug!(header = %lower, "Header field name conflict while lowercasing");
            return Err(HeaderError::FieldNameConflict(lower));
        }
        lowered.insert(lower, value.clone());
    }
    Ok(lowered)
}

/// Lowercase a list of header names and drop duplicates.
pub fn normalize_header_names<S: AsRef<str>>(names: &[S]) -> BTreeSet<String> {
    names.iter().map(|n| n.as_ref().to_lowercase()).collect()
}

/// Remove, in place, every header whose name equals `name` ignoring case.
///
/// A missing header is not an error.
pub fn delete_header(headers: &mut HeaderMap, name: &str) {
    let wanted = name.to_lowercase();
    headers.retain(|key, _| {
        let keep = key.to_lowercase() != wanted;
        if !keep {
            trace!(header = %key, "Deleting header");
        }
        keep
    });
}

/// Build a header map from a flat `[name, value, name, value, ...]` array.
///
/// Names are compared exactly. A name seen once maps to a scalar value; a
/// repeated name collects every value in encounter order.
pub fn headers_array_to_object<S: AsRef<str>>(raw: &[S]) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(raw.len() / 2);
    for pair in raw.chunks(2) {
        let [name, value] = pair else {
            debug!(header = %pair[0].as_ref(), "Dropping trailing header name without value");
            continue;
        };
        let (name, value) = (name.as_ref(), value.as_ref());
        match headers.get_mut(name) {
            Some(existing) => existing.push(value),
            None => {
                headers.insert(name, value);
            }
        }
    }
    headers
}
