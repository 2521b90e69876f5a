//! Strict structural equality and body decoding.
//!
//! Unlike a partial JSON match, strict deep equality requires the same shape
//! and type at every level: no extra or missing keys, no string/number
//! coercion.

use serde_json::{Map, Number, Value};
use tracing::trace;

/// Strict deep equality between two structured values.
///
/// Numbers compare by numeric value, so `1` equals `1.0`.
pub fn strict_deep_equals(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| strict_deep_equals(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter().all(|(key, expected_val)| {
                    b.get(key)
                        .is_some_and(|actual_val| strict_deep_equals(expected_val, actual_val))
                })
        }
        _ => false,
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Decode a textual body side into a comparable value.
///
/// Form bodies decode into an object of strings. Anything else is tried as
/// JSON and falls back to the text itself.
pub fn decode_text(text: &str, form: bool) -> Value {
    if form {
        return parse_form_body(text);
    }
    match serde_json::from_str::<Value>(text) {
        Ok(value) => value,
        Err(e) => {
            trace!(error = %e, "Body is not JSON, comparing as text");
            Value::String(text.to_string())
        }
    }
}

/// Parse an `application/x-www-form-urlencoded` body.
///
/// Repeated keys collect their values into an array in encounter order.
pub fn parse_form_body(body: &str) -> Value {
    let mut fields = Map::new();
    for pair in body.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_component(key);
        let value = Value::String(decode_component(value));
        match fields.get_mut(&key) {
            Some(Value::Array(values)) => values.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                fields.insert(key, value);
            }
        }
    }
    Value::Object(fields)
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strict_equals_no_coercion() {
        assert!(!strict_deep_equals(&json!({"number": 1}), &json!({"number": "1"})));
        assert!(!strict_deep_equals(&json!(true), &json!("true")));
        assert!(!strict_deep_equals(&json!(null), &json!("")));
        assert!(strict_deep_equals(&json!({"number": 1}), &json!({"number": 1})));
    }

    #[test]
    fn test_strict_equals_numeric_value() {
        assert!(strict_deep_equals(&json!(1), &json!(1.0)));
        assert!(!strict_deep_equals(&json!(1), &json!(1.5)));
        assert!(strict_deep_equals(&json!(-3), &json!(-3)));
        assert!(strict_deep_equals(&json!(u64::MAX), &json!(u64::MAX)));
    }

    #[test]
    fn test_strict_equals_objects_exact_keys() {
        let expected = json!({"name": "John", "age": 30});
        assert!(strict_deep_equals(&expected, &json!({"age": 30, "name": "John"})));
        assert!(!strict_deep_equals(&expected, &json!({"name": "John"})));
        assert!(!strict_deep_equals(
            &expected,
            &json!({"name": "John", "age": 30, "city": "NYC"})
        ));
    }

    #[test]
    fn test_strict_equals_arrays_ordered() {
        assert!(strict_deep_equals(&json!([1, [2, 3]]), &json!([1, [2, 3]])));
        assert!(!strict_deep_equals(&json!([1, 2]), &json!([2, 1])));
        assert!(!strict_deep_equals(&json!([1, 2]), &json!([1, 2, 3])));
    }

    #[test]
    fn test_decode_text() {
        assert_eq!(decode_text(r#"{"a": 1}"#, false), json!({"a": 1}));
        assert_eq!(decode_text("not json", false), json!("not json"));
        assert_eq!(decode_text("", false), json!(""));
    }

    #[test]
    fn test_parse_form_body() {
        assert_eq!(
            parse_form_body("name=hello%20world&tag=a&tag=b&tag=c&q=x+y&flag"),
            json!({"name": "hello world", "tag": ["a", "b", "c"], "q": "x y", "flag": ""})
        );
        assert_eq!(parse_form_body(""), json!({}));
    }
}
