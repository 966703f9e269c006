//! Dotted-path resolution over semi-structured attribute documents.
//!
//! Attribute documents are plain [`serde_json::Value`] trees. Resolution is
//! total: it never errors, and it short-circuits to "absent" the moment a
//! path segment is missing or the intermediate value is falsy. A `null` leaf
//! is also absent, so existence checks treat it the same as a missing field.

use serde_json::Value;

/// Resolve `path` (e.g. `"size.value"`) against `doc`.
///
/// Returns `None` when any segment is missing, when an intermediate value is
/// falsy, or when the leaf is `null`.
pub fn resolve<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = doc;
    for segment in path.split('.') {
        if is_falsy(current) {
            return None;
        }
        current = current.get(segment)?;
    }
    if current.is_null() { None } else { Some(current) }
}

/// Falsiness in the sense of the source data model: `null`, `false`, `0`
/// and the empty string. Arrays and objects are always truthy.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Canonical text form of a scalar value, used by the textual operators.
///
/// Numbers and booleans compare by their canonical spelling, so `100`
/// equals `"100"`. Arrays and objects have no text form.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Numeric reading of a scalar value, used by the ordering operators.
pub fn value_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
