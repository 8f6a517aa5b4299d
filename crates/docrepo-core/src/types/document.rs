//! Documents are the JSON objects a store persists for an entity.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Number, Value};

use crate::error::AppError;
use crate::result::AppResult;

/// A stored document: a JSON object keyed by field name.
pub type Document = serde_json::Map<String, Value>;

/// Serialize an entity into a [`Document`].
///
/// Fails with a serialization error if the entity does not serialize to a
/// JSON object.
pub fn to_document<T: Serialize>(entity: &T) -> AppResult<Document> {
    match serde_json::to_value(entity)? {
        Value::Object(map) => Ok(map),
        other => Err(AppError::serialization(format!(
            "Entity must serialize to a JSON object, got {}",
            json_type_name(&other)
        ))),
    }
}

/// Deserialize an entity from a stored [`Document`].
pub fn from_document<T: DeserializeOwned>(document: Document) -> AppResult<T> {
    Ok(serde_json::from_value(Value::Object(document))?)
}

/// Whether a field value counts as absent for required/unique checks.
///
/// `null`, empty strings, empty arrays, and empty objects are empty.
/// `false` and `0` are present values.
pub fn is_empty_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(map)) => map.is_empty(),
        Some(Value::Bool(_)) | Some(Value::Number(_)) => false,
    }
}

/// JSON equality with numbers compared by value, so `1` equals `1.0`.
///
/// Arrays must match element by element and objects key by key; neither
/// matches a partial structure.
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a
                    .iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| values_equal(x, y)))
        }
        _ => left == right,
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    a.as_f64() == b.as_f64()
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
