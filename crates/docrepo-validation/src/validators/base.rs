use chrono::DateTime;
use serde_json::Value;
use uuid::Uuid;

use crate::result::ValidationResult;

/// Accept every value.
pub fn accept_any(_value: &Value) -> ValidationResult {
    ValidationResult::ok()
}

/// Require a string (or null).
pub fn validate_string(value: &Value) -> ValidationResult {
    match value {
        Value::Null | Value::String(_) => ValidationResult::ok(),
        _ => ValidationResult::error("must be a string"),
    }
}

/// Require a hyphenated UUID string (or null).
pub fn validate_uuid(value: &Value) -> ValidationResult {
    match value {
        Value::Null => ValidationResult::ok(),
        Value::String(s) if s.is_empty() => ValidationResult::ok(),
        Value::String(s) => match Uuid::parse_str(s) {
            Ok(_) => ValidationResult::ok(),
            Err(_) => ValidationResult::error(format!("'{s}' is not a valid id")),
        },
        _ => ValidationResult::error("must be an id string"),
    }
}

/// Require an RFC 3339 timestamp string (or null).
pub fn validate_date(value: &Value) -> ValidationResult {
    match value {
        Value::Null => ValidationResult::ok(),
        Value::String(s) if s.is_empty() => ValidationResult::ok(),
        Value::String(s) => match DateTime::parse_from_rfc3339(s) {
            Ok(_) => ValidationResult::ok(),
            Err(_) => ValidationResult::error(format!("'{s}' is not an RFC 3339 timestamp")),
        },
        _ => ValidationResult::error("must be a timestamp string"),
    }
}

/// Require a boolean (or null).
pub fn validate_boolean(value: &Value) -> ValidationResult {
    match value {
        Value::Null | Value::Bool(_) => ValidationResult::ok(),
        _ => ValidationResult::error("must be a boolean"),
    }
}
