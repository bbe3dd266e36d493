//! Reusable field sanitizers
//!
//! These transform field values after validation has passed. Non-string
//! values are passed through untouched.

use serde_json::Value;
use std::sync::Arc;

/// A value transform applied to one field
pub type Sanitizer = Arc<dyn Fn(&str, Value) -> Value + Send + Sync>;

/// Sanitizer: trim whitespace from string
pub fn trim() -> Sanitizer {
    Arc::new(|_: &str, value: Value| match value {
        Value::String(s) => Value::String(s.trim().to_string()),
        other => other,
    })
}

/// Sanitizer: convert string to lowercase
pub fn lowercase() -> Sanitizer {
    Arc::new(|_: &str, value: Value| match value {
        Value::String(s) => Value::String(s.to_lowercase()),
        other => other,
    })
}
