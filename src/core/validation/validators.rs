//! Reusable field validators
//!
//! Every validator looks at a single field value and returns the failure
//! message, if any. Scalars are checked through their text form, the way a
//! form or query-string layer would hand them over: `null` reads as the
//! empty string, numbers and booleans are stringified, and arrays or objects
//! have no text form at all.

use regex::Regex;
use serde_json::Value;
use std::borrow::Cow;
use std::sync::{Arc, OnceLock};
use uuid::Uuid;

/// A single field check: `Err(message)` when the value fails it
pub type Validator = Arc<dyn Fn(&str, &Value) -> Result<(), String> + Send + Sync>;

/// Text form of a value, `None` for arrays and objects
pub fn text_of(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Null => Some(Cow::Borrowed("")),
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Absent, `null` and `""` all count as "no value"
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Validator: field must carry a value
pub fn required() -> Validator {
    Arc::new(|field: &str, value: &Value| {
        if is_blank(value) {
            Err(format!("{} is required", field))
        } else {
            Ok(())
        }
    })
}

/// Validator: text form must match a regular expression
pub fn matches(pattern: &'static Regex) -> Validator {
    Arc::new(move |field: &str, value: &Value| match text_of(value) {
        Some(s) if pattern.is_match(&s) => Ok(()),
        _ => Err(format!("{} has an invalid format", field)),
    })
}

/// Validator: text must be exactly `len` characters long
pub fn exact_length(len: usize) -> Validator {
    Arc::new(move |field: &str, value: &Value| match text_of(value) {
        Some(s) if char_len(&s) == len => Ok(()),
        _ => Err(format!("{} must be exactly {} characters", field, len)),
    })
}

/// Validator: text length must be within `min..=max`
pub fn length_between(min: usize, max: usize) -> Validator {
    Arc::new(move |field: &str, value: &Value| match text_of(value) {
        Some(s) if (min..=max).contains(&char_len(&s)) => Ok(()),
        _ => Err(format!(
            "{} must be between {} and {} characters",
            field, min, max
        )),
    })
}

/// Validator: text must not exceed `max` characters
pub fn max_length(max: usize) -> Validator {
    Arc::new(move |field: &str, value: &Value| match text_of(value) {
        Some(s) if char_len(&s) <= max => Ok(()),
        _ => Err(format!("{} must not exceed {} characters", field, max)),
    })
}

/// Validator: text must look like an email address
pub fn email() -> Validator {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("email pattern compiles")
    });
    Arc::new(move |field: &str, value: &Value| match text_of(value) {
        Some(s) if regex.is_match(&s) => Ok(()),
        _ => Err(format!("{} must be a valid email address", field)),
    })
}

/// Validator: text must be one of the allowed values (case-sensitive)
pub fn one_of(allowed: &'static [&'static str]) -> Validator {
    Arc::new(move |field: &str, value: &Value| match text_of(value) {
        Some(s) if allowed.iter().any(|candidate| *candidate == &*s) => Ok(()),
        _ => Err(format!(
            "{} must be one of: {}",
            field,
            allowed.join(", ")
        )),
    })
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Validator: numeric value (number or numeric string) within bounds
pub fn number_in(min: Option<f64>, max: Option<f64>) -> Validator {
    Arc::new(move |field: &str, value: &Value| {
        let in_range = as_number(value).is_some_and(|n| {
            min.is_none_or(|lo| n >= lo) && max.is_none_or(|hi| n <= hi)
        });
        if in_range {
            Ok(())
        } else {
            Err(range_message(field, "a number", min, max))
        }
    })
}

/// Validator: integer value (integer or integer string) within bounds
pub fn integer_in(min: Option<i64>, max: Option<i64>) -> Validator {
    Arc::new(move |field: &str, value: &Value| {
        let in_range = as_integer(value).is_some_and(|n| {
            min.is_none_or(|lo| n >= lo) && max.is_none_or(|hi| n <= hi)
        });
        if in_range {
            Ok(())
        } else {
            Err(range_message(field, "an integer", min, max))
        }
    })
}

fn range_message<T: std::fmt::Display>(
    field: &str,
    kind: &str,
    min: Option<T>,
    max: Option<T>,
) -> String {
    match (min, max) {
        (Some(lo), Some(hi)) => format!("{} must be {} between {} and {}", field, kind, lo, hi),
        (Some(lo), None) => format!("{} must be {} of at least {}", field, kind, lo),
        (None, Some(hi)) => format!("{} must be {} of at most {}", field, kind, hi),
        (None, None) => format!("{} must be {}", field, kind),
    }
}

/// Validator: value must be an array with at least one element
pub fn non_empty_list() -> Validator {
    Arc::new(|field: &str, value: &Value| match value {
        Value::Array(items) if !items.is_empty() => Ok(()),
        _ => Err(format!("{} must be a non-empty list", field)),
    })
}

/// Validator: text must be a hyphenated UUID
pub fn uuid() -> Validator {
    Arc::new(|field: &str, value: &Value| match text_of(value) {
        Some(s) if s.len() == 36 && Uuid::try_parse(&s).is_ok() => Ok(()),
        _ => Err(format!("{} must be a valid UUID", field)),
    })
}
