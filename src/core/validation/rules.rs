//! Field rules and rule groups
//!
//! A [`RuleGroup`] is an ordered list of [`FieldRule`]s. Validation never
//! stops early: every check of every field runs, and each failing check
//! contributes exactly one [`FieldError`].

use super::sanitizers::Sanitizer;
use super::validators::{self, Validator};
use crate::core::error::{FieldError, ValidationErrors};
use serde_json::Value;

static NULL: Value = Value::Null;

/// Whether a field must be present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Missing values fail the `required` check and every other check still runs
    Required,
    /// Missing values skip all checks
    Optional,
}

#[derive(Clone)]
struct Check {
    validator: Validator,
    message: Option<String>,
}

/// Checks and sanitizers declared for a single payload field
#[derive(Clone)]
pub struct FieldRule {
    field: String,
    presence: Presence,
    checks: Vec<Check>,
    sanitizers: Vec<Sanitizer>,
}

impl FieldRule {
    /// A field that must carry a value; starts with the `required` check
    pub fn required(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            presence: Presence::Required,
            checks: vec![Check {
                validator: validators::required(),
                message: None,
            }],
            sanitizers: Vec::new(),
        }
    }

    /// A field whose checks only run when a value is present
    pub fn optional(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            presence: Presence::Optional,
            checks: Vec::new(),
            sanitizers: Vec::new(),
        }
    }

    /// Append a check
    pub fn check(mut self, validator: Validator) -> Self {
        self.checks.push(Check {
            validator,
            message: None,
        });
        self
    }

    /// Replace the message of the most recently added check
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        if let Some(last) = self.checks.last_mut() {
            last.message = Some(message.into());
        }
        self
    }

    /// Append a sanitizer, applied by [`RuleGroup::sanitize`]
    pub fn sanitize(mut self, sanitizer: Sanitizer) -> Self {
        self.sanitizers.push(sanitizer);
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn presence(&self) -> Presence {
        self.presence
    }

    pub fn check_count(&self) -> usize {
        self.checks.len()
    }

    fn value_in<'a>(&self, payload: &'a Value) -> &'a Value {
        payload.get(&self.field).unwrap_or(&NULL)
    }

    fn collect_errors(&self, payload: &Value, errors: &mut ValidationErrors) {
        let value = self.value_in(payload);
        if self.presence == Presence::Optional && validators::is_blank(value) {
            return;
        }

        for check in &self.checks {
            if let Err(default_message) = (check.validator)(&self.field, value) {
                errors.push(FieldError {
                    field: self.field.clone(),
                    message: check.message.clone().unwrap_or(default_message),
                });
            }
        }
    }
}

impl std::fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRule")
            .field("field", &self.field)
            .field("presence", &self.presence)
            .field("checks", &self.checks.len())
            .field("sanitizers", &self.sanitizers.len())
            .finish()
    }
}

/// A named set of field rules for one kind of request payload
#[derive(Debug, Clone)]
pub struct RuleGroup {
    name: String,
    fields: Vec<FieldRule>,
}

impl RuleGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field rule; declaration order is error order
    pub fn field(mut self, rule: FieldRule) -> Self {
        self.fields.push(rule);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldRule] {
        &self.fields
    }

    /// Validate a payload against every rule of the group
    ///
    /// A payload that is not a JSON object behaves like an empty object.
    pub fn validate(&self, payload: &Value) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for rule in &self.fields {
            rule.collect_errors(payload, &mut errors);
        }

        tracing::debug!(
            group = %self.name,
            error_count = errors.len(),
            "Validated payload"
        );

        errors.into_result()
    }

    /// Return a copy of the payload with the group's sanitizers applied
    ///
    /// Fields that are absent stay absent.
    pub fn sanitize(&self, payload: &Value) -> Value {
        let mut sanitized = payload.clone();
        let Some(object) = sanitized.as_object_mut() else {
            return sanitized;
        };

        for rule in self.fields.iter().filter(|r| !r.sanitizers.is_empty()) {
            if let Some(slot) = object.get_mut(&rule.field) {
                let mut value = slot.take();
                for sanitizer in &rule.sanitizers {
                    value = sanitizer(&rule.field, value);
                }
                *slot = value;
            }
        }

        sanitized
    }

    /// Sanitize, then validate the sanitized payload and return it
    ///
    /// Rules see the value handlers will receive, so trimming a field below
    /// its minimum length or down to `""` fails validation.
    pub fn validate_and_sanitize(&self, payload: &Value) -> Result<Value, ValidationErrors> {
        let sanitized = self.sanitize(payload);
        self.validate(&sanitized)?;
        Ok(sanitized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::sanitizers;
    use serde_json::json;

    fn sample_group() -> RuleGroup {
        RuleGroup::new("sample")
            .field(
                FieldRule::required("code")
                    .with_message("Code is required")
                    .check(validators::exact_length(4))
                    .with_message("Code must be 4 characters"),
            )
            .field(
                FieldRule::optional("nickname")
                    .check(validators::length_between(2, 5))
                    .sanitize(sanitizers::trim()),
            )
    }

    #[test]
    fn test_missing_required_field_fails_every_check() {
        let errors = sample_group().validate(&json!({})).unwrap_err();

        let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["Code is required", "Code must be 4 characters"]);
    }

    #[test]
    fn test_optional_field_skipped_when_blank() {
        let group = sample_group();
        assert!(group.validate(&json!({"code": "abcd"})).is_ok());
        assert!(group.validate(&json!({"code": "abcd", "nickname": ""})).is_ok());
        assert!(group.validate(&json!({"code": "abcd", "nickname": null})).is_ok());
    }

    #[test]
    fn test_optional_field_checked_when_present() {
        let errors = sample_group()
            .validate(&json!({"code": "abcd", "nickname": "x"}))
            .unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors[0].field, "nickname");
        assert!(errors.errors[0].message.contains("between 2 and 5"));
    }

    #[test]
    fn test_errors_follow_declaration_order() {
        let errors = sample_group()
            .validate(&json!({"code": "toolong", "nickname": "waytoolong"}))
            .unwrap_err();

        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["code", "nickname"]);
    }

    #[test]
    fn test_non_object_payload_is_empty() {
        let errors = sample_group().validate(&json!("nope")).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_validate_does_not_mutate_payload() {
        let payload = json!({"code": "abcd", "nickname": "  ab  "});
        let before = payload.clone();
        let _ = sample_group().validate(&payload);
        assert_eq!(payload, before);
    }

    #[test]
    fn test_sanitize_returns_new_payload() {
        let payload = json!({"code": "abcd", "nickname": "  ab  "});
        let sanitized = sample_group().sanitize(&payload);

        assert_eq!(sanitized["nickname"], "ab");
        assert_eq!(payload["nickname"], "  ab  ");
    }

    #[test]
    fn test_sanitize_leaves_absent_fields_absent() {
        let sanitized = sample_group().sanitize(&json!({"code": "abcd"}));
        assert!(sanitized.get("nickname").is_none());
    }

    #[test]
    fn test_validate_and_sanitize() {
        let group = sample_group();
        let ok = group
            .validate_and_sanitize(&json!({"code": "abcd", "nickname": " abc "}))
            .unwrap();
        assert_eq!(ok["nickname"], "abc");

        assert!(group.validate_and_sanitize(&json!({"code": "a"})).is_err());
    }

    #[test]
    fn test_validate_and_sanitize_checks_sanitized_value() {
        let group = sample_group();

        let errors = group
            .validate_and_sanitize(&json!({"code": "abcd", "nickname": " a "}))
            .unwrap_err();
        assert_eq!(errors.for_field("nickname").len(), 1);

        let padded = json!({"code": "abcd", "nickname": "  abcde  "});
        assert!(group.validate(&padded).is_err());
        assert_eq!(
            group.validate_and_sanitize(&padded).unwrap()["nickname"],
            "abcde"
        );
    }

    #[test]
    fn test_with_message_without_checks_is_noop() {
        let rule = FieldRule::optional("x").with_message("ignored");
        assert_eq!(rule.check_count(), 0);
        assert_eq!(rule.presence(), Presence::Optional);
    }
}
