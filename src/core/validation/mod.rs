//! Validation and sanitizing of request payloads
//!
//! Payloads are validated against declarative [`RuleGroup`]s before they
//! reach handlers. Every check runs and every failure is reported; a failed
//! validation is an ordinary return value, never a panic.

pub mod extractor;
pub mod groups;
pub mod rules;
pub mod sanitizers;
pub mod validators;

pub use extractor::{PayloadSchema, ValidatedJson};
pub use groups::{RuleGroupName, UnknownRuleGroup};
pub use rules::{FieldRule, Presence, RuleGroup};

use crate::core::error::ValidationErrors;
use serde_json::Value;

/// Validate a payload against one of the named rule groups
pub fn validate(group: RuleGroupName, payload: &Value) -> Result<(), ValidationErrors> {
    group.rules().validate(payload)
}
