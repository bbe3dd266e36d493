//! Core types: user records, validation rules and errors

pub mod error;
pub mod user;
pub mod validation;

pub use error::{ConfigError, CoreError, FieldError, RequestError, ValidationErrors};
pub use user::{AccountType, UserRecord};
pub use validation::{FieldRule, RuleGroup, RuleGroupName};
