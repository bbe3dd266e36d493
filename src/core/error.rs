//! Typed error handling for the Callto core
//!
//! # Error Categories
//!
//! - [`ValidationErrors`]: one or more field-level validation failures
//! - [`ConfigError`]: configuration loading and checking
//! - [`RequestError`]: malformed HTTP input around the validators
//!
//! [`CoreError`] wraps all of them and knows how to turn itself into an HTTP
//! response. Validation failures are rendered as
//! `400 { "errors": [...], "fields": { name: [messages] } }`.
//!
//! # Example
//!
//! ```rust,ignore
//! use callto::prelude::*;
//!
//! async fn rate_call(Json(body): Json<Value>) -> Result<StatusCode, CoreError> {
//!     RuleGroup::rating().validate(&body)?;
//!     Ok(StatusCode::NO_CONTENT)
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// The main error type for the crate
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Payload validation failed
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// HTTP/Request errors
    #[error(transparent)]
    Request(#[from] RequestError),
}

/// Error response structure for non-validation HTTP errors
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl CoreError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CoreError::Validation(_) => StatusCode::BAD_REQUEST,
            CoreError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CoreError::Request(e) => e.status_code(),
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            CoreError::Validation(_) => "VALIDATION_ERROR",
            CoreError::Config(_) => "CONFIG_ERROR",
            CoreError::Request(e) => e.error_code(),
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        match self {
            CoreError::Validation(errors) => errors.into_response(),
            other => {
                let status = other.status_code();
                if status.is_server_error() {
                    tracing::error!(error = %other, "Request failed");
                }
                (status, Json(other.to_response())).into_response()
            }
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// A single failed check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Every failed check of a validation run, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// Messages reported for one field
    pub fn for_field(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    /// Messages grouped by field, fields in first-failure order
    pub fn by_field(&self) -> IndexMap<&str, Vec<&str>> {
        let mut grouped: IndexMap<&str, Vec<&str>> = IndexMap::new();
        for error in &self.errors {
            grouped
                .entry(error.field.as_str())
                .or_default()
                .push(error.message.as_str());
        }
        grouped
    }

    /// `Ok(())` when nothing failed
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msgs: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "Validation errors: {}", msgs.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Body of a 400 validation response
///
/// `errors` keeps every failure in order; `fields` groups the same messages
/// per field for form rendering.
#[derive(Debug, Serialize)]
pub struct ValidationResponse<'a> {
    pub errors: &'a [FieldError],
    pub fields: IndexMap<&'a str, Vec<&'a str>>,
}

impl ValidationErrors {
    pub fn to_response(&self) -> ValidationResponse<'_> {
        ValidationResponse {
            errors: &self.errors,
            fields: self.by_field(),
        }
    }
}

impl IntoResponse for ValidationErrors {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self.to_response())).into_response()
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors raised while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML could not be parsed
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A value parsed but is not acceptable
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors about the shape of an HTTP request rather than its payload fields
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// No rule group with that name
    #[error("Unknown rule group: {name}")]
    UnknownRuleGroup { name: String },

    /// Body is not valid JSON
    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },

    /// Query string could not be interpreted
    #[error("Invalid query parameter '{param}': {message}")]
    InvalidQuery { param: String, message: String },
}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::UnknownRuleGroup { .. } => StatusCode::NOT_FOUND,
            RequestError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            RequestError::InvalidQuery { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::UnknownRuleGroup { .. } => "UNKNOWN_RULE_GROUP",
            RequestError::InvalidBody { .. } => "INVALID_BODY",
            RequestError::InvalidQuery { .. } => "INVALID_QUERY",
        }
    }
}

impl From<super::validation::UnknownRuleGroup> for RequestError {
    fn from(err: super::validation::UnknownRuleGroup) -> Self {
        RequestError::UnknownRuleGroup { name: err.0 }
    }
}
