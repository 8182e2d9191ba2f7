//! Shared validation helpers for inbound HTTP adapters.
//!
//! Form and JSON bodies arrive as loose strings; these helpers turn them
//! into domain values and report failures as `invalid_request` errors whose
//! `details` name the offending field.

use std::fmt::Display;

use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidId,
    InvalidValue,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidId => "invalid_id",
            ErrorCode::InvalidValue => "invalid_value",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn invalid_id_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a positive integer"))
        .with_value(ErrorCode::InvalidId, value)
}

/// Report a domain validation failure against `field`.
pub(crate) fn invalid_value_error(field: FieldName, reason: impl Display) -> Error {
    ValidationError::new(field.as_str(), reason.to_string()).with_code(ErrorCode::InvalidValue)
}

/// Require a non-blank form value.
pub(crate) fn require_field(value: Option<String>, field: FieldName) -> Result<String, Error> {
    value
        .filter(|raw| !raw.trim().is_empty())
        .ok_or_else(|| missing_field_error(field))
}

/// Parse a positive integer id and wrap it in its domain newtype.
pub(crate) fn parse_id<T, E>(
    value: &str,
    field: FieldName,
    build: impl FnOnce(i64) -> Result<T, E>,
) -> Result<T, Error> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|raw| build(raw).ok())
        .ok_or_else(|| invalid_id_error(field, value))
}

/// Parse a required form field holding a positive integer id.
pub(crate) fn require_id<T, E>(
    value: Option<String>,
    field: FieldName,
    build: impl FnOnce(i64) -> Result<T, E>,
) -> Result<T, Error> {
    let raw = require_field(value, field)?;
    parse_id(&raw, field, build)
}
