//! Error types

use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Detail key naming the form field an error belongs to
pub const FIELD_DETAIL: &str = "field";

/// Application error with structured error code and details
///
/// This is the primary error type for the admin panel, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (the offending form field, the resource, ...)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// The form field this error is attached to, if any
    pub fn field(&self) -> Option<&str> {
        self.details
            .as_ref()
            .and_then(|d| d.get(FIELD_DETAIL))
            .and_then(Value::as_str)
    }

    // ==================== Convenience constructors ====================

    /// Create an error bound to a form field
    pub fn for_field(code: ErrorCode, field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::with_message(code, msg).with_detail(FIELD_DETAIL, field.into())
    }

    /// Create a required-field error
    pub fn required(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::for_field(ErrorCode::RequiredField, field, msg)
    }

    /// Create a duplicate-name error using the code's default message
    pub fn duplicate(code: ErrorCode, field: impl Into<String>) -> Self {
        Self::for_field(code, field, code.message())
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// Create a not found error with a domain-specific code
    pub fn record_not_found(code: ErrorCode, id: impl Into<String>) -> Self {
        let id = id.into();
        Self::with_message(code, format!("{} ({})", code.message(), id)).with_detail("id", id)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
