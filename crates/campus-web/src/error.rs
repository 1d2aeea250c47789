//! API error types for campus-web.
//!
//! The mock API boundary returns these so pages can branch on the failure
//! class the same way they would against a real backend.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by the API boundary.
///
/// In debug builds, internal error details are exposed for easier debugging.
/// In release builds, internal errors show a generic message and log the details.
#[derive(Error, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum ApiError {
    /// Input failed validation
    #[error("validation failed: {message}")]
    Validation { message: String },

    /// Authentication required or credentials rejected
    #[error("invalid email or password")]
    Unauthorized,

    /// Authenticated but not allowed
    #[error("forbidden: {message}")]
    Forbidden { message: String },

    /// Resource doesn't exist
    #[error("{kind} '{identifier}' not found")]
    NotFound { kind: String, identifier: String },

    /// Resource already exists
    #[error("{kind} '{identifier}' already exists")]
    AlreadyExists { kind: String, identifier: String },

    /// Unexpected error
    #[error("{}", internal_display_message(.message))]
    Internal { message: String },
}

/// Returns the display message for internal errors based on build mode.
fn internal_display_message(msg: &str) -> String {
    if cfg!(debug_assertions) {
        format!("internal error: {}", msg)
    } else {
        "an internal error occurred".to_string()
    }
}

impl ApiError {
    /// Create an internal error, logging in release mode.
    pub fn internal(err: impl std::fmt::Display) -> Self {
        let message = err.to_string();
        if !cfg!(debug_assertions) {
            tracing::error!(error = %message, "internal api error");
        }
        Self::Internal { message }
    }

    /// Convenience constructor for validation errors.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation { message: message.into() }
    }

    /// Convenience constructor for forbidden errors.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden { message: message.into() }
    }

    /// Convenience constructor for not found errors.
    pub fn not_found(kind: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            kind: kind.into(),
            identifier: identifier.into(),
        }
    }

    /// Convenience constructor for already exists errors.
    pub fn already_exists(kind: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::AlreadyExists {
            kind: kind.into(),
            identifier: identifier.into(),
        }
    }

    /// Whether this error is the not-found class, regardless of resource kind.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}
