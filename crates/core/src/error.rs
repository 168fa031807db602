//! Error types for the salon admin console
//!
//! This module provides the failure taxonomy shared by the resource client
//! and the page lifecycle: network failures, field-level validation
//! rejections, missing resources, server faults, and unparseable responses.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// FieldError
// ============================================================================

/// A validation failure attached to a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending field.
    pub field: String,

    /// Human-readable message describing the problem.
    pub message: String,
}

impl FieldError {
    /// Create a new field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

// ============================================================================
// ClientError
// ============================================================================

/// Failure kinds surfaced by a resource client.
///
/// The client surfaces the raw kind; the page layer maps every kind to a
/// single user-facing message per operation. Raw server text never reaches
/// the end user.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// The request never reached the server (DNS, refused connection,
    /// timeout).
    #[error("request failed: {0}")]
    Network(String),

    /// The server rejected the payload with field-level detail (4xx).
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// The target entity does not exist (404 on update/delete).
    #[error("{resource} '{id}' not found")]
    NotFound {
        /// Resource key (e.g. `banner`).
        resource: String,
        /// The missing entity id.
        id: String,
    },

    /// The server failed (5xx) or returned an unexpected status.
    #[error("server error ({status}): {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body, if any.
        message: String,
    },

    /// The response body could not be deserialised.
    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl ClientError {
    /// Create a network error.
    pub fn network(msg: impl Into<String>) -> Self {
        ClientError::Network(msg.into())
    }

    /// Create a validation error from field errors.
    pub fn validation(errors: Vec<FieldError>) -> Self {
        ClientError::Validation(errors)
    }

    /// Create a validation error for a single field.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        ClientError::Validation(vec![FieldError::new(field, message)])
    }

    /// Create a not-found error.
    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        ClientError::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// Create a server error.
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        ClientError::Server {
            status,
            message: message.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        ClientError::Parse(msg.into())
    }

    /// Whether the request never reached the server.
    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }

    /// Whether this is a field-level validation rejection.
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }

    /// Whether the target entity was missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound { .. })
    }

    /// Whether the server itself failed.
    pub fn is_server(&self) -> bool {
        matches!(self, ClientError::Server { .. })
    }

    /// The field errors carried by a validation rejection, if any.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ClientError::Validation(errors) => errors,
            _ => &[],
        }
    }
}

/// Result type alias using [`ClientError`].
pub type ClientResult<T> = Result<T, ClientError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error() {
        let err = ClientError::network("connection refused");
        assert!(err.is_network());
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "request failed: connection refused");
    }

    #[test]
    fn test_validation_error() {
        let err = ClientError::validation(vec![
            FieldError::new("email", "must be a valid email address"),
            FieldError::new("password", "too short"),
        ]);
        assert!(err.is_validation());
        assert_eq!(err.field_errors().len(), 2);
        assert_eq!(err.to_string(), "validation failed on 2 field(s)");
    }

    #[test]
    fn test_single_field_shorthand() {
        let err = ClientError::field("rating", "must be between 1 and 5");
        assert!(err.is_validation());
        assert_eq!(err.field_errors()[0].field, "rating");
    }

    #[test]
    fn test_not_found_error() {
        let err = ClientError::not_found("banner", "42");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "banner '42' not found");
    }

    #[test]
    fn test_server_error() {
        let err = ClientError::server(503, "upstream unavailable");
        assert!(err.is_server());
        assert_eq!(err.to_string(), "server error (503): upstream unavailable");
    }

    #[test]
    fn test_field_errors_empty_for_other_kinds() {
        assert!(ClientError::parse("bad json").field_errors().is_empty());
        assert!(ClientError::network("oops").field_errors().is_empty());
    }

    #[test]
    fn test_field_error_display() {
        let err = FieldError::new("heading", "is required");
        assert_eq!(err.to_string(), "heading: is required");
    }
}
