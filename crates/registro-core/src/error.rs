//! Error types for the registro libraries.
//!
//! This module provides a unified error type with explicit variants for
//! transport, gateway and input validation errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for registro operations.
///
/// Covers all failure modes of the library crates, with explicit variants so
/// callers can handle specific cases. User-facing surfaces translate these
/// into short fixed messages; the technical detail stays in the log.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, HTTP plumbing).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Non-success responses from the remote data gateway.
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Input validation errors caught before any network call.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A non-2xx response from the gateway.
///
/// PostgREST-style gateways return a JSON error body with `code`, `message`,
/// `details` and `hint`; all of them are optional here because proxies and
/// load balancers answer with arbitrary bodies.
#[derive(Debug)]
pub struct GatewayError {
    /// HTTP status code.
    pub status: u16,
    /// Gateway error code (e.g. `PGRST103`), if present.
    pub code: Option<String>,
    /// Error message from the gateway.
    pub message: Option<String>,
    /// Additional detail from the gateway.
    pub details: Option<String>,
    /// Remediation hint from the gateway.
    pub hint: Option<String>,
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for GatewayError {}

impl GatewayError {
    /// Create a new gateway error carrying only a status code.
    pub fn from_status(status: u16) -> Self {
        Self {
            status,
            code: None,
            message: None,
            details: None,
            hint: None,
        }
    }

    /// Check if this is an authentication/authorization failure.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401 || self.status == 403
    }

    /// Check if the addressed record or collection does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status == 404 || self.status == 406
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid gateway base URL.
    #[error("invalid gateway URL '{value}': {reason}")]
    GatewayUrl { value: String, reason: String },

    /// Invalid record identifier.
    #[error("invalid record id '{value}'")]
    RecordId { value: String },

    /// Malformed email address.
    #[error("invalid email address '{value}'")]
    Email { value: String },

    /// A required field was omitted or empty.
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    /// Page size must be positive.
    #[error("page size must be greater than zero")]
    PageSize,

    /// A malformed range descriptor in a gateway response.
    #[error("invalid content range '{value}': {reason}")]
    ContentRange { value: String, reason: String },

    /// Generic invalid input.
    #[error("{message}")]
    Other { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_error_display_includes_code_and_message() {
        let err = GatewayError {
            status: 400,
            code: Some("PGRST103".into()),
            message: Some("Requested range not satisfiable".into()),
            details: None,
            hint: None,
        };
        let s = err.to_string();
        assert!(s.contains("400"));
        assert!(s.contains("PGRST103"));
        assert!(s.contains("Requested range"));
    }

    #[test]
    fn gateway_error_auth_detection() {
        assert!(GatewayError::from_status(401).is_auth_error());
        assert!(GatewayError::from_status(403).is_auth_error());
        assert!(!GatewayError::from_status(500).is_auth_error());
    }

    #[test]
    fn missing_field_names_the_field() {
        let err = InvalidInputError::MissingField { field: "name" };
        assert_eq!(err.to_string(), "missing required field 'name'");
    }
}
