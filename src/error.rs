//! Application error types.
//!
//! Every failure of one relay request maps to exactly one variant, so the
//! HTTP boundary can translate it into a status code and a polling client
//! can tell a bad request from an unreachable or rejecting upstream.

use serde::Serialize;
use thiserror::Error;

/// Errors produced while relaying one review-color lookup.
///
/// All variants serialize to a structured JSON object for logging and
/// diagnostics. None of them ever carries the OAuth token.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum AppError {
    /// Caller supplied an empty or otherwise unusable input.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        field: Option<String>,
    },

    /// GitHub responded with a non-success status (bad token, rate limit, ...).
    #[error("GitHub API error: {message}")]
    GitHubApi {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        status_code: Option<u16>,
    },

    /// Network-level failure reaching GitHub.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The outbound call exceeded the configured timeout.
    #[error("Timeout: {message}")]
    Timeout { message: String },

    /// GitHub answered 2xx but the body was not the expected shape.
    #[error("Malformed upstream response: {message}")]
    MalformedResponse { message: String },

    /// Internal application error.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            field: None,
        }
    }

    /// Create an invalid input error with field name.
    pub fn invalid_input_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a GitHub API error without a status code.
    pub fn github_api(message: impl Into<String>) -> Self {
        Self::GitHubApi {
            message: message.into(),
            status_code: None,
        }
    }

    /// Create a GitHub API error with the upstream status code.
    pub fn github_api_status(message: impl Into<String>, status_code: u16) -> Self {
        Self::GitHubApi {
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a timeout error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Create a malformed response error.
    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the upstream status code if this is a GitHub API error.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::GitHubApi { status_code, .. } => *status_code,
            _ => None,
        }
    }
}

// Conversions from common error types

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::timeout("Request to GitHub timed out")
        } else if err.is_connect() {
            Self::network("Failed to connect to GitHub")
        } else if err.is_decode() {
            Self::malformed_response(err.to_string())
        } else {
            Self::network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed_response(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = AppError::network("connection refused");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"type\":\"Network\""));
        assert!(json.contains("connection refused"));
    }

    #[test]
    fn test_github_api_error_with_status() {
        let err = AppError::github_api_status("Bad credentials", 401);
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"status_code\":401"));
        assert_eq!(err.upstream_status(), Some(401));
    }

    #[test]
    fn test_optional_fields_not_serialized() {
        let err = AppError::invalid_input("empty username");
        let json = serde_json::to_string(&err).unwrap();
        // field is None, so should not appear
        assert!(!json.contains("field"));
    }

    #[test]
    fn test_display_impl() {
        let err = AppError::timeout("after 5s");
        assert_eq!(format!("{}", err), "Timeout: after 5s");
    }

    #[test]
    fn test_upstream_status_only_for_api_errors() {
        assert_eq!(AppError::network("x").upstream_status(), None);
    }
}
