//! Error types for the Salesforce API client

use serde_json::Value;
use std::fmt;

/// Error raised when the OAuth token endpoint does not return a usable
/// access token.
///
/// Carries the remote-reported `error` and `error_description` fields
/// verbatim; both are empty when the endpoint could not be reached or the
/// body was not JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthError {
    /// OAuth error code reported by the server, e.g. `invalid_grant`
    pub error: String,
    /// Human-readable description reported by the server
    pub error_description: String,
}

impl AuthError {
    /// Creates a new authentication error
    pub fn new(error: impl Into<String>, error_description: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            error_description: error_description.into(),
        }
    }

    /// Extracts the OAuth error fields from a decoded token endpoint body.
    /// Missing or non-string fields become empty strings.
    pub fn from_body(body: &Value) -> Self {
        let field = |key: &str| {
            body.get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        Self {
            error: field("error"),
            error_description: field("error_description"),
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to authenticate: {}: {}",
            self.error, self.error_description
        )
    }
}

impl std::error::Error for AuthError {}

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Authentication against the token endpoint failed
    Auth(AuthError),
    /// Transport-level failure (connect, TLS, timeout)
    Request(reqwest::Error),
    /// Response body could not be decoded as JSON
    Json(serde_json::Error),
    /// Request parameters could not be encoded
    Encoding(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Auth(e) => write!(f, "{e}"),
            AppError::Request(e) => write!(f, "request error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Encoding(msg) => write!(f, "encoding error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Auth(e) => Some(e),
            AppError::Request(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Encoding(_) => None,
        }
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        AppError::Auth(e)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Request(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}
