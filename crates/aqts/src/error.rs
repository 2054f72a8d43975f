//! Error types for the aqts library.
//!
//! This module provides a unified error type with explicit variants for
//! transport, authentication, HTTP status, configuration and input errors.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Maximum number of body bytes kept in an [`HttpError`] message.
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// The unified error type for aqts operations.
///
/// Nothing in the library recovers from these locally; every variant is
/// surfaced to the caller as soon as it happens.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors (unusable token, empty login response).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// The server answered with a status of 400 or above.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// Configuration errors (unknown target, unreadable credentials).
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input validation errors.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns the HTTP status if this error came from a failed response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http(err) => Some(err.status),
            _ => None,
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Response body could not be decoded.
    #[error("failed to decode response: {message}")]
    Decode { message: String },

    /// Generic HTTP client error.
    #[error("HTTP client error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout {
                message: err.to_string(),
            }
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else if err.is_decode() {
            TransportError::Decode {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The login exchange succeeded but returned no token.
    #[error("login response did not contain a token")]
    EmptyToken,

    /// The token contains characters that cannot be sent in a header.
    #[error("token is not a valid header value")]
    InvalidToken,
}

/// A response with status 400 or above.
///
/// Carries the status and the response body as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    /// HTTP status code.
    pub status: u16,
    /// Response body, possibly empty.
    pub body: String,
}

impl HttpError {
    /// Create a new HTTP error.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Check if the server rejected the credentials or token.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401 || self.status == 403
    }

    fn truncated_body(&self) -> String {
        if self.body.len() <= MAX_ERROR_BODY_LENGTH {
            return self.body.clone();
        }
        let mut end = MAX_ERROR_BODY_LENGTH;
        while !self.body.is_char_boundary(end) {
            end -= 1;
        }
        format!(
            "{}... (truncated, {} total bytes)",
            &self.body[..end],
            self.body.len()
        )
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        let body = self.body.trim();
        if !body.is_empty() {
            let body = HttpError::new(self.status, body).truncated_body();
            write!(f, ": {}", body)?;
        }
        Ok(())
    }
}

impl std::error::Error for HttpError {}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The deployment target name is not one of the known targets.
    #[error("unknown target '{name}' (expected one of: test, prod, samples)")]
    UnknownTarget { name: String },

    /// The credentials file could not be read.
    #[error("failed to read credentials file {}: {source}", path.display())]
    CredentialsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The credentials file is not valid JSON or is missing a key.
    #[error("invalid credentials file {}: {source}", path.display())]
    CredentialsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {message}")]
    HttpClient { message: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API area name.
    #[error("invalid API area '{value}': expected one of publish, acquisition, provisioning, samples")]
    Area { value: String },

    /// A report title pattern is not a valid regular expression.
    #[error("invalid title pattern '{pattern}': {source}")]
    TitlePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display_includes_status_and_body() {
        let err = HttpError::new(401, "Invalid username or password");
        assert_eq!(err.to_string(), "HTTP 401: Invalid username or password");
    }

    #[test]
    fn http_error_display_without_body() {
        let err = HttpError::new(503, "   ");
        assert_eq!(err.to_string(), "HTTP 503");
    }

    #[test]
    fn http_error_display_truncates_long_bodies() {
        let err = HttpError::new(500, "x".repeat(2000));
        let display = err.to_string();
        assert!(display.contains("truncated, 2000 total bytes"));
        assert!(display.len() < 600);
        // The full body is still available to callers
        assert_eq!(err.body.len(), 2000);
    }

    #[test]
    fn http_error_auth_statuses() {
        assert!(HttpError::new(401, "").is_auth_error());
        assert!(HttpError::new(403, "").is_auth_error());
        assert!(!HttpError::new(404, "").is_auth_error());
    }

    #[test]
    fn http_error_shown_once_in_chain() {
        use std::error::Error as _;

        let err: Error = HttpError::new(404, "no such thing").into();
        assert_eq!(err.to_string(), "HTTP 404: no such thing");
        assert!(err.source().is_none());
    }

    #[test]
    fn error_status_only_for_http_errors() {
        let err: Error = HttpError::new(418, "").into();
        assert_eq!(err.status(), Some(418));

        let err: Error = AuthError::EmptyToken.into();
        assert_eq!(err.status(), None);
    }
}
