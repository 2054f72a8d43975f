//! Token types for AQUARIUS authentication.

use std::fmt;

/// Header carrying the session token on every authenticated request.
pub const AUTH_TOKEN_HEADER: &str = "X-Authentication-Token";

/// A session token issued by the server on login.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wrap a token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in the authentication header.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Hide token value in Debug output
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AuthToken").field(&"[REDACTED]").finish()
    }
}

/// An API token for the AQUARIUS Samples login.
///
/// # Security
///
/// Never logged or displayed in Debug output.
#[derive(Clone)]
pub struct SamplesToken(String);

impl SamplesToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SamplesToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SamplesToken").field(&"[REDACTED]").finish()
    }
}
