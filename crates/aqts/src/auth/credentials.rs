//! Login credentials type.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, Error};

/// Username and password for an AQUARIUS Time-Series login.
///
/// The password is sent as the `EncryptedPassword` field of the login
/// request; it may be a plain or pre-encrypted password, the client does
/// not care which.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use aqts::Credentials;
///
/// let creds = Credentials::new("jsmith", "hunter2");
/// assert_eq!(creds.username(), "jsmith");
/// ```
#[derive(Clone, Deserialize)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Load credentials from a JSON file with `username` and `password` keys.
    ///
    /// Extra keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CredentialsIo`] if the file cannot be read and
    /// [`ConfigError::CredentialsParse`] if it is not valid JSON or a key is
    /// missing.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::CredentialsIo {
            path: path.to_path_buf(),
            source,
        })?;
        let credentials =
            serde_json::from_str(&json).map_err(|source| ConfigError::CredentialsParse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(credentials)
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    ///
    /// # Security
    ///
    /// Use this only when constructing the login request.
    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
