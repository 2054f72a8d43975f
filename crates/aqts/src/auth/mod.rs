//! Authentication types.
//!
//! A [`Login`] describes how the client authenticates: a username and
//! password against the Time-Series publish area, or an API token against
//! the Samples area.

mod credentials;
mod token;

use serde::Serialize;

pub use credentials::Credentials;
pub use token::{AUTH_TOKEN_HEADER, AuthToken, SamplesToken};

use crate::types::ApiArea;

/// Path of the login/logout resource, relative to an area root.
pub const SESSION_PATH: &str = "/session";

/// How the client logs in.
#[derive(Debug, Clone)]
pub enum Login {
    /// Username and password, posted to the publish area.
    Password(Credentials),
    /// API token, posted to the samples area.
    SamplesToken(SamplesToken),
}

impl Login {
    /// The area whose `/session` resource handles login and logout.
    pub fn primary_area(&self) -> ApiArea {
        match self {
            Login::Password(_) => ApiArea::Publish,
            Login::SamplesToken(_) => ApiArea::Samples,
        }
    }

    pub(crate) fn request(&self) -> LoginRequest<'_> {
        match self {
            Login::Password(credentials) => LoginRequest::Password {
                username: credentials.username(),
                encrypted_password: credentials.password(),
            },
            Login::SamplesToken(token) => LoginRequest::Token {
                authorization: token.as_str(),
            },
        }
    }
}

/// Request body for `POST /session`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum LoginRequest<'a> {
    #[serde(rename_all = "PascalCase")]
    Password {
        username: &'a str,
        encrypted_password: &'a str,
    },
    #[serde(rename_all = "PascalCase")]
    Token { authorization: &'a str },
}
