//! Client configuration.

use std::time::Duration;

use crate::auth::Login;
use crate::types::Target;

/// Default User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("aqts/", env!("CARGO_PKG_VERSION"));

/// Everything [`AquariusClient`](crate::AquariusClient) needs to be built.
///
/// Credentials are resolved by the caller (CLI flags, environment, file)
/// and handed over here once; the library never reads them on its own.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use aqts::{ClientConfig, Credentials, Login, Target};
///
/// let config = ClientConfig::new(
///     Target::Test,
///     Login::Password(Credentials::new("jsmith", "secret")),
/// )
/// .with_timeout(Duration::from_secs(30));
///
/// assert_eq!(config.timeout, Some(Duration::from_secs(30)));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Deployment to talk to.
    pub target: Target,
    /// How to log in.
    pub login: Login,
    pub user_agent: String,
    /// Per-request timeout. `None` keeps the HTTP client default.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(target: Target, login: Login) -> Self {
        Self {
            target,
            login,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub(crate) fn http_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        let mut builder = reqwest::Client::builder().user_agent(&self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }
}
