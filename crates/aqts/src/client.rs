//! Client owning one session per API area.

use tracing::{debug, info, instrument, warn};

use crate::auth::{AuthToken, Login, SESSION_PATH};
use crate::config::ClientConfig;
use crate::error::{AuthError, ConfigError, Error};
use crate::http::{ApiSession, token_header_value};
use crate::types::{ApiArea, Target};

/// Where the client is in its login lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// No login has succeeded yet.
    Unauthenticated,
    /// Logged in; every session carries the token.
    Authenticated,
    /// Logged out on the server. The sessions still carry the old token.
    Disconnected,
}

/// Authenticated client for an AQUARIUS deployment.
///
/// The client creates one [`ApiSession`] per [`ApiArea`] on the target
/// host. [`connect`](Self::connect) performs a single login against the
/// primary area and attaches the returned token to every session;
/// [`disconnect`](Self::disconnect) deletes the server-side session.
///
/// Calls are made one at a time. Mutating methods take `&mut self`, so a
/// client cannot be reconnected while a request borrows one of its sessions.
///
/// # Example
///
/// ```no_run
/// use aqts::{AquariusClient, ClientConfig, Credentials, Login, Target};
///
/// # async fn example() -> Result<(), aqts::Error> {
/// let config = ClientConfig::new(
///     Target::Prod,
///     Login::Password(Credentials::new("jsmith", "secret")),
/// );
/// let mut client = AquariusClient::new(config)?;
/// client.connect().await?;
///
/// let reports = client.publish().get("/GetReportList").await?;
/// println!("{}", reports.text().await?);
///
/// client.disconnect().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AquariusClient {
    target: Target,
    login: Login,
    publish: ApiSession,
    acquisition: ApiSession,
    provisioning: ApiSession,
    samples: ApiSession,
    state: ConnectionState,
}

impl AquariusClient {
    /// Build a client and its sessions. No request is made.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the HTTP client cannot be
    /// built from the configuration.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let http = config
            .http_client()
            .map_err(|e| ConfigError::HttpClient {
                message: e.to_string(),
            })?;

        let host = config.target.host();
        let session = |area: ApiArea| ApiSession::new(http.clone(), host, area.path());

        debug!(deployment = %config.target, "Creating client");

        Ok(Self {
            publish: session(ApiArea::Publish),
            acquisition: session(ApiArea::Acquisition),
            provisioning: session(ApiArea::Provisioning),
            samples: session(ApiArea::Samples),
            target: config.target,
            login: config.login,
            state: ConnectionState::Unauthenticated,
        })
    }

    /// Build a client for a named target.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownTarget`] for unrecognized names.
    pub fn for_target(name: &str, login: Login) -> Result<Self, Error> {
        Self::new(ClientConfig::new(Target::from_name(name)?, login))
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// The area whose `/session` resource handles login and logout.
    pub fn primary_area(&self) -> ApiArea {
        self.login.primary_area()
    }

    pub fn publish(&self) -> &ApiSession {
        &self.publish
    }

    pub fn acquisition(&self) -> &ApiSession {
        &self.acquisition
    }

    pub fn provisioning(&self) -> &ApiSession {
        &self.provisioning
    }

    pub fn samples(&self) -> &ApiSession {
        &self.samples
    }

    /// Returns the session for `area`.
    pub fn session(&self, area: ApiArea) -> &ApiSession {
        match area {
            ApiArea::Publish => &self.publish,
            ApiArea::Acquisition => &self.acquisition,
            ApiArea::Provisioning => &self.provisioning,
            ApiArea::Samples => &self.samples,
        }
    }

    fn session_mut(&mut self, area: ApiArea) -> &mut ApiSession {
        match area {
            ApiArea::Publish => &mut self.publish,
            ApiArea::Acquisition => &mut self.acquisition,
            ApiArea::Provisioning => &mut self.provisioning,
            ApiArea::Samples => &mut self.samples,
        }
    }

    /// Iterate over all sessions with their areas.
    pub fn sessions(&self) -> impl Iterator<Item = (ApiArea, &ApiSession)> {
        ApiArea::ALL.into_iter().map(|area| (area, self.session(area)))
    }

    /// Attach `token` to every session.
    ///
    /// Either all sessions get the token or, if it is not a valid header
    /// value, none do.
    pub fn set_token(&mut self, token: &AuthToken) -> Result<(), Error> {
        let value = token_header_value(token)?;
        for area in ApiArea::ALL {
            self.session_mut(area).set_token_value(value.clone());
        }
        Ok(())
    }

    /// Log in and attach the returned token to every session.
    ///
    /// Calling this again logs in again and replaces the token.
    ///
    /// # Errors
    ///
    /// Propagates the HTTP error if login is rejected, and returns
    /// [`AuthError::EmptyToken`] if the server answers with an empty body.
    /// Sessions are left untouched on failure.
    #[instrument(skip(self), fields(deployment = %self.target, area = %self.primary_area()))]
    pub async fn connect(&mut self) -> Result<(), Error> {
        info!("Connecting");

        let area = self.primary_area();
        let response = self
            .session(area)
            .post(SESSION_PATH, &self.login.request())
            .await?;

        let token = response.text().await?;
        if token.trim().is_empty() {
            return Err(AuthError::EmptyToken.into());
        }

        self.set_token(&AuthToken::new(token))?;
        self.state = ConnectionState::Authenticated;

        debug!("Token attached to all sessions");
        Ok(())
    }

    /// Delete the server-side session.
    ///
    /// The local sessions keep their token headers; further calls will send
    /// a token the server no longer accepts.
    #[instrument(skip(self), fields(deployment = %self.target, area = %self.primary_area()))]
    pub async fn disconnect(&mut self) -> Result<(), Error> {
        if self.state == ConnectionState::Unauthenticated {
            warn!("Disconnecting a client that never connected");
        }
        info!("Disconnecting");

        let area = self.primary_area();
        self.session(area).delete(SESSION_PATH).await?;
        self.state = ConnectionState::Disconnected;

        Ok(())
    }
}
