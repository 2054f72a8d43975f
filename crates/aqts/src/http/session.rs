//! Session bound to one API area.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace};

use crate::auth::{AUTH_TOKEN_HEADER, AuthToken};
use crate::error::{AuthError, Error, HttpError};
use crate::types::create_endpoint;

/// HTTP session for one API root.
///
/// Every request goes to `base_url + path`, carries the session's headers,
/// and is passed through [`response_or_error`] before the caller sees it.
/// The base URL never changes after construction; the headers gain the
/// authentication token once [`set_token`](Self::set_token) is called.
///
/// # Example
///
/// ```no_run
/// use aqts::ApiSession;
///
/// # async fn example() -> Result<(), aqts::Error> {
/// let session = ApiSession::new(reqwest::Client::new(), "https://example.com", "/AQUARIUS/Publish/v2");
/// let response = session.get("/GetLocationDescriptionList").await?;
/// println!("{}", response.text().await?);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ApiSession {
    client: reqwest::Client,
    base_url: String,
    headers: HeaderMap,
}

impl ApiSession {
    /// Create a session for `host` + `path`.
    ///
    /// The host goes through [`create_endpoint`], so a host without a scheme
    /// is addressed over plain HTTP.
    pub fn new(client: reqwest::Client, host: &str, path: &str) -> Self {
        Self {
            client,
            base_url: create_endpoint(host, path),
            headers: HeaderMap::new(),
        }
    }

    /// Returns the base URL every request path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the headers sent with every request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the authentication token currently attached, if any.
    pub fn token(&self) -> Option<&str> {
        self.headers
            .get(AUTH_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
    }

    /// Attach `token` to every future request from this session.
    ///
    /// Replaces any previously attached token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidToken`] if the token cannot be sent as a
    /// header value. The session is left unchanged in that case.
    pub fn set_token(&mut self, token: &AuthToken) -> Result<(), Error> {
        let value = token_header_value(token)?;
        self.set_token_value(value);
        Ok(())
    }

    pub(crate) fn set_token_value(&mut self, value: HeaderValue) {
        self.headers
            .insert(HeaderName::from_static("x-authentication-token"), value);
    }

    /// Resolve a relative path against the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request to `path` with the session headers applied.
    ///
    /// Use this to add options (query, body, extra headers) and then pass
    /// the builder to [`execute`](Self::execute).
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, self.url(path))
            .headers(self.headers.clone())
    }

    /// Send a prepared request and validate the response status.
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response, Error> {
        let response = request.send().await?;
        response_or_error(response).await
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn get(&self, path: &str) -> Result<Response, Error> {
        debug!("GET");
        self.execute(self.request(Method::GET, path)).await
    }

    /// GET with URL query parameters.
    #[instrument(skip(self, query), fields(base_url = %self.base_url))]
    pub async fn get_query<Q>(&self, path: &str, query: &Q) -> Result<Response, Error>
    where
        Q: Serialize + ?Sized,
    {
        debug!("GET with query");
        self.execute(self.request(Method::GET, path).query(query)).await
    }

    /// POST a JSON body.
    #[instrument(skip(self, body), fields(base_url = %self.base_url))]
    pub async fn post<B>(&self, path: &str, body: &B) -> Result<Response, Error>
    where
        B: Serialize + ?Sized,
    {
        debug!("POST");
        self.execute(self.request(Method::POST, path).json(body)).await
    }

    /// PUT a JSON body.
    #[instrument(skip(self, body), fields(base_url = %self.base_url))]
    pub async fn put<B>(&self, path: &str, body: &B) -> Result<Response, Error>
    where
        B: Serialize + ?Sized,
    {
        debug!("PUT");
        self.execute(self.request(Method::PUT, path).json(body)).await
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn delete(&self, path: &str) -> Result<Response, Error> {
        debug!("DELETE");
        self.execute(self.request(Method::DELETE, path)).await
    }

    /// GET `path` and deserialize the JSON body.
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, Error> {
        let response = self.get(path).await?;
        Ok(response.json::<R>().await?)
    }
}

impl std::fmt::Debug for ApiSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiSession")
            .field("base_url", &self.base_url)
            .field(
                "token",
                &self.token().map(|_| "[REDACTED]").unwrap_or("none"),
            )
            .finish()
    }
}

/// Build the header value for a token, marked sensitive.
pub(crate) fn token_header_value(token: &AuthToken) -> Result<HeaderValue, Error> {
    let mut value = HeaderValue::from_str(token.as_str()).map_err(|_| AuthError::InvalidToken)?;
    value.set_sensitive(true);
    Ok(value)
}

/// Pass a response through, or turn a status of 400 or above into an error.
///
/// The error carries the status and the body text. Successful responses are
/// returned untouched.
pub async fn response_or_error(response: Response) -> Result<Response, Error> {
    let status = response.status();
    trace!(status = %status, url = %response.url(), "response");

    if status.as_u16() >= 400 {
        let body = response.text().await.unwrap_or_default();
        debug!(status = status.as_u16(), "request failed");
        Err(HttpError::new(status.as_u16(), body).into())
    } else {
        Ok(response)
    }
}
