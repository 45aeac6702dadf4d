//! The generic JSON-over-HTTP request pipeline.
//!
//! Every API operation goes through [`ApiClient`]: resolve a path against the
//! configured base URL, attach the JSON content type and the `X-Auth-Token`
//! header, perform one HTTP round-trip, and decode the JSON response body.
//! There are no retries and no status-code interpretation; transport and
//! decode failures propagate to the caller unchanged.

use crate::config::HttpConfig;
use crate::error::{Error, Result};
use reqwest::header;
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

/// Content type attached to every request.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Header carrying the auth token.
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

const DEFAULT_USER_AGENT: &str = concat!("scaleway-rs/", env!("CARGO_PKG_VERSION"));

/// Builder for [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ApiClientBuilder {
    base_url: Url,
    auth_token: Option<String>,
    user_agent: String,
    http_config: HttpConfig,
    http_client: Option<Client>,
}

impl ApiClientBuilder {
    /// Create a builder for the specified base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be parsed.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;

        Ok(Self {
            base_url,
            auth_token: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http_config: HttpConfig::new(),
            http_client: None,
        })
    }

    /// Set the auth token sent with every request.
    #[must_use]
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Override the user-agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the HTTP transport configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: HttpConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Supply a pre-built [`reqwest::Client`] instead of constructing one.
    ///
    /// When set, the transport configuration on this builder is ignored.
    #[must_use]
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be constructed.
    pub fn build(self) -> Result<ApiClient> {
        let http = match self.http_client {
            Some(client) => client,
            None => ClientBuilder::new()
                .timeout(self.http_config.timeout)
                .connect_timeout(self.http_config.connect_timeout)
                .pool_idle_timeout(self.http_config.pool_idle_timeout)
                .pool_max_idle_per_host(self.http_config.pool_max_idle_per_host)
                .build()
                .map_err(|err| {
                    Error::Config(format!("Failed to build HTTP transport: {err}"))
                })?,
        };

        Ok(ApiClient {
            http,
            base_url: self.base_url,
            auth_token: self.auth_token,
            user_agent: self.user_agent,
        })
    }
}

/// Generic request/response pipeline shared by all resource clients.
///
/// The client is cheap to clone. The auth token is a plain field mutated
/// through `&mut self`; one token per client instance, swapped between calls,
/// never concurrently with an in-flight request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    auth_token: Option<String>,
    user_agent: String,
}

impl ApiClient {
    /// Construct a client directly from the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the transport cannot
    /// be constructed.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        ApiClientBuilder::new(base_url)?.build()
    }

    /// Return the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Return the current auth token, if any.
    #[must_use]
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// Install or replace the auth token used for subsequent requests.
    pub fn set_auth_token(&mut self, token: impl Into<String>) {
        self.auth_token = Some(token.into());
    }

    /// Remove the auth token; subsequent requests are unauthenticated.
    pub fn clear_auth_token(&mut self) {
        self.auth_token = None;
    }

    fn build_url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|err| Error::InvalidEndpoint(format!("Invalid path `{path}`: {err}")))
    }

    /// Perform one HTTP round-trip and return the raw response.
    ///
    /// The URL is resolved before anything is sent, so a path that cannot be
    /// joined against the base URL fails without touching the network. The
    /// `customize` closure attaches the body or extra headers.
    ///
    /// # Errors
    ///
    /// Returns an error when the path is unresolvable or the transport fails.
    pub async fn execute<F>(&self, method: Method, path: &str, customize: F) -> Result<Response>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let url = self.build_url(path)?;

        let mut request = self
            .http
            .request(method.clone(), url)
            .header(header::CONTENT_TYPE, CONTENT_TYPE_JSON)
            .header(header::ACCEPT, CONTENT_TYPE_JSON)
            .header(header::USER_AGENT, &self.user_agent);

        if let Some(token) = &self.auth_token {
            request = request.header(AUTH_TOKEN_HEADER, token);
        }

        let request = customize(request);

        debug!(%method, path, "sending Scaleway API request");

        request.send().await.map_err(Error::from)
    }

    /// Perform one round-trip with an optional JSON body and decode the
    /// response body.
    ///
    /// A zero-byte response body is not a decode failure: it yields
    /// `Ok(None)`, leaving the caller to decide whether a payload was
    /// required.
    ///
    /// # Errors
    ///
    /// Returns an error when the path is unresolvable, the transport fails,
    /// or a non-empty body is not valid JSON for `R`.
    pub async fn send_json<B, R>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<R>>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .execute(method, path, |mut request| {
                if let Some(payload) = body {
                    request = request.json(payload);
                }
                request
            })
            .await?;

        let bytes = response.bytes().await.map_err(Error::from)?;
        if bytes.is_empty() {
            return Ok(None);
        }

        serde_json::from_slice(&bytes).map(Some).map_err(Error::from)
    }
}
