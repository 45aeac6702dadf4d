//! Configuration structures for Scaleway clients.
//!
//! [`ScalewayConfig`] carries the endpoint and credential settings shared by
//! both API planes; [`HttpConfig`] tunes the underlying HTTP transport.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Default base URL for account-plane operations.
pub const DEFAULT_ACCOUNT_URL: &str = "https://account.scaleway.com/";

/// Default base URL for compute-plane operations.
pub const DEFAULT_COMPUTE_URL: &str = "https://api.scaleway.com/";

const fn default_request_timeout_secs() -> u64 {
    30
}

fn default_account_url() -> String {
    DEFAULT_ACCOUNT_URL.to_string()
}

fn default_compute_url() -> String {
    DEFAULT_COMPUTE_URL.to_string()
}

/// Configuration for a Scaleway client instance.
///
/// The account and compute planes are separate services upstream, so each
/// carries its own base URL. A single auth token applies to both.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScalewayConfig {
    /// Account-plane base URL (tokens, organizations, users, servers,
    /// actions, snapshots).
    #[validate(url)]
    #[serde(default = "default_account_url")]
    pub account_url: String,

    /// Compute-plane base URL (images, volumes, IPs).
    #[validate(url)]
    #[serde(default = "default_compute_url")]
    pub compute_url: String,

    /// Auth token sent as `X-Auth-Token`. Absent until the first token has
    /// been created from credentials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    /// Request timeout in seconds.
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ScalewayConfig {
    /// Create a configuration pointing at the official endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn new() -> Result<Self, Error> {
        let config = Self {
            account_url: default_account_url(),
            compute_url: default_compute_url(),
            auth_token: None,
            request_timeout_secs: default_request_timeout_secs(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Override the account-plane base URL.
    #[must_use]
    pub fn with_account_url(mut self, url: impl Into<String>) -> Self {
        self.account_url = url.into();
        self
    }

    /// Override the compute-plane base URL.
    #[must_use]
    pub fn with_compute_url(mut self, url: impl Into<String>) -> Self {
        self.compute_url = url.into();
        self
    }

    /// Set the auth token.
    #[must_use]
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Set the request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Get the request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Parse and validate the account-plane URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_account_url(&self) -> Result<Url, Error> {
        Url::parse(&self.account_url)
            .map_err(|e| Error::Config(format!("Invalid account URL: {e}")))
    }

    /// Parse and validate the compute-plane URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_compute_url(&self) -> Result<Url, Error> {
        Url::parse(&self.compute_url)
            .map_err(|e| Error::Config(format!("Invalid compute URL: {e}")))
    }
}

impl Default for ScalewayConfig {
    fn default() -> Self {
        Self {
            account_url: default_account_url(),
            compute_url: default_compute_url(),
            auth_token: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

// Connection pool settings

/// Default idle timeout for connection pools.
pub const DEFAULT_POOL_IDLE_TIMEOUT: u64 = 90;

/// Default maximum idle connections per host.
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// HTTP transport configuration.
///
/// Tunes timeouts and connection pooling for the underlying `reqwest`
/// client. There is deliberately no retry policy here: every API call is a
/// single attempt (see [`crate::client::ApiClient`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Request timeout.
    pub timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Connection pool idle timeout.
    pub pool_idle_timeout: Duration,

    /// Maximum idle connections per host.
    pub pool_max_idle_per_host: usize,
}

impl HttpConfig {
    /// Create a transport configuration with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: Duration::from_secs(default_request_timeout_secs()),
            connect_timeout: Duration::from_secs(10),
            pool_idle_timeout: Duration::from_secs(DEFAULT_POOL_IDLE_TIMEOUT),
            pool_max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connection timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the connection pool idle timeout.
    #[must_use]
    pub const fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = timeout;
        self
    }

    /// Set the maximum idle connections per host.
    #[must_use]
    pub const fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::new()
    }
}
