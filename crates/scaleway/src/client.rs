//! Combined client over both API planes.

use scaleway_account::models::{Credentials, Token};
use scaleway_account::{AccountClient, AccountClientBuilder};
use scaleway_compute::{ComputeClient, ComputeClientBuilder};
use scaleway_core::config::{HttpConfig, ScalewayConfig};
use scaleway_core::Result;
use std::time::Duration;
use validator::Validate;

/// A client for the full Scaleway API, bundling the account plane and the
/// compute plane under one auth token.
#[derive(Debug, Clone)]
pub struct Client {
    account: AccountClient,
    compute: ComputeClient,
}

impl Client {
    /// Create a client against the official endpoints, without a token.
    ///
    /// # Errors
    ///
    /// Returns an error if either plane's transport cannot be constructed.
    pub fn new() -> Result<Self> {
        Self::from_config(&ScalewayConfig::default())
    }

    /// Create a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation or either
    /// plane's transport cannot be constructed.
    pub fn from_config(config: &ScalewayConfig) -> Result<Self> {
        config.validate()?;

        let http_config = HttpConfig::new().with_timeout(Duration::from_secs(
            config.request_timeout_secs,
        ));

        let mut account = AccountClientBuilder::new(&config.account_url)?
            .with_http_config(http_config.clone());
        let mut compute = ComputeClientBuilder::new(&config.compute_url)?
            .with_http_config(http_config);

        if let Some(token) = &config.auth_token {
            account = account.with_auth_token(token.clone());
            compute = compute.with_auth_token(token.clone());
        }

        Ok(Self {
            account: account.build()?,
            compute: compute.build()?,
        })
    }

    /// The account-plane client.
    #[must_use]
    pub fn account(&self) -> &AccountClient {
        &self.account
    }

    /// The compute-plane client.
    #[must_use]
    pub fn compute(&self) -> &ComputeClient {
        &self.compute
    }

    /// Install a token on both planes.
    pub fn set_auth_token(&mut self, token: impl Into<String>) {
        let token = token.into();
        self.account.set_auth_token(token.clone());
        self.compute.set_auth_token(token);
    }

    /// Exchange credentials for a token and install it on both planes.
    ///
    /// # Errors
    ///
    /// Returns an error if token creation fails.
    pub async fn authenticate(
        &mut self,
        credentials: &Credentials,
        expires: bool,
    ) -> Result<Token> {
        let token = self.account.create_token(credentials, expires).await?;
        self.set_auth_token(token.id.to_string());
        Ok(token)
    }
}
