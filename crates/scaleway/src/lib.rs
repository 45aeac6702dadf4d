//! Client library for the Scaleway cloud API.
//!
//! Bundles the account-plane and compute-plane clients behind a single
//! [`Client`] with shared authentication. Obtain a token from credentials
//! with [`Client::authenticate`], or install a known token up front:
//!
//! ```no_run
//! use scaleway::{Client, Credentials};
//!
//! # async fn example() -> scaleway::Result<()> {
//! let mut client = Client::new()?;
//! let credentials = Credentials {
//!     email: "foo@bar.com".into(),
//!     password: "foobar".into(),
//! };
//! let token = client.authenticate(&credentials, true).await?;
//! println!("authenticated as token {}", token.id);
//!
//! let servers = client.account().list_servers().await?;
//! let images = client.compute().list_images().await?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

pub mod client;

pub use client::Client;
pub use scaleway_account::models::{
    CreateServerRequest, CreateSnapshotRequest, CreateTokenRequest, Credentials, Organization,
    Server, ServerAction, Snapshot, Task, Token, UpdateSnapshotRequest, User,
};
pub use scaleway_account::{AccountClient, AccountClientBuilder};
pub use scaleway_compute::models::{
    AttachIpRequest, CreateImageRequest, CreateIpRequest, CreateVolumeRequest, Image, Ip,
    ServerRef, Volume,
};
pub use scaleway_compute::{ComputeClient, ComputeClientBuilder};
pub use scaleway_core::config::{HttpConfig, ScalewayConfig};
pub use scaleway_core::{ids, Error, Result};
