//! Asynchronous compute-plane client implementation.

use crate::models::{AttachIpRequest, CreateImageRequest, CreateIpRequest, CreateVolumeRequest, Image, Ip, Volume};
use crate::Result;
use reqwest::Method;
use scaleway_core::client::{ApiClient, ApiClientBuilder};
use scaleway_core::config::{HttpConfig, DEFAULT_COMPUTE_URL};
use scaleway_core::ids::{ImageId, IpId, VolumeId};
use scaleway_core::Error;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

const USER_AGENT: &str = concat!("scaleway-compute/", env!("CARGO_PKG_VERSION"));

/// Builder for [`ComputeClient`].
#[derive(Debug, Clone)]
pub struct ComputeClientBuilder {
    inner: ApiClientBuilder,
}

impl ComputeClientBuilder {
    /// Create a builder for the specified base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be parsed.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let inner = ApiClientBuilder::new(base_url)?.with_user_agent(USER_AGENT);
        Ok(Self { inner })
    }

    /// Create a builder targeting the official compute endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the default URL fails to parse.
    pub fn default_endpoint() -> Result<Self> {
        Self::new(DEFAULT_COMPUTE_URL)
    }

    /// Set the auth token sent with every request.
    #[must_use]
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.inner = self.inner.with_auth_token(token);
        self
    }

    /// Override the HTTP transport configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: HttpConfig) -> Self {
        self.inner = self.inner.with_http_config(config);
        self
    }

    /// Supply a pre-built [`reqwest::Client`].
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.inner = self.inner.with_http_client(client);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be constructed.
    pub fn build(self) -> Result<ComputeClient> {
        let inner = self.inner.build()?;
        Ok(ComputeClient { inner })
    }
}

/// Asynchronous client for the compute plane: images, volumes, and
/// reserved IPs.
#[derive(Debug, Clone)]
pub struct ComputeClient {
    inner: ApiClient,
}

impl ComputeClient {
    /// Construct a client directly from the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        ComputeClientBuilder::new(base_url)?.build()
    }

    /// Return the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        self.inner.base_url()
    }

    /// Return the current auth token, if any.
    #[must_use]
    pub fn auth_token(&self) -> Option<&str> {
        self.inner.auth_token()
    }

    /// Install or replace the auth token used for subsequent requests.
    pub fn set_auth_token(&mut self, token: impl Into<String>) {
        self.inner.set_auth_token(token);
    }

    // Images

    /// Create an image from an existing root volume.
    pub async fn create_image(&self, request: &CreateImageRequest) -> Result<Image> {
        let envelope: ImageEnvelope = require(
            self.inner.send_json(Method::POST, "images", Some(request)).await?,
            "image",
        )?;
        Ok(envelope.image)
    }

    /// List all images visible to the organization.
    pub async fn list_images(&self) -> Result<Vec<Image>> {
        let envelope: ImagesEnvelope = require(
            self.inner.send_json::<(), _>(Method::GET, "images", None).await?,
            "images",
        )?;
        Ok(envelope.images)
    }

    /// Fetch a single image.
    pub async fn get_image(&self, id: ImageId) -> Result<Image> {
        let path = format!("images/{id}");
        let envelope: ImageEnvelope = require(
            self.inner.send_json::<(), _>(Method::GET, &path, None).await?,
            "image",
        )?;
        Ok(envelope.image)
    }

    /// Delete an image.
    pub async fn delete_image(&self, id: ImageId) -> Result<()> {
        let path = format!("images/{id}");
        self.inner
            .send_json::<(), Value>(Method::DELETE, &path, None)
            .await
            .map(|_| ())
    }

    // Volumes

    /// Create a volume.
    pub async fn create_volume(&self, request: &CreateVolumeRequest) -> Result<Volume> {
        let envelope: VolumeEnvelope = require(
            self.inner.send_json(Method::POST, "volumes", Some(request)).await?,
            "volume",
        )?;
        Ok(envelope.volume)
    }

    /// List all volumes.
    pub async fn list_volumes(&self) -> Result<Vec<Volume>> {
        let envelope: VolumesEnvelope = require(
            self.inner.send_json::<(), _>(Method::GET, "volumes", None).await?,
            "volumes",
        )?;
        Ok(envelope.volumes)
    }

    /// Fetch a single volume.
    pub async fn get_volume(&self, id: VolumeId) -> Result<Volume> {
        let path = format!("volumes/{id}");
        let envelope: VolumeEnvelope = require(
            self.inner.send_json::<(), _>(Method::GET, &path, None).await?,
            "volume",
        )?;
        Ok(envelope.volume)
    }

    /// Delete a volume.
    pub async fn delete_volume(&self, id: VolumeId) -> Result<()> {
        let path = format!("volumes/{id}");
        self.inner
            .send_json::<(), Value>(Method::DELETE, &path, None)
            .await
            .map(|_| ())
    }

    // Reserved IPs

    /// Reserve a new IP address for the organization.
    pub async fn create_ip(&self, request: &CreateIpRequest) -> Result<Ip> {
        let envelope: IpEnvelope = require(
            self.inner.send_json(Method::POST, "ips", Some(request)).await?,
            "ip",
        )?;
        Ok(envelope.ip)
    }

    /// List all reserved IP addresses.
    pub async fn list_ips(&self) -> Result<Vec<Ip>> {
        let envelope: IpsEnvelope = require(
            self.inner.send_json::<(), _>(Method::GET, "ips", None).await?,
            "ips",
        )?;
        Ok(envelope.ips)
    }

    /// Fetch a single reserved IP.
    pub async fn get_ip(&self, id: IpId) -> Result<Ip> {
        let path = format!("ips/{id}");
        let envelope: IpEnvelope = require(
            self.inner.send_json::<(), _>(Method::GET, &path, None).await?,
            "ip",
        )?;
        Ok(envelope.ip)
    }

    /// Attach a reserved IP to a server.
    pub async fn attach_ip(&self, id: IpId, request: &AttachIpRequest) -> Result<Ip> {
        let path = format!("ips/{id}");
        let envelope: IpEnvelope = require(
            self.inner.send_json(Method::PUT, &path, Some(request)).await?,
            "ip",
        )?;
        Ok(envelope.ip)
    }

    /// Release a reserved IP.
    pub async fn delete_ip(&self, id: IpId) -> Result<()> {
        let path = format!("ips/{id}");
        self.inner
            .send_json::<(), Value>(Method::DELETE, &path, None)
            .await
            .map(|_| ())
    }
}

fn require<T>(payload: Option<T>, key: &'static str) -> Result<T> {
    payload.ok_or(Error::EmptyPayload(key))
}

#[derive(Deserialize)]
struct ImageEnvelope {
    image: Image,
}

#[derive(Deserialize)]
struct ImagesEnvelope {
    images: Vec<Image>,
}

#[derive(Deserialize)]
struct VolumeEnvelope {
    volume: Volume,
}

#[derive(Deserialize)]
struct VolumesEnvelope {
    volumes: Vec<Volume>,
}

#[derive(Deserialize)]
struct IpEnvelope {
    ip: Ip,
}

#[derive(Deserialize)]
struct IpsEnvelope {
    ips: Vec<Ip>,
}
