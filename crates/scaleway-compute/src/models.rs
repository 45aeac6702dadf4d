//! Compute-plane models shared by the client and the account-plane crate.
//!
//! Responses frequently embed partial objects (an image inside a server
//! carries only its `id` and `name`), so every non-identifying field is
//! optional with a serde default.

use chrono::{DateTime, Utc};
use scaleway_core::ids::{ImageId, IpId, OrganizationId, ServerId, VolumeId};
use serde::{Deserialize, Serialize};

/// Slim reference to a server, as embedded in volume and IP payloads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerRef {
    /// Server identifier.
    pub id: ServerId,
    /// Server name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A block storage volume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Volume {
    /// Volume identifier.
    pub id: VolumeId,
    /// Volume name.
    pub name: String,
    /// Export URI once the volume is attached, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_uri: Option<String>,
    /// Owning organization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<OrganizationId>,
    /// Server the volume is attached to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerRef>,
    /// Size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Volume type (e.g. `l_ssd`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<String>,
}

/// A bootable machine image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Image {
    /// Image identifier.
    pub id: ImageId,
    /// Image name.
    pub name: String,
    /// CPU architecture (e.g. `arm`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arch: Option<String>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    /// Last modification timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modification_date: Option<DateTime<Utc>>,
    /// Additional volumes bundled with the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_volumes: Option<Vec<Volume>>,
    /// Source image identifier, when derived from another image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_image: Option<String>,
    /// Source server identifier, when captured from a server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_server: Option<String>,
    /// Marketplace key, for marketplace images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketplace_key: Option<String>,
    /// Owning organization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<OrganizationId>,
    /// Whether the image is publicly visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    /// Root volume the image boots from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_volume: Option<Volume>,
}

/// A reserved IP address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ip {
    /// Reserved IP identifier.
    pub id: IpId,
    /// The IPv4 address.
    pub address: String,
    /// Owning organization.
    pub organization: OrganizationId,
    /// Server the address is attached to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerRef>,
}

/// Request payload for creating an image from a root volume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateImageRequest {
    /// Owning organization.
    pub organization: OrganizationId,
    /// CPU architecture.
    pub arch: String,
    /// Name for the image.
    pub name: String,
    /// Volume to use as the image's root volume.
    pub root_volume: VolumeId,
}

/// Request payload for creating a volume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateVolumeRequest {
    /// Name for the volume.
    pub name: String,
    /// Owning organization.
    pub organization: OrganizationId,
    /// Volume type (e.g. `l_ssd`).
    pub volume_type: String,
    /// Size in bytes.
    pub size: u64,
}

/// Request payload for reserving a new IP address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateIpRequest {
    /// Organization the address is reserved for.
    pub organization: OrganizationId,
}

/// Request payload for attaching a reserved IP to a server.
///
/// The upstream API expects the full record on `PUT`, so the address and
/// identifier are repeated alongside the target server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttachIpRequest {
    /// The IPv4 address being attached.
    pub address: String,
    /// Reserved IP identifier.
    pub id: IpId,
    /// Owning organization.
    pub organization: OrganizationId,
    /// Server to attach the address to.
    pub server: ServerId,
}
