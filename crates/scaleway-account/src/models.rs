//! Account-plane models shared by the client and the facade crate.
//!
//! The same partial-embed rule as the compute models applies: a server's
//! image may carry only its `id` and `name`, so non-identifying fields are
//! optional with serde defaults.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use scaleway_compute::models::{Image, Volume};
use scaleway_core::ids::{ImageId, OrganizationId, ServerId, SnapshotId, TaskId, TokenId, UserId, VolumeId};
use serde::{Deserialize, Serialize};

/// An authentication token granting access to the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// Token identifier, also the value sent in the auth header.
    pub id: TokenId,
    /// User the token belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    /// Expiry timestamp, absent for non-expiring tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,
    /// Whether the token inherits the user's permissions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherits_user_perms: Option<bool>,
    /// Explicit permissions attached to the token.
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Email and password used to obtain a token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Request payload for creating a token.
///
/// The upstream API expects the credentials flattened alongside the
/// `expires` flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTokenRequest {
    /// Credentials to authenticate with.
    #[serde(flatten)]
    pub credentials: Credentials,
    /// Whether the token should expire.
    pub expires: bool,
}

/// An organization, the billing and ownership boundary for resources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Organization {
    /// Organization identifier.
    pub id: OrganizationId,
    /// Organization name.
    pub name: String,
    /// Members, when the listing includes them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<User>>,
}

/// A user account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// User identifier.
    pub id: UserId,
    /// Email address.
    pub email: String,
    /// First name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    /// Last name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,
    /// Registered SSH public keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_public_keys: Option<Vec<String>>,
}

/// A virtual server instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Server {
    /// Server identifier.
    pub id: ServerId,
    /// Server name.
    pub name: String,
    /// Boot script in use, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bootscript: Option<String>,
    /// Whether a dynamic public IP is assigned at boot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_public_ip: Option<bool>,
    /// Image the server booted from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    /// Owning organization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<OrganizationId>,
    /// Private IPv4 address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_ip: Option<String>,
    /// Public IPv4 address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<String>,
    /// Lifecycle state (e.g. `running`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Attached volumes, keyed by slot index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volumes: Option<BTreeMap<String, Volume>>,
}

/// Request payload for creating a server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateServerRequest {
    /// Owning organization.
    pub organization: OrganizationId,
    /// Name for the server.
    pub name: String,
    /// Image to boot from.
    pub image: ImageId,
    /// Free-form tags.
    pub tags: Vec<String>,
}

/// An action a server can perform.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServerAction {
    /// Power the server on.
    PowerOn,
    /// Power the server off.
    PowerOff,
    /// Reboot the server.
    Reboot,
    /// Destroy the server and its volumes.
    Terminate,
}

impl ServerAction {
    /// The wire name of the action.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PowerOn => "poweron",
            Self::PowerOff => "poweroff",
            Self::Reboot => "reboot",
            Self::Terminate => "terminate",
        }
    }
}

impl fmt::Display for ServerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A background task spawned by a server action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Task identifier.
    pub id: TaskId,
    /// Human-readable description (e.g. `server_poweroff`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Path of the request that spawned the task.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href_from: Option<String>,
    /// Completion percentage, reported as a string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<String>,
    /// Task status (e.g. `pending`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A point-in-time copy of a volume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    /// Snapshot identifier.
    pub id: SnapshotId,
    /// Snapshot name.
    pub name: String,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    /// Last modification timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modification_date: Option<DateTime<Utc>>,
    /// Owning organization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<OrganizationId>,
    /// Size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Lifecycle state (e.g. `snapshotting`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Type of the source volume.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<String>,
    /// Volume the snapshot was taken from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_volume: Option<Volume>,
}

/// Request payload for creating a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateSnapshotRequest {
    /// Name for the snapshot.
    pub name: String,
    /// Owning organization.
    pub organization: OrganizationId,
    /// Volume to snapshot.
    pub volume_id: VolumeId,
}

/// Request payload for updating a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateSnapshotRequest {
    /// New name for the snapshot.
    pub name: String,
    /// Owning organization.
    pub organization: OrganizationId,
}
