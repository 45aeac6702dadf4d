//! Account-plane client and data models for the Scaleway API.
//!
//! Provides typed models and an asynchronous client for the account-plane
//! resources: authentication tokens, organizations, users, servers, server
//! actions, and snapshots.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::{AccountClient, AccountClientBuilder};
pub use models::{
    CreateServerRequest, CreateSnapshotRequest, CreateTokenRequest, Credentials, Organization,
    Server, ServerAction, Snapshot, Task, Token, UpdateSnapshotRequest, User,
};

/// Convenient result alias using the shared Scaleway error type.
pub type Result<T> = scaleway_core::Result<T>;
