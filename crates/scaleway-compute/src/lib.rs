//! Compute-plane client and data models for the Scaleway API.
//!
//! Provides typed models and an asynchronous client for the compute-plane
//! resources: images, volumes, and reserved IP addresses.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::{ComputeClient, ComputeClientBuilder};
pub use models::{
    AttachIpRequest, CreateImageRequest, CreateIpRequest, CreateVolumeRequest, Image, Ip,
    ServerRef, Volume,
};

/// Convenient result alias using the shared Scaleway error type.
pub type Result<T> = scaleway_core::Result<T>;
