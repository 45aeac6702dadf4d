//! # scaleway-core
//!
//! Core types and utilities for working with the Scaleway API.
//!
//! This crate provides the shared request/response pipeline, error handling,
//! configuration, and identifier types used by the per-plane client crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types shared by all clients
//! - [`ids`] - Strongly-typed UUID wrappers for Scaleway resources
//! - [`config`] - Configuration structures for Scaleway clients
//! - [`client`] - The generic JSON-over-HTTP request pipeline

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod ids;

// Re-export commonly used types
pub use client::{ApiClient, ApiClientBuilder};
pub use error::{Error, Result};
