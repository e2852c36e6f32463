//! Registry adapters for fetching package version information
//!
//! This module provides:
//! - HTTP client shared foundation
//! - pub.dev API adapter

mod client;
mod pub_dev;

pub use client::HttpClient;
pub use pub_dev::PubDevClient;

use crate::error::RegistryError;
use async_trait::async_trait;

/// Trait for registry clients
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Get the registry name
    fn registry_name(&self) -> &'static str;

    /// Fetch the latest published version of a package.
    ///
    /// `Ok(None)` means the registry answered but had no usable version.
    async fn latest_version(&self, package: &str) -> Result<Option<String>, RegistryError>;
}
