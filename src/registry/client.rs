//! HTTP client shared foundation
//!
//! Thin wrapper over reqwest that maps HTTP failures to RegistryError.
//! Exactly one attempt is made per request and the client's default
//! timeouts apply.

use crate::error::RegistryError;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("pubcheck/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_user_agent(DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with a custom User-Agent
    pub fn with_user_agent(user_agent: &str) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| RegistryError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }

    /// Perform a single GET request and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        package: &str,
        registry: &str,
    ) -> Result<T, RegistryError> {
        tracing::debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RegistryError::network(package, registry, e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::package_not_found(package, registry));
        }
        if !status.is_success() {
            return Err(RegistryError::network(
                package,
                registry,
                format!("HTTP {}", status),
            ));
        }

        response.json::<T>().await.map_err(|e| {
            RegistryError::invalid_response(
                package,
                registry,
                format!("failed to parse JSON: {}", e),
            )
        })
    }
}
