//! pub.dev API adapter
//!
//! Fetches the latest published version of a Dart package.
//! API endpoint: https://pub.dev/api/packages/{package}

use crate::error::RegistryError;
use crate::registry::{HttpClient, RegistryClient};
use async_trait::async_trait;
use serde::Deserialize;

/// pub.dev base URL
const PUB_DEV_URL: &str = "https://pub.dev";

/// pub.dev package metadata response
#[derive(Debug, Deserialize)]
struct PubPackageResponse {
    /// Latest stable release
    latest: Option<PubLatest>,
}

#[derive(Debug, Deserialize)]
struct PubLatest {
    version: Option<String>,
}

/// pub.dev adapter
pub struct PubDevClient {
    client: HttpClient,
    base_url: String,
}

impl PubDevClient {
    /// Create a new pub.dev adapter
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, PUB_DEV_URL)
    }

    /// Create an adapter against another host serving the same API
    pub fn with_base_url(client: HttpClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the URL for a package
    fn build_url(&self, package: &str) -> String {
        format!("{}/api/packages/{}", self.base_url, package)
    }
}

#[async_trait]
impl RegistryClient for PubDevClient {
    fn registry_name(&self) -> &'static str {
        "pub.dev"
    }

    async fn latest_version(&self, package: &str) -> Result<Option<String>, RegistryError> {
        let url = self.build_url(package);
        let response: PubPackageResponse = self
            .client
            .get_json(&url, package, self.registry_name())
            .await?;

        Ok(response
            .latest
            .and_then(|latest| latest.version)
            .filter(|v| !v.is_empty() && v != "null"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn adapter_for(server: &Server) -> PubDevClient {
        PubDevClient::with_base_url(HttpClient::new().unwrap(), &server.url())
    }

    #[test]
    fn test_registry_name() {
        let adapter = PubDevClient::new(HttpClient::new().unwrap());
        assert_eq!(adapter.registry_name(), "pub.dev");
    }

    #[test]
    fn test_build_url() {
        let adapter = PubDevClient::new(HttpClient::new().unwrap());
        assert_eq!(
            adapter.build_url("http"),
            "https://pub.dev/api/packages/http"
        );
    }

    #[test]
    fn test_build_url_trims_trailing_slash() {
        let adapter = PubDevClient::with_base_url(HttpClient::new().unwrap(), "http://mirror/");
        assert_eq!(
            adapter.build_url("flutter_lints"),
            "http://mirror/api/packages/flutter_lints"
        );
    }

    #[tokio::test]
    async fn test_latest_version_found() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/packages/http")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "name": "http",
                    "latest": {
                        "version": "1.2.0",
                        "pubspec": {"name": "http", "version": "1.2.0"}
                    },
                    "versions": [{"version": "1.1.0"}, {"version": "1.2.0"}]
                }"#,
            )
            .create_async()
            .await;

        let adapter = adapter_for(&server);
        let latest = adapter.latest_version("http").await.unwrap();

        assert_eq!(latest.as_deref(), Some("1.2.0"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_latest_missing() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/packages/ghost")
            .with_status(200)
            .with_body(r#"{"name": "ghost"}"#)
            .create_async()
            .await;

        let adapter = adapter_for(&server);
        assert_eq!(adapter.latest_version("ghost").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_latest_version_null() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/packages/ghost")
            .with_status(200)
            .with_body(r#"{"name": "ghost", "latest": {"version": null}}"#)
            .create_async()
            .await;

        let adapter = adapter_for(&server);
        assert_eq!(adapter.latest_version("ghost").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_latest_version_null_literal() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/packages/ghost")
            .with_status(200)
            .with_body(r#"{"latest": {"version": "null"}}"#)
            .create_async()
            .await;

        let adapter = adapter_for(&server);
        assert_eq!(adapter.latest_version("ghost").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_package_not_found() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/packages/nope")
            .with_status(404)
            .with_body(r#"{"error": {"code": "NotFound"}}"#)
            .create_async()
            .await;

        let adapter = adapter_for(&server);
        let result = adapter.latest_version("nope").await;
        assert!(matches!(result, Err(RegistryError::PackageNotFound { .. })));
    }
}
