use crate::dependency_graph::domain::{DependencyRecord, VersionRecord};
use crate::ports::outbound::CrateRegistry;
use crate::shared::error::DepGraphError;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct DependenciesResponse {
    dependencies: Vec<DependencyRecord>,
}

#[derive(Debug, Deserialize)]
struct VersionsResponse {
    versions: Vec<VersionRecord>,
}

/// CratesIoClient adapter for the crates.io HTTP API
///
/// This adapter implements the CrateRegistry port against
/// `GET /crates/{name}/{version}/dependencies` and `GET /crates/{name}/versions`.
/// It performs no caching of its own; wrap it in `CachingCrateRegistry`.
///
/// # Failure behavior
/// - Every request carries a fixed timeout
/// - No retries: a failed request fails the caller immediately
/// - Non-success responses carry at most 512 bytes of the body
pub struct CratesIoClient {
    client: reqwest::Client,
    base_url: String,
}

impl CratesIoClient {
    pub const DEFAULT_REGISTRY_URL: &'static str = "https://crates.io/api/v1";
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 15;
    const MAX_ERROR_BODY_BYTES: usize = 512;

    /// Creates a client for crates.io with the default timeout
    pub fn new() -> Result<Self> {
        Self::with_config(
            Self::DEFAULT_REGISTRY_URL,
            Duration::from_secs(Self::DEFAULT_TIMEOUT_SECONDS),
        )
    }

    /// Creates a client for a crates.io-compatible API rooted at `base_url`
    pub fn with_config(base_url: &str, timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("cargo-depgraph/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Validates a path component before it is placed in a URL
    fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
        if component.is_empty() {
            anyhow::bail!("{} must not be empty", component_type);
        }

        if component.contains('/') || component.contains('\\') || component.contains("..") {
            anyhow::bail!(
                "Security: {} {:?} contains path separators which are not allowed",
                component_type,
                component
            );
        }

        if component.contains('#') || component.contains('?') {
            anyhow::bail!(
                "Security: {} {:?} contains URL-unsafe characters",
                component_type,
                component
            );
        }

        Ok(())
    }

    fn dependencies_url(&self, name: &str, version: &str) -> Result<String> {
        Self::validate_url_component(name, "Crate name")?;
        Self::validate_url_component(version, "Version")?;
        Ok(format!(
            "{}/crates/{}/{}/dependencies",
            self.base_url,
            urlencoding::encode(name),
            urlencoding::encode(version)
        ))
    }

    fn versions_url(&self, name: &str) -> Result<String> {
        Self::validate_url_component(name, "Crate name")?;
        Ok(format!(
            "{}/crates/{}/versions",
            self.base_url,
            urlencoding::encode(name)
        ))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            let mut excerpt: Vec<u8> = Vec::new();
            while excerpt.len() < Self::MAX_ERROR_BODY_BYTES {
                match response.chunk().await {
                    Ok(Some(chunk)) => excerpt.extend_from_slice(&chunk),
                    _ => break,
                }
            }
            excerpt.truncate(Self::MAX_ERROR_BODY_BYTES);

            return Err(DepGraphError::Registry {
                url: url.to_string(),
                status: status.as_u16(),
                body: String::from_utf8_lossy(&excerpt).trim().to_string(),
            }
            .into());
        }

        let body = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))?;

        serde_json::from_slice(&body).map_err(|e| {
            DepGraphError::Decode {
                url: url.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[async_trait]
impl CrateRegistry for CratesIoClient {
    async fn fetch_dependencies(&self, name: &str, version: &str) -> Result<Vec<DependencyRecord>> {
        let url = self.dependencies_url(name, version)?;
        let parsed: DependenciesResponse = self.get_json(&url).await?;
        Ok(parsed.dependencies)
    }

    async fn fetch_versions(&self, name: &str) -> Result<Vec<VersionRecord>> {
        let url = self.versions_url(name)?;
        let parsed: VersionsResponse = self.get_json(&url).await?;
        Ok(parsed.versions)
    }
}
