use crate::dependency_graph::domain::{DependencyRecord, VersionRecord};
use crate::shared::Result;
use async_trait::async_trait;

/// CrateRegistry port for reading package metadata from a registry
///
/// This port abstracts the registry API (crates.io or a compatible mirror)
/// used to expand the dependency graph.
///
/// # Async Support
/// Methods are async so the network adapter never blocks the runtime.
/// Implementations must be `Send + Sync` so a shared instance can serve
/// several crawls at once.
#[async_trait]
pub trait CrateRegistry: Send + Sync {
    /// Fetches the published dependency records of one exact version
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails or times out
    /// - The registry answers with a non-success status
    /// - The response body cannot be decoded
    async fn fetch_dependencies(&self, name: &str, version: &str)
        -> Result<Vec<DependencyRecord>>;

    /// Fetches the version catalog of a crate, in registry order
    ///
    /// # Errors
    /// Same conditions as [`CrateRegistry::fetch_dependencies`].
    async fn fetch_versions(&self, name: &str) -> Result<Vec<VersionRecord>>;
}
