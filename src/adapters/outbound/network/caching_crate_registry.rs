use crate::dependency_graph::domain::{format_label, DependencyRecord, VersionRecord};
use crate::ports::outbound::CrateRegistry;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// One cache entry. Filled at most once; an unfilled slot means the
/// lookup is in flight or its last attempt failed.
type Slot<T> = Arc<OnceCell<Vec<T>>>;

/// Process-lifetime response caches for registry lookups.
///
/// Dependency lists are keyed by label (`name@version`), version catalogs
/// by crate name. Entries are never evicted. The cache is an explicit value
/// so each caller (and each test) decides its own sharing scope.
#[derive(Debug, Default)]
pub struct RegistryCache {
    dependencies: DashMap<String, Slot<DependencyRecord>>,
    versions: DashMap<String, Slot<VersionRecord>>,
}

impl RegistryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached dependency lists
    pub fn dependency_entries(&self) -> usize {
        filled(&self.dependencies)
    }

    /// Number of cached version catalogs
    pub fn version_entries(&self) -> usize {
        filled(&self.versions)
    }
}

fn filled<T>(map: &DashMap<String, Slot<T>>) -> usize {
    map.iter().filter(|entry| entry.value().initialized()).count()
}

/// Returns the slot for `key`, creating it on first use. The map guard is
/// released before returning so no shard lock is held across an await.
fn slot_for<T>(map: &DashMap<String, Slot<T>>, key: &str) -> Slot<T> {
    if let Some(slot) = map.get(key) {
        return Arc::clone(slot.value());
    }
    Arc::clone(map.entry(key.to_string()).or_default().value())
}

/// CachingCrateRegistry wraps a CrateRegistry and adds in-memory caching.
///
/// This adapter implements the decorator pattern: the crawler and resolver
/// only see a `CrateRegistry`, whether answers come from memory or the
/// network is invisible to them. One instance can be shared by concurrent
/// tasks. Concurrent misses on the same key wait for a single inner fetch.
/// Failed lookups are not cached; the next caller retries.
pub struct CachingCrateRegistry<R: CrateRegistry> {
    inner: R,
    cache: Arc<RegistryCache>,
}

impl<R: CrateRegistry> CachingCrateRegistry<R> {
    /// Creates a caching registry with a fresh, private cache
    pub fn new(inner: R) -> Self {
        Self::with_cache(inner, Arc::new(RegistryCache::new()))
    }

    /// Creates a caching registry backed by an existing cache
    pub fn with_cache(inner: R, cache: Arc<RegistryCache>) -> Self {
        Self { inner, cache }
    }

    pub fn cache(&self) -> &Arc<RegistryCache> {
        &self.cache
    }
}

#[async_trait]
impl<R: CrateRegistry> CrateRegistry for CachingCrateRegistry<R> {
    async fn fetch_dependencies(&self, name: &str, version: &str) -> Result<Vec<DependencyRecord>> {
        let slot = slot_for(&self.cache.dependencies, &format_label(name, version));
        let records = slot
            .get_or_try_init(|| self.inner.fetch_dependencies(name, version))
            .await?;
        Ok(records.clone())
    }

    async fn fetch_versions(&self, name: &str) -> Result<Vec<VersionRecord>> {
        let slot = slot_for(&self.cache.versions, name);
        let versions = slot
            .get_or_try_init(|| self.inner.fetch_versions(name))
            .await?;
        Ok(versions.clone())
    }
}
