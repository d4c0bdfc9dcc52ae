//! In-memory registry shared by the service unit tests.

use crate::dependency_graph::domain::{format_label, DependencyRecord, VersionRecord};
use crate::ports::outbound::CrateRegistry;
use crate::shared::error::DepGraphError;
use crate::shared::Result;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryRegistry {
    dependencies: HashMap<String, Vec<DependencyRecord>>,
    versions: HashMap<String, Vec<VersionRecord>>,
    failing: HashSet<String>,
    dependency_calls: AtomicUsize,
    version_calls: AtomicUsize,
    fetched: Mutex<Vec<String>>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dependencies(mut self, name: &str, version: &str, deps: Vec<DependencyRecord>) -> Self {
        self.dependencies.insert(format_label(name, version), deps);
        self
    }

    pub fn with_versions(mut self, name: &str, versions: &[(&str, bool)]) -> Self {
        self.versions.insert(
            name.to_string(),
            versions
                .iter()
                .map(|(number, yanked)| VersionRecord::new(number, *yanked))
                .collect(),
        );
        self
    }

    /// Makes the dependency fetch of `name@version` fail with a 500
    pub fn with_failure(mut self, name: &str, version: &str) -> Self {
        self.failing.insert(format_label(name, version));
        self
    }

    pub fn dependency_calls(&self) -> usize {
        self.dependency_calls.load(Ordering::SeqCst)
    }

    pub fn version_calls(&self) -> usize {
        self.version_calls.load(Ordering::SeqCst)
    }

    /// Labels whose dependencies were fetched, in fetch order
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl CrateRegistry for InMemoryRegistry {
    async fn fetch_dependencies(&self, name: &str, version: &str) -> Result<Vec<DependencyRecord>> {
        self.dependency_calls.fetch_add(1, Ordering::SeqCst);
        let label = format_label(name, version);
        self.fetched.lock().unwrap().push(label.clone());

        if self.failing.contains(&label) {
            return Err(DepGraphError::Registry {
                url: label,
                status: 500,
                body: "internal error".to_string(),
            }
            .into());
        }
        Ok(self.dependencies.get(&label).cloned().unwrap_or_default())
    }

    async fn fetch_versions(&self, name: &str) -> Result<Vec<VersionRecord>> {
        self.version_calls.fetch_add(1, Ordering::SeqCst);
        self.versions.get(name).cloned().ok_or_else(|| {
            DepGraphError::Registry {
                url: name.to_string(),
                status: 404,
                body: "not found".to_string(),
            }
            .into()
        })
    }
}
