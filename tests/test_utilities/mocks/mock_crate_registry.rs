use async_trait::async_trait;
use cargo_depgraph::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock CrateRegistry serving canned dependency lists and version catalogs
///
/// Dependency lists are keyed by `name@version`; unknown labels have no
/// dependencies. Unknown crates have no version catalog (404).
#[derive(Default, Clone)]
pub struct MockCrateRegistry {
    dependencies: HashMap<String, Vec<DependencyRecord>>,
    versions: HashMap<String, Vec<VersionRecord>>,
    failing: HashSet<String>,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl MockCrateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name@version` with dependencies given as `(name, requirement)`
    pub fn with_crate(mut self, name: &str, version: &str, deps: &[(&str, &str)]) -> Self {
        let records = deps
            .iter()
            .map(|(dep, requirement)| DependencyRecord::new(dep, requirement))
            .collect();
        self.dependencies
            .insert(format!("{}@{}", name, version), records);
        self
    }

    /// Registers raw dependency records, e.g. optional or dev edges
    pub fn with_records(mut self, name: &str, version: &str, records: Vec<DependencyRecord>) -> Self {
        self.dependencies
            .insert(format!("{}@{}", name, version), records);
        self
    }

    pub fn with_versions(mut self, name: &str, versions: &[&str]) -> Self {
        self.versions.insert(
            name.to_string(),
            versions
                .iter()
                .map(|number| VersionRecord::new(number, false))
                .collect(),
        );
        self
    }

    pub fn with_yanked(mut self, name: &str, version: &str) -> Self {
        self.versions
            .entry(name.to_string())
            .or_default()
            .push(VersionRecord::new(version, true));
        self
    }

    /// Makes the dependency fetch of `name@version` fail with a 503
    pub fn with_failure(mut self, name: &str, version: &str) -> Self {
        self.failing.insert(format!("{}@{}", name, version));
        self
    }

    pub fn get_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CrateRegistry for MockCrateRegistry {
    async fn fetch_dependencies(&self, name: &str, version: &str) -> Result<Vec<DependencyRecord>> {
        let label = format!("{}@{}", name, version);
        self.requests
            .lock()
            .unwrap()
            .push(format!("dependencies {}", label));

        if self.failing.contains(&label) {
            return Err(DepGraphError::Registry {
                url: format!("mock://crates/{}/{}/dependencies", name, version),
                status: 503,
                body: "service unavailable".to_string(),
            }
            .into());
        }
        Ok(self.dependencies.get(&label).cloned().unwrap_or_default())
    }

    async fn fetch_versions(&self, name: &str) -> Result<Vec<VersionRecord>> {
        self.requests
            .lock()
            .unwrap()
            .push(format!("versions {}", name));

        self.versions.get(name).cloned().ok_or_else(|| {
            DepGraphError::Registry {
                url: format!("mock://crates/{}/versions", name),
                status: 404,
                body: "not found".to_string(),
            }
            .into()
        })
    }
}
