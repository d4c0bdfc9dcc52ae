use crate::dependency_graph::domain::format_label;
use std::path::PathBuf;

/// Where the adjacency structure comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphSource {
    /// Crawl the registry starting at the root crate
    Registry,
    /// Read an offline adjacency fixture; no network access
    Fixture(PathBuf),
}

/// AnalysisRequest - Internal request DTO for the analysis use case
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub package_name: String,
    /// Required for registry crawls; optional for fixtures
    pub version: Option<String>,
    /// 0 means unbounded
    pub max_depth: usize,
    pub source: GraphSource,
}

impl AnalysisRequest {
    pub fn new(
        package_name: String,
        version: Option<String>,
        max_depth: usize,
        source: GraphSource,
    ) -> Self {
        Self {
            package_name,
            version,
            max_depth,
            source,
        }
    }

    /// Root node label: `name@version`, or the bare name when no version is given
    pub fn root_label(&self) -> String {
        match self.version.as_deref() {
            Some(version) => format_label(&self.package_name, version),
            None => self.package_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_label_with_version() {
        let request = AnalysisRequest::new(
            "serde".to_string(),
            Some("1.0.200".to_string()),
            0,
            GraphSource::Registry,
        );
        assert_eq!(request.root_label(), "serde@1.0.200");
    }

    #[test]
    fn test_root_label_without_version() {
        let request = AnalysisRequest::new(
            "a".to_string(),
            None,
            0,
            GraphSource::Fixture(PathBuf::from("graph.txt")),
        );
        assert_eq!(request.root_label(), "a");
    }
}
