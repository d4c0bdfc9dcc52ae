use cargo_depgraph::prelude::*;
use std::path::Path;

/// Mock FixtureReader returning the same content for any path
pub struct MockFixtureReader {
    content: Option<String>,
}

impl MockFixtureReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: Some(content.to_string()),
        }
    }

    /// A reader for registry-mode tests; reading fails
    pub fn empty() -> Self {
        Self { content: None }
    }
}

impl FixtureReader for MockFixtureReader {
    fn read_fixture(&self, path: &Path) -> Result<String> {
        self.content.clone().ok_or_else(|| {
            DepGraphError::FileReadError {
                path: path.to_path_buf(),
                details: "no fixture configured".to_string(),
            }
            .into()
        })
    }
}
