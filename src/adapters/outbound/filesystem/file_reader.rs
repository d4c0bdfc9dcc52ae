use crate::ports::outbound::FixtureReader;
use crate::shared::error::DepGraphError;
use crate::shared::security::{validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading adjacency fixtures from disk
///
/// Rejects symbolic links, non-regular files and oversized files before
/// reading anything.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureReader for FileSystemReader {
    fn read_fixture(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(DepGraphError::FileReadError {
                path: path.to_path_buf(),
                details: "Fixture file does not exist".to_string(),
            }
            .into());
        }

        validate_regular_file(path, "Fixture file", MAX_FILE_SIZE)?;

        fs::read_to_string(path).map_err(|e| {
            DepGraphError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
