use crate::shared::Result;
use std::path::Path;

/// FixtureReader port for reading an offline adjacency fixture
///
/// The fixture bypasses the registry entirely; parsing happens in the
/// domain layer, this port only delivers the raw text.
pub trait FixtureReader: Send + Sync {
    /// Reads the fixture file at `path`
    ///
    /// # Errors
    /// Returns an error if the file does not exist, is not a regular file,
    /// is too large, or cannot be read
    fn read_fixture(&self, path: &Path) -> Result<String>;
}
