/// Mock implementations for testing
mod mock_crate_registry;
mod mock_fixture_reader;
mod mock_progress_reporter;

pub use mock_crate_registry::MockCrateRegistry;
pub use mock_fixture_reader::MockFixtureReader;
pub use mock_progress_reporter::MockProgressReporter;
