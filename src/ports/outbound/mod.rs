/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (registry, file system, console).
pub mod crate_registry;
pub mod fixture_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use crate_registry::CrateRegistry;
pub use fixture_reader::FixtureReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
