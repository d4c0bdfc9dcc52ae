pub mod analysis_report;
pub mod graph;
pub mod package;
pub mod registry_records;
pub mod skipped_dependency;

pub use analysis_report::AnalysisReport;
pub use graph::DependencyGraph;
pub use package::{format_label, PackageName, PackageRef, Version};
pub use registry_records::{DependencyRecord, VersionRecord};
pub use skipped_dependency::SkippedDependency;
