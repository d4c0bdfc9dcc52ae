use crate::dependency_graph::domain::{AnalysisReport, SkippedDependency};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Result of the load-order step. A cycle does not invalidate the rest of
/// the response; it only means no order exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadOrderOutcome {
    #[serde(rename = "ok")]
    Ordered { order: Vec<String> },
    CycleDetected { message: String },
}

impl LoadOrderOutcome {
    pub fn is_ordered(&self) -> bool {
        matches!(self, LoadOrderOutcome::Ordered { .. })
    }
}

/// AnalysisResponse - Internal response DTO from the analysis use case
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    pub root: String,
    pub max_depth: usize,
    pub generated_at: DateTime<Utc>,
    pub node_count: usize,
    pub edge_count: usize,
    #[serde(flatten)]
    pub report: AnalysisReport,
    pub load_order: LoadOrderOutcome,
    pub skipped_dependencies: Vec<SkippedDependency>,
}
