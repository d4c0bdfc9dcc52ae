use serde::Serialize;

/// Output of one analyzer pass: tree rendering plus the repeated-node and
/// cycle reports gathered during the same traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub tree: String,
    /// Labels reached from more than one distinct parent, sorted
    pub repeated_nodes: Vec<String>,
    /// Cycles as `"a -> b -> a"`, deduplicated and sorted
    pub cycles: Vec<String>,
}
