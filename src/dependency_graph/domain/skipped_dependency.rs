use serde::Serialize;

/// A dependency edge the crawler dropped because its version could not be
/// resolved. Collected for diagnostics only; it never changes the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedDependency {
    /// Label of the dependent node
    pub parent: String,
    /// Crate name of the dropped dependency
    pub name: String,
    pub requirement: String,
    pub reason: String,
}
