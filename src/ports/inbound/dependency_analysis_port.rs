use crate::application::dto::{AnalysisRequest, AnalysisResponse};
use crate::shared::Result;
use async_trait::async_trait;

/// DependencyAnalysisPort - Inbound port for the dependency analysis use case
///
/// External adapters (the CLI today) drive the application through this
/// port. It represents the application's public API.
#[async_trait]
pub trait DependencyAnalysisPort {
    /// Builds the adjacency structure for the requested root and analyzes it
    ///
    /// A cycle never fails this call: the report still lists it and the
    /// load-order outcome carries the cycle message instead of an order.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The root package reference is invalid, or no version is given in registry mode
    /// - Fetching any expanded node's dependency list fails
    /// - The fixture file cannot be read or parsed
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResponse>;
}
