use crate::application::dto::AnalysisResponse;
use crate::shared::Result;

/// ReportFormatter port for rendering an analysis response
///
/// Implementations decide the textual shape (plain tree, JSON, ...).
pub trait ReportFormatter {
    /// Formats the whole response into the text that will be presented
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &AnalysisResponse) -> Result<String>;
}
