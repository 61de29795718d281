use crate::application::dto::AnalysisResponse;
use crate::shared::Result;

/// ReportFormatter port for rendering analysis results
///
/// This port abstracts the rendering of an [`AnalysisResponse`] into a
/// concrete output format (JSON, plain-text tables, etc.).
pub trait ReportFormatter {
    /// Renders one analysis response
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &AnalysisResponse) -> Result<String>;
}
