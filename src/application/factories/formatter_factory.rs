use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Selects the formatter adapter for an [`OutputFormat`] so that callers
/// only ever see the [`ReportFormatter`] port.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use apk_graph::application::dto::{AnalysisResponse, OutputFormat};
    /// use apk_graph::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// let rendered = formatter.format(&AnalysisResponse::Leaves(vec![])).unwrap();
    /// assert_eq!(rendered.trim(), "[]");
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Text => Box::new(TextFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Rendering JSON output...",
            OutputFormat::Text => "📝 Rendering text output...",
        }
    }
}
