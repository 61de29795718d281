use crate::application::dto::AnalysisResponse;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonFormatter adapter rendering responses as pretty-printed JSON
///
/// The document is the response payload itself, with camelCase keys, so
/// it can be fed straight into other tools.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, response: &AnalysisResponse) -> Result<String> {
        let mut json = serde_json::to_string_pretty(response)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}
