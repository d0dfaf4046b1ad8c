use crate::application::dto::FilterResponse;
use crate::ports::outbound::ResultFormatter;
use crate::shared::Result;

/// JsonFormatter adapter: pretty-printed filter response
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

impl ResultFormatter for JsonFormatter {
    fn format(&self, response: &FilterResponse) -> Result<String> {
        let mut output = serde_json::to_string_pretty(response)?;
        output.push('\n');
        Ok(output)
    }
}
