use crate::application::dto::FilterResponse;
use crate::ports::outbound::ResultFormatter;
use crate::shared::Result;

/// TextFormatter adapter: one canonical component name per line
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultFormatter for TextFormatter {
    fn format(&self, response: &FilterResponse) -> Result<String> {
        let mut output = String::new();
        for component in &response.components {
            output.push_str(component);
            output.push('\n');
        }
        Ok(output)
    }
}
