use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ResultFormatter;

/// Factory for creating result formatters
///
/// Selects the formatter adapter for an output format. Lives in the
/// application layer because it maps an application concern onto adapters.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use depfilter::application::dto::OutputFormat;
    /// use depfilter::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ResultFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::FilterResponse;
    use crate::dependency_resolution::domain::ComponentName;

    fn response() -> FilterResponse {
        FilterResponse {
            dependency_type: "FileShare".to_string(),
            components: vec![ComponentName::from_path("Core").unwrap().name()],
            excluded_count: 0,
            unresolved: vec![],
        }
    }

    #[test]
    fn test_create_text_formatter() {
        let output = FormatterFactory::create(OutputFormat::Text)
            .format(&response())
            .unwrap();
        assert_eq!(output, "Core\n");
    }

    #[test]
    fn test_create_json_formatter() {
        let output = FormatterFactory::create(OutputFormat::Json)
            .format(&response())
            .unwrap();
        assert!(output.trim_start().starts_with('{'));
        assert!(output.contains("\"components\""));
    }
}
