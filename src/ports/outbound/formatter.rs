use crate::application::dto::FilterResponse;
use crate::shared::Result;

/// ResultFormatter port for rendering a filter response
///
/// This port abstracts the output format (plain text, JSON, ...).
pub trait ResultFormatter {
    /// Formats the filter response
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &FilterResponse) -> Result<String>;
}
