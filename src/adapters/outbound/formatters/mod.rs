/// Formatters for filter results
mod json_formatter;
mod text_formatter;

pub use json_formatter::JsonFormatter;
pub use text_formatter::TextFormatter;
